//! Error types for artifact-relay
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error variants (configuration, I/O, transport)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes
//!
//! A rejected upload (non-2xx response from the artifact store) is NOT an
//! error: it is reported as [`PublishResult::Failure`] carrying the store's
//! response body. Only local misconfiguration, local I/O failures, and
//! transport-level failures surface as [`Error`].
//!
//! [`PublishResult::Failure`]: crate::types::PublishResult::Failure

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for artifact-relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for artifact-relay
///
/// Each variant includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which field is invalid
    ///
    /// Covers malformed store URLs, empty artifact source/destination
    /// fields, and missing build-coordinate environment variables. Always
    /// detected before any network call is attempted.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "url")
        key: Option<String>,
    },

    /// I/O error (local artifact unreadable)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport error (connection, DNS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error (malformed request body)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request name does not correspond to any supported operation
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// API server error
    #[error("API server error: {0}")]
    ApiServer(String),
}

impl Error {
    /// Convenience constructor for a configuration error tied to a field
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// API error response format
///
/// This structure is returned by API endpoints when an error occurs.
/// It follows a standard format with machine-readable error codes,
/// human-readable messages, and optional contextual details.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "config_error",
///     "message": "configuration error: store URL must not be empty",
///     "details": {
///       "key": "url"
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "config_error", "remote_rejection")
    ///
    /// Clients can use this for programmatic error handling.
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create a "remote rejection" error carrying the store's verbatim
    /// response body as the message
    pub fn remote_rejection(body: impl Into<String>) -> Self {
        Self::new("remote_rejection", body)
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

/// Convert errors to HTTP status codes for API responses
///
/// This trait maps domain errors to appropriate HTTP status codes.
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - client supplied invalid input
            Error::Config { .. } => 400,
            Error::Serialization(_) => 400,

            // 404 Not Found
            Error::UnknownOperation(_) => 404,

            // 500 Internal Server Error
            Error::Io(_) => 500,
            Error::ApiServer(_) => 500,

            // 502 Bad Gateway - the artifact store is unreachable
            Error::Network(_) => 502,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Network(_) => "network_error",
            Error::Serialization(_) => "serialization_error",
            Error::UnknownOperation(_) => "unknown_operation",
            Error::ApiServer(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            Error::UnknownOperation(name) => Some(serde_json::json!({
                "operation": name,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
