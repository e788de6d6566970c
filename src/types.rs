//! Core value types for artifact publication
//!
//! Everything here is a request-scoped value object: constructed for one
//! publish or validate call, never cached, never shared mutably.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Environment variable names that carry the build coordinates, in the
/// order they appear in the upload path.
pub const COORDINATE_VARIABLES: [&str; 5] = [
    "PIPELINE_NAME",
    "PIPELINE_COUNTER",
    "STAGE_NAME",
    "STAGE_COUNTER",
    "JOB_NAME",
];

/// A named remote destination configured to receive published artifacts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArtifactStore {
    /// Base endpoint URL of the store (e.g., "https://store.example/files")
    pub url: String,
}

impl ArtifactStore {
    /// Validate the store descriptor, returning one finding per invalid field
    ///
    /// An empty result means the store is valid. The URL must be non-empty,
    /// parse as an absolute URL, and accept path segments (so `mailto:`-style
    /// URLs are rejected).
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut findings = Vec::new();

        if self.url.trim().is_empty() {
            findings.push(ValidationError::new("url", "Store URL must not be blank."));
        } else {
            match url::Url::parse(&self.url) {
                Ok(parsed) if parsed.cannot_be_a_base() => {
                    findings.push(ValidationError::new(
                        "url",
                        "Store URL cannot carry path segments.",
                    ));
                }
                Ok(_) => {}
                Err(e) => {
                    findings.push(ValidationError::new(
                        "url",
                        format!("Store URL must be a valid absolute URL: {e}."),
                    ));
                }
            }
        }

        findings
    }
}

/// What to publish: a local source file and a remote destination segment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArtifactConfig {
    /// Local file path of the artifact to upload
    pub source: String,

    /// Remote path segment the artifact is filed under
    pub destination: String,
}

impl ArtifactConfig {
    /// Validate the artifact descriptor, returning one finding per invalid field
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut findings = Vec::new();

        if self.source.trim().is_empty() {
            findings.push(ValidationError::new("source", "Source must not be blank."));
        }
        if self.destination.trim().is_empty() {
            findings.push(ValidationError::new(
                "destination",
                "Destination must not be blank.",
            ));
        }

        findings
    }
}

/// The (pipeline, pipeline run, stage, stage run, job) tuple identifying
/// the build that produced an artifact
///
/// Coordinates are opaque path segments: no character-set validation is
/// applied here. Each segment is percent-encoded when the upload URL is
/// built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCoordinates {
    /// Pipeline name
    pub pipeline_name: String,
    /// Pipeline run counter
    pub pipeline_counter: String,
    /// Stage name
    pub stage_name: String,
    /// Stage run counter
    pub stage_counter: String,
    /// Job name
    pub job_name: String,
}

impl BuildCoordinates {
    /// Build coordinates from an environment-variable mapping
    ///
    /// Reads the five [`COORDINATE_VARIABLES`]. A missing or empty variable
    /// is a configuration error naming that variable; no partial tuple is
    /// ever produced.
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self> {
        let get = |name: &str| -> Result<String> {
            env.get(name)
                .filter(|value| !value.is_empty())
                .cloned()
                .ok_or_else(|| {
                    Error::config(format!("missing build coordinate variable {name}"), name)
                })
        };

        Ok(Self {
            pipeline_name: get("PIPELINE_NAME")?,
            pipeline_counter: get("PIPELINE_COUNTER")?,
            stage_name: get("STAGE_NAME")?,
            stage_counter: get("STAGE_COUNTER")?,
            job_name: get("JOB_NAME")?,
        })
    }

    /// Build coordinates from the process environment
    ///
    /// Reads the same variables as [`BuildCoordinates::from_env_map`] but
    /// from `std::env`.
    pub fn from_env() -> Result<Self> {
        let env: HashMap<String, String> = COORDINATE_VARIABLES
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self::from_env_map(&env)
    }

    /// The coordinate values in upload-path order
    pub fn segments(&self) -> [&str; 5] {
        [
            &self.pipeline_name,
            &self.pipeline_counter,
            &self.stage_name,
            &self.stage_counter,
            &self.job_name,
        ]
    }
}

/// One publish call's worth of input, as supplied by the orchestrator
///
/// Build coordinates arrive inside `environment_variables` (the orchestrator
/// forwards the job's environment); [`PublishRequest::coordinates`] extracts
/// them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PublishRequest {
    /// The artifact to publish
    pub artifact_config: ArtifactConfig,

    /// The store to publish to
    pub artifact_store: ArtifactStore,

    /// Environment of the build job, carrying the coordinate variables
    #[serde(default)]
    pub environment_variables: HashMap<String, String>,
}

impl PublishRequest {
    /// Extract the build coordinates from the request's environment mapping
    pub fn coordinates(&self) -> Result<BuildCoordinates> {
        BuildCoordinates::from_env_map(&self.environment_variables)
    }
}

/// Outcome of a publish call
///
/// A rejected upload is a `Failure` value, not an [`Error`]: the remote
/// store answered, it just said no.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishResult {
    /// The store accepted the upload (HTTP 2xx); the payload is an empty object
    Success,

    /// The store rejected the upload (any non-2xx status)
    Failure {
        /// The store's verbatim response body, unparsed
        body: String,
    },
}

impl PublishResult {
    /// Whether the upload was accepted
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// JSON payload reported to the orchestrator
    ///
    /// Success is an empty object; failure is the store's response body as
    /// a JSON string, verbatim.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::Success => serde_json::json!({}),
            Self::Failure { body } => serde_json::Value::String(body.clone()),
        }
    }
}

/// One field-level validation finding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    /// The field the finding applies to (e.g., "url", "source")
    pub key: String,

    /// Human-readable description of the problem
    pub message: String,
}

impl ValidationError {
    /// Create a finding for a field
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}
