//! # artifact-relay
//!
//! Library for publishing build artifacts to remote HTTP artifact stores.
//!
//! ## Design Philosophy
//!
//! artifact-relay is designed to be:
//! - **Single-purpose** - One upload per publish call, no retries, no queues
//! - **Explicit** - Configuration is built once and passed in, never ambient
//! - **Library-first** - Embed the publisher directly, or run the bundled
//!   REST API for orchestrators that prefer a wire protocol
//!
//! The upload target is a fixed hierarchical namespace: store base URL,
//! then pipeline, pipeline run, stage, stage run, job, destination
//! directory, and finally the artifact filename.
//!
//! ## Quick Start
//!
//! ```no_run
//! use artifact_relay::{
//!     ArtifactConfig, ArtifactPublisher, ArtifactStore, BuildCoordinates, Config, PublishResult,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let publisher = ArtifactPublisher::new(config)?;
//!
//!     let store = ArtifactStore {
//!         url: "https://store.example/files".to_string(),
//!     };
//!     let artifact = ArtifactConfig {
//!         source: "build.jar".to_string(),
//!         destination: "out".to_string(),
//!     };
//!     let coordinates = BuildCoordinates::from_env()?;
//!
//!     match publisher.publish(&artifact, &store, &coordinates).await? {
//!         PublishResult::Success => println!("published"),
//!         PublishResult::Failure { body } => eprintln!("store rejected upload: {body}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Named operations of the control surface
pub mod operations;
/// The artifact publisher
pub mod publisher;
/// Core value types
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, HttpConfig};
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use operations::{Operation, dispatch};
pub use publisher::{ArtifactPublisher, build_target_url};
pub use types::{
    ArtifactConfig, ArtifactStore, BuildCoordinates, COORDINATE_VARIABLES, PublishRequest,
    PublishResult, ValidationError,
};

/// Helper function to run the API server with graceful signal handling.
///
/// Spawns the API server and waits for a termination signal, then stops
/// the server.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with a Ctrl+C fallback if
///   signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use artifact_relay::{ArtifactPublisher, Config, run_with_shutdown};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Arc::new(Config::default());
///     let publisher = Arc::new(ArtifactPublisher::new(config.clone())?);
///
///     run_with_shutdown(publisher, config).await?;
///
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(
    publisher: std::sync::Arc<ArtifactPublisher>,
    config: std::sync::Arc<Config>,
) -> Result<()> {
    let server = tokio::spawn(api::start_api_server(publisher, config));

    wait_for_signal().await;
    tracing::info!("Shutting down API server");
    server.abort();

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration can fail in restricted environments (containers, tests)
    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        _ => {
            tracing::warn!("Could not register unix signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
