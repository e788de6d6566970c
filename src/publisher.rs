//! The artifact publisher: one multipart upload per invocation
//!
//! [`ArtifactPublisher`] owns a shared [`reqwest::Client`] (an immutable,
//! thread-safe connection pool) and the process-wide [`Config`]. Each
//! [`publish`](ArtifactPublisher::publish) call is independent and
//! order-insensitive relative to other calls; there are no retries, no
//! batching, and no state carried between calls.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{ArtifactConfig, ArtifactStore, BuildCoordinates, PublishResult};
use std::sync::Arc;
use url::Url;

/// Uploads build artifacts to a remote artifact store
#[derive(Clone, Debug)]
pub struct ArtifactPublisher {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl ArtifactPublisher {
    /// Create a publisher from the process-wide configuration
    ///
    /// The underlying HTTP client applies the configured request timeout,
    /// connect timeout, and user agent to every upload.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http.request_timeout)
            .connect_timeout(config.http.connect_timeout)
            .user_agent(config.http.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this publisher was built with
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Publish one artifact to the store
    ///
    /// Uploads the local file named by `artifact.source` as a
    /// `multipart/form-data` body (single part named `file`) to the URL
    /// formed by joining the store's base URL with the build coordinates
    /// and the artifact's destination and source segments.
    ///
    /// # Arguments
    ///
    /// * `artifact` - Local source path and remote destination segment
    /// * `store` - The artifact store to upload to
    /// * `coordinates` - The build that produced the artifact
    ///
    /// # Returns
    ///
    /// `Ok(PublishResult::Success)` when the store answers with a 2xx
    /// status, `Ok(PublishResult::Failure)` carrying the verbatim response
    /// body for any other status.
    ///
    /// # Errors
    ///
    /// Returns an error before any request is sent when the store URL does
    /// not parse, the artifact fields are blank, or the source file is
    /// unreadable. Transport failures (connect, DNS, timeout) also surface
    /// as errors; they are never retried.
    pub async fn publish(
        &self,
        artifact: &ArtifactConfig,
        store: &ArtifactStore,
        coordinates: &BuildCoordinates,
    ) -> Result<PublishResult> {
        // Preconditions are checked before any network traffic
        if let Some(finding) = store.validate().into_iter().next() {
            return Err(Error::config(finding.message, finding.key));
        }
        if let Some(finding) = artifact.validate().into_iter().next() {
            return Err(Error::config(finding.message, finding.key));
        }

        let url = build_target_url(store, artifact, coordinates)?;
        let bytes = tokio::fs::read(&artifact.source).await?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(artifact.source.clone())
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!(url = %url, source = %artifact.source, "uploading artifact");

        let response = self.client.post(url.clone()).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::info!(url = %url, status = %status, "artifact published");
            Ok(PublishResult::Success)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = %status, "artifact store rejected upload");
            Ok(PublishResult::Failure { body })
        }
    }
}

/// Construct the upload URL for an artifact
///
/// Appends, in fixed order, the path segments pipeline name, pipeline
/// counter, stage name, stage counter, job name, destination, and source
/// to the store's base URL. Each segment is percent-encoded, so distinct
/// coordinate tuples always map to distinct URLs (a `/` inside a value
/// stays inside its segment).
pub fn build_target_url(
    store: &ArtifactStore,
    artifact: &ArtifactConfig,
    coordinates: &BuildCoordinates,
) -> Result<Url> {
    let mut url = Url::parse(&store.url).map_err(|e| {
        Error::config(format!("invalid store URL {:?}: {e}", store.url), "url")
    })?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::config("store URL cannot carry path segments", "url"))?;
        // A trailing slash on the base URL would otherwise produce an empty segment
        segments.pop_if_empty();
        segments.extend(coordinates.segments());
        segments.push(&artifact.destination);
        segments.push(&artifact.source);
    }

    Ok(url)
}
