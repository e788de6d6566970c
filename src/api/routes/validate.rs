//! Descriptor validation handlers.
//!
//! Both handlers answer 200 with a JSON array of field-level findings; an
//! empty array means the descriptor is valid. This mirrors how the
//! orchestrator consumes validation results: it renders findings next to
//! the offending fields rather than treating them as request failures.

use crate::types::{ArtifactConfig, ArtifactStore, ValidationError};
use axum::{Json, response::IntoResponse};

/// POST /validate/store - Validate an artifact store descriptor
#[utoipa::path(
    post,
    path = "/validate/store",
    tag = "validate",
    request_body = ArtifactStore,
    responses(
        (status = 200, description = "Validation findings (empty array = valid)", body = Vec<ValidationError>),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn validate_store(Json(store): Json<ArtifactStore>) -> impl IntoResponse {
    Json(store.validate())
}

/// POST /validate/artifact - Validate an artifact descriptor
#[utoipa::path(
    post,
    path = "/validate/artifact",
    tag = "validate",
    request_body = ArtifactConfig,
    responses(
        (status = 200, description = "Validation findings (empty array = valid)", body = Vec<ValidationError>),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn validate_artifact(Json(artifact): Json<ArtifactConfig>) -> impl IntoResponse {
    Json(artifact.validate())
}
