//! Artifact publication handler.

use crate::api::AppState;
use crate::error::ApiError;
use crate::types::{PublishRequest, PublishResult};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /publish - Upload one artifact to its store
///
/// Precondition violations (blank fields, unparseable store URL, missing
/// coordinate variables) are rejected with 400 before any outbound request
/// is made. A store that answers with a non-2xx status produces a 502 whose
/// error message is the store's response body, verbatim.
#[utoipa::path(
    post,
    path = "/publish",
    tag = "publish",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Artifact accepted by the store"),
        (status = 400, description = "Invalid request, rejected before upload", body = crate::error::ApiError),
        (status = 500, description = "Local artifact unreadable", body = crate::error::ApiError),
        (status = 502, description = "Store rejected the upload or is unreachable", body = crate::error::ApiError)
    )
)]
pub async fn publish_artifact(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Response {
    let coordinates = match request.coordinates() {
        Ok(coordinates) => coordinates,
        Err(e) => return e.into_response(),
    };

    match state
        .publisher
        .publish(&request.artifact_config, &request.artifact_store, &coordinates)
        .await
    {
        Ok(PublishResult::Success) => (StatusCode::OK, Json(json!({}))).into_response(),
        Ok(PublishResult::Failure { body }) => (
            StatusCode::BAD_GATEWAY,
            Json(ApiError::remote_rejection(body)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "publish failed");
            e.into_response()
        }
    }
}
