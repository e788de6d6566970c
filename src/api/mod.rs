//! REST API server module
//!
//! Exposes the artifact publisher over a minimal HTTP control surface: one
//! publish operation, two descriptor validation operations, and the usual
//! system endpoints.

use crate::{ArtifactPublisher, Config, Result};
use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Publish
/// - `POST /publish` - Upload one artifact to its store
///
/// ## Validation
/// - `POST /validate/store` - Validate an artifact store descriptor
/// - `POST /validate/artifact` - Validate an artifact descriptor
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /capabilities` - Publisher capabilities
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(publisher: Arc<ArtifactPublisher>, config: Arc<Config>) -> Router {
    let state = AppState::new(publisher, config.clone());

    let router = Router::new()
        // Publish
        .route("/publish", post(routes::publish_artifact))
        // Validation
        .route("/validate/store", post(routes::validate_store))
        .route("/validate/artifact", post(routes::validate_artifact))
        // System
        .route("/health", get(routes::health_check))
        .route("/capabilities", get(routes::get_capabilities))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state).
    // The UI gets its own spec path so it does not collide with the
    // /openapi.json route defined above.
    let router = if config.api.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    let router = router.with_state(state);

    // Apply authentication middleware if an API key is configured
    let router = if config.api.api_key.is_some() {
        router.layer(middleware::from_fn_with_state(
            config.api.api_key.clone(),
            auth::require_api_key,
        ))
    } else {
        router
    };

    // Apply CORS middleware if enabled in config
    if config.api.cors_enabled {
        let cors = build_cors_layer(&config.api.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// Origins support "*" for any origin; an empty list also allows any
/// origin, matching local-development expectations.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Creates a TCP listener, binds it to `config.api.bind_address`, and
/// serves the API router until the server is shut down.
///
/// # Example
///
/// ```no_run
/// use artifact_relay::{ArtifactPublisher, Config};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let publisher = Arc::new(ArtifactPublisher::new(config.clone())?);
///
/// // Start API server (blocks until shutdown)
/// artifact_relay::api::start_api_server(publisher, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(
    publisher: Arc<ArtifactPublisher>,
    config: Arc<Config>,
) -> Result<()> {
    let bind_address = config.api.bind_address;

    tracing::info!(address = %bind_address, "Starting API server");

    let app = create_router(publisher, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(address = %bind_address, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServer(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
