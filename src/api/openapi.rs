//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the artifact-relay
//! REST API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the artifact-relay REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "artifact-relay REST API",
        version = "0.1.0",
        description = "REST API for publishing build artifacts to remote HTTP artifact stores",
        contact(
            name = "artifact-relay",
            url = "https://github.com/artifact-relay/artifact-relay"
        ),
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:7171", description = "Local development server")
    ),
    paths(
        // Publish
        crate::api::routes::publish_artifact,

        // Validation
        crate::api::routes::validate_store,
        crate::api::routes::validate_artifact,

        // System
        crate::api::routes::health_check,
        crate::api::routes::get_capabilities,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::ArtifactStore,
        crate::types::ArtifactConfig,
        crate::types::PublishRequest,
        crate::types::ValidationError,

        // Config types from config.rs
        crate::config::Config,
        crate::config::HttpConfig,
        crate::config::ApiConfig,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "publish", description = "Artifact publication - Upload build artifacts to their store"),
        (name = "validate", description = "Validation - Check store and artifact descriptors before use"),
        (name = "system", description = "System endpoints - Health checks, capabilities, OpenAPI spec"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security addon to add API key authentication scheme to OpenAPI spec
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "api_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-Api-Key"),
                    ),
                ),
            );
        }
    }
}
