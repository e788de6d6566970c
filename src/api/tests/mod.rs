use super::*;
use crate::config::ApiConfig;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

mod validate;

/// Helper to create a router over a fresh publisher with the given config
fn router_with_config(config: Config) -> Router {
    let config = Arc::new(config);
    let publisher = Arc::new(ArtifactPublisher::new(config.clone()).unwrap());
    create_router(publisher, config)
}

/// Helper to create a router with the default configuration
fn test_router() -> Router {
    router_with_config(Config::default())
}

/// Helper to read a response body as JSON
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper to build a JSON POST request
fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_capabilities_endpoint_is_static_empty_object() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/capabilities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_cors_enabled() {
    let app = router_with_config(Config {
        api: ApiConfig {
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            ..ApiConfig::default()
        },
        ..Config::default()
    });

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_authentication_with_api_key() {
    let app = router_with_config(Config {
        api: ApiConfig {
            api_key: Some("test-secret-key".to_string()),
            ..ApiConfig::default()
        },
        ..Config::default()
    });

    // Request without API key should return 401
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Request with valid API key should succeed
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Api-Key", "test-secret-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Request with invalid API key should return 401
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Api-Key", "wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authentication_disabled_by_default() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_swagger_ui_enabled() {
    let app = router_with_config(Config {
        api: ApiConfig {
            swagger_ui: true,
            ..ApiConfig::default()
        },
        ..Config::default()
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Swagger UI should be accessible when enabled"
    );
}

#[tokio::test]
async fn test_swagger_ui_disabled() {
    let app = router_with_config(Config {
        api: ApiConfig {
            swagger_ui: false,
            ..ApiConfig::default()
        },
        ..Config::default()
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::NOT_FOUND,
        "Swagger UI should not be accessible when disabled"
    );
}

#[tokio::test]
async fn test_openapi_json_endpoint() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert!(json.get("openapi").is_some(), "Should have 'openapi' field");
    assert!(json.get("info").is_some(), "Should have 'info' field");
    assert!(json.get("paths").is_some(), "Should have 'paths' field");

    let openapi_version = json["openapi"].as_str().unwrap();
    assert!(openapi_version.starts_with("3."), "Should be OpenAPI 3.x");

    assert_eq!(json["info"]["title"], "artifact-relay REST API");

    let paths = json["paths"].as_object().unwrap();
    for expected in ["/publish", "/validate/store", "/validate/artifact", "/health"] {
        assert!(
            paths.contains_key(expected),
            "OpenAPI spec must contain path: {expected}"
        );
    }
}

#[tokio::test]
async fn test_server_starts_and_responds_to_health() {
    // Bind to a random available port (port 0)
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = test_router();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/health", addr);
    let response = client.get(url).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    server_handle.abort();
}
