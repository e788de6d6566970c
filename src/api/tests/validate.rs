use super::*;

#[tokio::test]
async fn valid_store_yields_empty_findings() {
    let app = test_router();

    let response = app
        .oneshot(json_post(
            "/validate/store",
            serde_json::json!({"url": "https://store.example/files"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn invalid_store_url_yields_a_finding() {
    let app = test_router();

    let response = app
        .oneshot(json_post(
            "/validate/store",
            serde_json::json!({"url": "not a url"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let findings = body_json(response).await;
    assert_eq!(findings.as_array().unwrap().len(), 1);
    assert_eq!(findings[0]["key"], "url");
}

#[tokio::test]
async fn valid_artifact_yields_empty_findings() {
    let app = test_router();

    let response = app
        .oneshot(json_post(
            "/validate/artifact",
            serde_json::json!({"source": "build.jar", "destination": "out"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn blank_artifact_fields_yield_one_finding_each() {
    let app = test_router();

    let response = app
        .oneshot(json_post(
            "/validate/artifact",
            serde_json::json!({"source": "", "destination": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let findings = body_json(response).await;
    let findings = findings.as_array().unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["key"], "source");
    assert_eq!(findings[1]["key"], "destination");
}
