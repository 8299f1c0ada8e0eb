use test_utils::{client, spawn_app, spawn_app_without_root};

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    for path in ["/health", "/health/live"] {
        let response = client().get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portal");
    }
}

#[tokio::test]
async fn test_ready_with_resources_root() {
    let app = spawn_app().await;

    let response = client().get(app.url("/health/ready")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["resources_available"], true);
}

#[tokio::test]
async fn test_ready_without_resources_root() {
    let app = spawn_app_without_root().await;

    let response = client().get(app.url("/health/ready")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["resources_available"], false);
}
