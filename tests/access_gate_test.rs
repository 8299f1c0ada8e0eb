// ============================================================================
// Route Access Gate Tests
// ============================================================================
//
// Exercises the gate over HTTP, both in front of stand-in pages and as part
// of the full portal router.
//
// ============================================================================

use test_utils::{client, spawn_app, spawn_pages, SESSION_COOKIE};

use portal_config::AccessConfig;
use reqwest::{header, StatusCode};

async fn get(address: &str, path: &str, cookie: Option<&str>) -> reqwest::Response {
    let mut request = client().get(format!("http://{}{}", address, path));
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    request.send().await.unwrap()
}

fn location(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_home_without_session_redirects_to_login() {
    let address = spawn_pages(AccessConfig::default()).await;

    let response = get(&address, "/", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_home_with_session_is_allowed() {
    let address = spawn_pages(AccessConfig::default()).await;

    let response = get(&address, "/", Some(SESSION_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "home");
}

#[tokio::test]
async fn test_login_with_session_redirects_home() {
    let address = spawn_pages(AccessConfig::default()).await;

    let response = get(&address, "/login", Some(SESSION_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn test_login_without_session_is_allowed() {
    let address = spawn_pages(AccessConfig::default()).await;

    let response = get(&address, "/login", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "login");
}

#[tokio::test]
async fn test_unlisted_path_is_allowed_either_way() {
    let address = spawn_pages(AccessConfig::default()).await;

    for cookie in [None, Some(SESSION_COOKIE)] {
        let response = get(&address, "/quotes", cookie).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "quotes");
    }
}

#[tokio::test]
async fn test_secure_prefixed_cookie_counts_as_session() {
    let address = spawn_pages(AccessConfig::default()).await;

    let response = get(
        &address,
        "/",
        Some("theme=dark; __Secure-better-auth.session_token=xyz"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_custom_lists() {
    let access = AccessConfig {
        protected_paths: vec!["/quotes".to_string()],
        public_paths: vec![],
        ..AccessConfig::default()
    };
    let address = spawn_pages(access).await;

    let response = get(&address, "/quotes", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));

    // "/" is no longer protected
    let response = get(&address, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_gate_runs_in_front_of_portal_router() {
    let app = spawn_app().await;

    // Pages are not served here, yet the gate still redirects them
    let response = get(&app.address, "/", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login"));

    let response = get(&app.address, "/signup", Some(SESSION_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));

    // Allowed requests reach the router's fallback unchanged
    let response = get(&app.address, "/", Some(SESSION_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(location(&response).is_none());
}
