// ============================================================================
// Axum Middleware
// ============================================================================
//
// - request_logging: one line per request with the matched route, status,
//   duration and, for redirects, where the caller was sent
// - add_security_headers: harden every response
//
// ============================================================================

use axum::{
    extract::{MatchedPath, Request},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Route label used when no route matched and the fallback answered
const FALLBACK_ROUTE: &str = "<fallback>";

/// Request logging middleware
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_ROUTE.to_string());

    let response = next.run(req).await;
    let duration_ms = start.elapsed().as_millis();

    match redirect_target(&response) {
        Some(target) => tracing::info!(
            method = %method,
            path = %path,
            route = %route,
            status = %response.status().as_u16(),
            redirect_to = %target,
            duration_ms = duration_ms,
            "Request redirected"
        ),
        None => tracing::info!(
            method = %method,
            path = %path,
            route = %route,
            status = %response.status().as_u16(),
            duration_ms = duration_ms,
            "Request completed"
        ),
    }

    response
}

/// `Location` of a redirect response, if it is one
pub fn redirect_target(response: &Response) -> Option<&str> {
    if !response.status().is_redirection() {
        return None;
    }
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// Add security headers to responses
pub async fn add_security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Redirect},
    };

    #[test]
    fn test_redirect_target() {
        let response = Redirect::temporary("/login").into_response();
        assert_eq!(redirect_target(&response), Some("/login"));
    }

    #[test]
    fn test_redirect_target_ignores_other_responses() {
        let response = (StatusCode::OK, [(header::LOCATION, "/elsewhere")]).into_response();
        assert_eq!(redirect_target(&response), None);

        let response = StatusCode::NOT_FOUND.into_response();
        assert_eq!(redirect_target(&response), None);
    }
}
