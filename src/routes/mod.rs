// ============================================================================
// Routes
// ============================================================================
//
// Router assembly. Layers are added after the fallback so they wrap it too:
// the route access gate sees every request, not only the routes served here.
//
// ============================================================================

pub mod health;
pub mod middleware;

use axum::{
    http::{header, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::get,
    Router,
};
use portal_config::AccessConfig;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::access_gate::route_access_gate;
use crate::resources::{serve_resource, ResourceGateway};

/// Build the application router
pub fn create_router(gateway: Arc<ResourceGateway>, access: Arc<AccessConfig>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/resources/*path", get(serve_resource))
        .fallback(not_found)
        .with_state(gateway)
        // ServiceBuilder layers run top to bottom
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_logging))
                .layer(from_fn(middleware::add_security_headers))
                .layer(from_fn_with_state(access, route_access_gate))
                .into_inner(),
        )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not found",
    )
}
