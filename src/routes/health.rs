// ============================================================================
// Health Routes
// ============================================================================
//
// Endpoints:
// - GET /health, /health/live - process is up
// - GET /health/ready         - resources root is a readable directory
//
// ============================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::resources::ResourceGateway;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_available: Option<bool>,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "portal",
        resources_available: None,
    })
}

/// GET /health/ready
pub async fn readiness_check(State(gateway): State<Arc<ResourceGateway>>) -> impl IntoResponse {
    let resources_available = match tokio::fs::read_dir(gateway.root()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Resources root is not readable");
            false
        }
    };

    let (status_code, status) = if resources_available {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            service: "portal",
            resources_available: Some(resources_available),
        }),
    )
}
