//! Health check controller

use axum::response::Json;
use chrono::Utc;
use serde_json::json;

use crate::presentation::models::HealthResponse;

/// Basic health check endpoint for liveness probes
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        details: None,
    })
}

/// Detailed health check with build metadata
#[utoipa::path(
    get,
    path = "/health/detailed",
    tag = "health",
    responses(
        (status = 200, description = "Detailed health information", body = HealthResponse)
    )
)]
pub async fn detailed_health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        details: Some(json!({
            "build_info": {
                "version": env!("CARGO_PKG_VERSION"),
                "build_date": option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
                "git_sha": option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
            }
        })),
    })
}
