//! GET /health

use axum::Json;

use crate::types::HealthResponse;

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        mode: "session-gate".into(),
    })
}
