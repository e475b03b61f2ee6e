//! Health check endpoint

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
}

/// GET /healthz - Liveness probe
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
