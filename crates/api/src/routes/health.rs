use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/health -- fixed liveness response. Does not touch the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Portfolio API is running",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
