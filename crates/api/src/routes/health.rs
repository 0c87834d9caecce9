//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router};
use axum::routing::get;
use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status, always `"healthy"` — liveness, not readiness.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// `"healthy"` if a database ping succeeded, `"unhealthy"` otherwise.
    pub database: &'static str,
}

/// Health check handler. Always returns 200; `database` reports the probe
/// result rather than failing the request.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.db.ping().await.is_ok() {
        "healthy"
    } else {
        "unhealthy"
    };
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
