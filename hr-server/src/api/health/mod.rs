//! Health check route

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check router - public, no resource prefix
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    /// Crate version
    version: &'static str,
}

/// Basic health check; probes the store with a trivial query
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let status = match state.db.query("RETURN 1").await {
        Ok(_) => "healthy",
        Err(_) => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
    })
}
