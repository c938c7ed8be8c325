//! Liveness endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::config::Environment;
use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: Environment,
    pub timestamp: String,
}

/// Creates the health router.
pub fn health_routes(environment: Environment) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(environment)
}

async fn health(State(environment): State<Environment>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        environment,
        timestamp: Timestamp::now().to_iso8601(),
    })
}
