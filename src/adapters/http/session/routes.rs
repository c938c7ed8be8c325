//! HTTP routes for session endpoints.

use axum::{routing::post, Router};

use super::handlers::{start_session, SessionHandlers};

/// Creates the session router.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/iniciar", post(start_session))
        .with_state(handlers)
}
