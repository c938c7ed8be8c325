//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::StartSessionHandler;
use crate::domain::session::validate_create_session;

use super::dto::StartSessionResponse;

/// Shared state for the session routes.
#[derive(Clone)]
pub struct SessionHandlers {
    start_handler: Arc<StartSessionHandler>,
}

impl SessionHandlers {
    pub fn new(start_handler: Arc<StartSessionHandler>) -> Self {
        Self { start_handler }
    }
}

/// POST /api/sesion/iniciar - Start a new planning session
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Json(payload): Json<Value>,
) -> Response {
    let input = match validate_create_session(&payload) {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(?errors, "rejected start-session payload");
            return ApiError::Validation(errors).into_response();
        }
    };

    match handlers.start_handler.handle(input).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(StartSessionResponse::new(session)),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(
                method = "POST",
                path = "/api/sesion/iniciar",
                error = %error,
                "failed to persist session"
            );
            ApiError::from(error).into_response()
        }
    }
}
