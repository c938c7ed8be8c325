//! Error translation to the wire error envelope.
//!
//! Every failure leaving the HTTP layer is shaped as
//! `{ "status": "error", "message": ..., "details": ... }`. Validation
//! failures carry the field-to-messages map; anything else is surfaced
//! as a generic internal error without leaking the cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::session::ValidationErrors;
use crate::ports::StoreError;

const MSG_INVALID_DATA: &str = "Los datos proporcionados no son válidos";
const MSG_UNEXPECTED: &str = "Ha ocurrido un error inesperado.";

/// Client-facing error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(format!("Recurso no encontrado: {}", path))
    }
}

/// Failures the session endpoints can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Field-attributed rejection of the request payload.
    Validation(ValidationErrors),
    /// Store or otherwise unclassified failure; the cause stays
    /// server-side.
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => {
                let body = ErrorResponse {
                    status: "error",
                    message: MSG_INVALID_DATA.to_string(),
                    details: Some(details),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(MSG_UNEXPECTED)),
            )
                .into_response(),
        }
    }
}
