//! Router assembly.
//!
//! Builds the full application router: session and health routes, the
//! not-found fallback, and the middleware stack (request ids, request
//! tracing, CORS, compression, request timeout).

use std::time::Duration;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::error::ErrorResponse;
use super::health::health_routes;
use super::session::{session_routes, SessionHandlers};

/// Assembles the application router.
pub fn build_router(config: &ServerConfig, session_handlers: SessionHandlers) -> Router {
    Router::new()
        .nest("/api/sesion", session_routes(session_handlers))
        .merge(health_routes(config.environment.clone()))
        .fallback(not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
        .into_response()
}
