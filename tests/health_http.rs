//! Integration test for GET /health.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use rumbo::adapters::http::{build_router, SessionHandlers};
use rumbo::adapters::storage::InMemorySessionRepository;
use rumbo::application::handlers::StartSessionHandler;
use rumbo::config::ServerConfig;

fn app() -> Router {
    let repository = Arc::new(InMemorySessionRepository::new());
    let start_handler = Arc::new(StartSessionHandler::new(repository));
    build_router(&ServerConfig::default(), SessionHandlers::new(start_handler))
}

#[tokio::test]
async fn reports_liveness() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
    assert!(body["timestamp"].as_str().is_some_and(|ts| !ts.is_empty()));
}
