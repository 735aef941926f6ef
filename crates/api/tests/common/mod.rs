#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use memo_api::config::ServerConfig;
use memo_api::router::build_app_router;
use memo_api::state::AppState;
use memo_db::repositories::MemoRepo;
use memo_db::storage::MemoryMemoStorage;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given repository.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. Clones of the returned router share the repository.
pub fn build_test_app(memos: MemoRepo) -> Router {
    let config = test_config();
    let state = AppState {
        memos,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// An app over a fresh in-memory store.
pub fn memory_app() -> Router {
    build_test_app(MemoRepo::in_memory())
}

/// An app whose storage fails every call.
pub fn failing_app() -> Router {
    build_test_app(MemoRepo::new(Arc::new(MemoryMemoStorage::failing())))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_body(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_body(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw body labelled as JSON, for exercising malformed payloads.
pub async fn send_body(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a memo through the API and return its id.
pub async fn create_memo(app: &Router, title: &str, content: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/memos",
        serde_json::json!({"title": title, "content": content}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
