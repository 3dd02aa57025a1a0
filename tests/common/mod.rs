#![allow(dead_code)]

use atlas_api::{build_app, AppState, MemoryStore};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    build_app(state, 64 * 1024)
}

/// Send one request; the response body is parsed as JSON (`Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn japan() -> Value {
    serde_json::json!({
        "name": "Japan",
        "capital": "Tokyo",
        "population": 125000000,
        "languages": "Japanese"
    })
}
