//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use trendify_api::config::{AppConfig, StoreBackend};
use trendify_api::store::MemoryStore;
use trendify_api::HttpServer;

/// Configuration for tests: in-memory store, open CORS.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    config.cors.allowed_origins = vec!["http://localhost:3000".into()];
    config
}

/// Router over a fresh in-memory store. The store handle is returned so
/// tests can inspect it.
pub fn test_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let server = HttpServer::new(test_config(), Arc::new(store.clone()));
    (server.router(), store)
}

/// Send one request and return status, headers and parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, headers, json)
}

pub fn hat() -> Value {
    serde_json::json!({
        "name": "Hat",
        "price": 25,
        "description": "d",
        "category": "Accessories",
        "imageUrl": "/i.png",
        "sizes": ["One Size"]
    })
}
