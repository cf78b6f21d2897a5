#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use contacts::{ContactsConfig, ContactsModule};
use serde_json::Value;
use tower::ServiceExt as _;

/// Full contacts router (API + docs) over a fresh registry.
pub fn app(cfg: &ContactsConfig) -> Router {
    let module = ContactsModule::new(cfg);
    ContactsModule::register_docs(module.register_rest(Router::new()))
}

pub fn seeded_app() -> Router {
    app(&ContactsConfig::default())
}

/// Sends one request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_owned())
        .collect()
}
