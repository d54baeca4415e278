// tests/support/helpers.rs
use super::memory::{FixedClock, MemoryStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use nc_news::application::services::{ApplicationServices, Repositories};
use nc_news::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn repositories(store: Arc<MemoryStore>) -> Repositories {
    Repositories {
        article_write: store.clone(),
        article_read: store.clone(),
        comments: store.clone(),
        topics: store.clone(),
        users: store,
    }
}

pub fn build_test_state(repos: Repositories) -> HttpState {
    let services = Arc::new(ApplicationServices::new(repos, Arc::new(FixedClock::default())));
    HttpState {
        services,
        endpoints_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("endpoints.json"),
    }
}

/// Router over a freshly seeded store.
pub fn make_test_router() -> Router {
    make_test_router_with_store(Arc::new(MemoryStore::seeded()))
}

pub fn make_test_router_with_store(store: Arc<MemoryStore>) -> Router {
    build_router(build_test_state(repositories(store)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = send(app, Method::GET, uri, None).await;
    let status = resp.status();
    (status, read_json(resp).await)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let resp = send(app, Method::POST, uri, Some(body)).await;
    let status = resp.status();
    (status, read_json(resp).await)
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let resp = send(app, Method::PATCH, uri, Some(body)).await;
    let status = resp.status();
    (status, read_json(resp).await)
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = send(app, Method::DELETE, uri, None).await;
    let status = resp.status();
    (status, read_json(resp).await)
}

/// `Value::Null` for an empty body.
pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub fn assert_error(result: (StatusCode, Value), status: StatusCode, msg: &str) {
    let (actual_status, body) = result;
    assert_eq!(actual_status, status, "unexpected status, body: {body}");
    assert_eq!(body, serde_json::json!({ "msg": msg }));
}

pub fn article_ids(body: &Value) -> Vec<i64> {
    body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["article_id"].as_i64().unwrap())
        .collect()
}

pub fn comment_ids(body: &Value) -> Vec<i64> {
    body["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect()
}
