#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_core::types::JsonMap;
use catalog_db::store::{
    Document, DocumentStore, MemoryDocumentStore, StoreError, StoreResult,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// Build the application router over a fresh in-memory store.
///
/// `Router` is cheap to clone; clone it for each request in a test.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryDocumentStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
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
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw body with a JSON content type, for malformed-input tests.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
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

/// Create a product through the API and return its id.
pub async fn create_product(app: &Router, body: serde_json::Value) -> String {
    let response = post_json(app.clone(), "/products", body).await;
    let json = body_json(response).await;
    json["product"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails as if the database were unreachable.
pub struct UnavailableStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn ping(&self) -> StoreResult<()> {
        unavailable()
    }

    async fn insert(&self, _collection: &str, _fields: JsonMap) -> StoreResult<Document> {
        unavailable()
    }

    async fn find_all(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        unavailable()
    }

    async fn find_by_id(&self, _collection: &str, _id: Uuid) -> StoreResult<Option<Document>> {
        unavailable()
    }

    async fn find_and_update_by_id(
        &self,
        _collection: &str,
        _id: Uuid,
        _patch: JsonMap,
    ) -> StoreResult<Option<Document>> {
        unavailable()
    }

    async fn find_and_delete_by_id(
        &self,
        _collection: &str,
        _id: Uuid,
    ) -> StoreResult<Option<Document>> {
        unavailable()
    }
}
