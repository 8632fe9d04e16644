#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use fruitstand_api::config::{ServerConfig, StoreBackend};
use fruitstand_api::router::build_app_router;
use fruitstand_api::state::AppState;
use fruitstand_db::models::fruit::{Fruit, NewFruit, UpdateFruit};
use fruitstand_db::store::{FruitStore, MemoryFruitStore, StoreError, StoreResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store: StoreBackend::Memory,
        database_url: None,
        database_max_connections: 1,
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given store.
pub fn build_test_app(store: Arc<dyn FruitStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Build an app backed by a fresh in-memory store, returning the store too so
/// tests can inspect it directly.
pub fn memory_app() -> (Router, Arc<MemoryFruitStore>) {
    let store = Arc::new(MemoryFruitStore::new());
    let app = build_test_app(Arc::clone(&store) as Arc<dyn FruitStore>);
    (app, store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
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
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    form_request(app, Method::POST, uri, body).await
}

pub async fn patch_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    form_request(app, Method::PATCH, uri, body).await
}

async fn form_request(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
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

// ---------------------------------------------------------------------------
// Store double
// ---------------------------------------------------------------------------

/// A store whose every operation fails as if the connection were gone.
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl FruitStore for FailingStore {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: &str) -> StoreResult<Option<Fruit>> {
        unavailable()
    }

    async fn insert_one(&self, _fruit: NewFruit) -> StoreResult<Fruit> {
        unavailable()
    }

    async fn insert_many(&self, _fruits: Vec<NewFruit>) -> StoreResult<Vec<Fruit>> {
        unavailable()
    }

    async fn update_by_id(&self, _id: &str, _changes: UpdateFruit) -> StoreResult<Option<Fruit>> {
        unavailable()
    }

    async fn delete_by_id(&self, _id: &str) -> StoreResult<bool> {
        unavailable()
    }

    async fn ping(&self) -> StoreResult<()> {
        unavailable()
    }
}
