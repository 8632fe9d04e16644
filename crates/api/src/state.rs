use std::sync::Arc;

use fruitstand_db::store::FruitStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store handle is opened once at startup and shared
/// behind an `Arc`. Handlers hold no other state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Fruit persistence (Postgres in production, in-memory in tests).
    pub store: Arc<dyn FruitStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FruitStore>) -> Self {
        Self { store }
    }
}
