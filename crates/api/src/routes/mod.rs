pub mod fruits;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the router root.
///
/// ```text
/// /fruits                 list, create
/// /fruits/seed            seed
/// /fruits/{id}            show, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(fruits::router())
}
