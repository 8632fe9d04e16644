//! Route definitions for the fruit resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fruits;
use crate::state::AppState;

/// Fruit routes.
///
/// ```text
/// GET    /fruits          -> list_fruits
/// POST   /fruits          -> create_fruit
/// GET    /fruits/seed     -> seed_fruits
/// GET    /fruits/{id}     -> get_fruit
/// PATCH  /fruits/{id}     -> update_fruit
/// DELETE /fruits/{id}     -> delete_fruit
/// ```
///
/// `/fruits/seed` is a static segment and takes precedence over `{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fruits", get(fruits::list_fruits).post(fruits::create_fruit))
        .route("/fruits/seed", get(fruits::seed_fruits))
        .route(
            "/fruits/{id}",
            get(fruits::get_fruit)
                .patch(fruits::update_fruit)
                .delete(fruits::delete_fruit),
        )
}
