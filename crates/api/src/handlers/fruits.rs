//! Handlers for the `/fruits` resource.
//!
//! Every handler makes exactly one store call, except update and delete which
//! first look the record up and only then mutate it. The two calls are not
//! atomic: if the record disappears in between, the mutation is still
//! reported as a success.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fruitstand_core::error::CoreError;
use fruitstand_core::seed::SEED_FRUITS;
use fruitstand_db::models::fruit::{CreateFruit, Fruit, NewFruit, UpdateFruit};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::extract::Payload;
use crate::response::{FruitResponse, FruitsResponse};
use crate::state::AppState;

/// GET /fruits
///
/// List every fruit in the store's natural order.
pub async fn list_fruits(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let fruits = state.store.find_all().await?;

    Ok(Json(FruitsResponse { fruits }))
}

/// POST /fruits
///
/// Create a fruit. `readyToEat` is a checkbox value: `"on"` means `true`,
/// anything else (or nothing) means `false`.
pub async fn create_fruit(
    State(state): State<AppState>,
    Payload(input): Payload<CreateFruit>,
) -> ApiResult<impl IntoResponse> {
    let new_fruit = input.into_new_fruit()?;
    let fruit = state.store.insert_one(new_fruit).await?;

    tracing::info!(fruit_id = %fruit.id, name = %fruit.name, "Fruit created");

    Ok((StatusCode::CREATED, Json(FruitResponse { fruit })))
}

/// GET /fruits/{id}
pub async fn get_fruit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let fruit = find_or_not_found(&state, &id).await?;

    Ok(Json(FruitResponse { fruit }))
}

/// PATCH /fruits/{id}
///
/// Overwrite the given fields. `readyToEat` must be a real boolean here.
///
/// The record is looked up before the body is inspected, so an unknown or
/// malformed id wins over a body that fails to decode.
pub async fn update_fruit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<UpdateFruit>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    find_or_not_found(&state, &id).await?;

    let Payload(input) = payload?;
    input.validate()?;
    state.store.update_by_id(&id, input).await?;

    tracing::info!(fruit_id = %id, "Fruit updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /fruits/{id}
pub async fn delete_fruit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    find_or_not_found(&state, &id).await?;

    state.store.delete_by_id(&id).await?;

    tracing::info!(fruit_id = %id, "Fruit deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /fruits/seed
///
/// Append the fixed seed batch. Not idempotent: each call inserts the three
/// records again.
pub async fn seed_fruits(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let batch: Vec<NewFruit> = SEED_FRUITS.into_iter().map(NewFruit::from).collect();
    let fruits = state.store.insert_many(batch).await?;

    tracing::info!(count = fruits.len(), "Fruits seeded");

    Ok(Json(FruitsResponse { fruits }))
}

async fn find_or_not_found(state: &AppState, id: &str) -> ApiResult<Fruit> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            ApiError::Core(CoreError::NotFound {
                entity: "Fruit",
                id: id.to_string(),
            })
        })
}
