//! Data-access collaborator used by the HTTP layer.
//!
//! [`FruitStore`] is object safe so the application can hold a single
//! `Arc<dyn FruitStore>` opened at startup and closed at shutdown.
//! Identifiers are passed in raw; each store decides whether a value is a
//! well-formed id and reports [`StoreError::Cast`] when it is not.

mod memory;
mod postgres;

use async_trait::async_trait;
use fruitstand_core::types::RecordId;
use fruitstand_core::validation;
use validator::Validate;

use crate::models::fruit::{Fruit, NewFruit, UpdateFruit};

pub use memory::MemoryFruitStore;
pub use postgres::PgFruitStore;

/// Errors surfaced by a [`FruitStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The identifier could not be interpreted as a record id.
    #[error("Cast to UUID failed for value \"{value}\"")]
    Cast { value: String },

    /// The record violates the schema (missing or empty required field).
    #[error("{0}")]
    Validation(String),

    /// Any failure from the underlying database.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Stable error name reported to clients alongside the message.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cast { .. } => "CastError",
            Self::Validation(_) => "ValidationError",
            Self::Database(_) => "DatabaseError",
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over the fruit collection.
#[async_trait]
pub trait FruitStore: Send + Sync {
    /// Every record, in the store's natural (insertion) order.
    async fn find_all(&self) -> StoreResult<Vec<Fruit>>;

    /// A single record, or `None` if the id resolves to nothing.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>>;

    /// Insert one record and return it with its assigned id.
    async fn insert_one(&self, fruit: NewFruit) -> StoreResult<Fruit>;

    /// Insert a batch, returning the created records in input order.
    async fn insert_many(&self, fruits: Vec<NewFruit>) -> StoreResult<Vec<Fruit>>;

    /// Apply `changes` to the record. Returns `None` if it does not exist.
    async fn update_by_id(&self, id: &str, changes: UpdateFruit) -> StoreResult<Option<Fruit>>;

    /// Remove the record. Returns `false` if it did not exist.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release the underlying connection. Called once at shutdown.
    async fn close(&self) {}
}

/// Parse a raw identifier into a [`RecordId`].
pub fn parse_id(raw: &str) -> StoreResult<RecordId> {
    raw.parse().map_err(|_| StoreError::Cast {
        value: raw.to_string(),
    })
}

fn check_new(fruit: &NewFruit) -> StoreResult<()> {
    fruit
        .validate()
        .map_err(|e| StoreError::Validation(validation::describe("Fruit", &e)))
}

fn check_update(changes: &UpdateFruit) -> StoreResult<()> {
    changes
        .validate()
        .map_err(|e| StoreError::Validation(validation::describe("Fruit", &e)))
}
