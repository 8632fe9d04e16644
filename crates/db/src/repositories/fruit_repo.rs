//! Repository for the `fruits` table.

use fruitstand_core::types::{new_record_id, RecordId};
use sqlx::{PgExecutor, PgPool};

use crate::models::fruit::{Fruit, NewFruit, UpdateFruit};

/// Column list for `fruits` queries.
const COLUMNS: &str = "id, name, color, ready_to_eat, created_at, updated_at";

/// Provides CRUD operations for fruits.
pub struct FruitRepo;

impl FruitRepo {
    /// List every fruit in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Fruit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fruits ORDER BY id");
        sqlx::query_as::<_, Fruit>(&query).fetch_all(pool).await
    }

    /// Find a fruit by its ID.
    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<Fruit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fruits WHERE id = $1");
        sqlx::query_as::<_, Fruit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new fruit, returning the created row.
    ///
    /// Generic over the executor so it can run inside a transaction.
    pub async fn create<'e, E>(executor: E, input: &NewFruit) -> Result<Fruit, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO fruits (id, name, color, ready_to_eat) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fruit>(&query)
            .bind(new_record_id())
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.ready_to_eat)
            .fetch_one(executor)
            .await
    }

    /// Insert a batch of fruits in one transaction. Either every row is
    /// written or none are.
    pub async fn create_many(pool: &PgPool, inputs: &[NewFruit]) -> Result<Vec<Fruit>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::create(&mut *tx, input).await?);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Update a fruit. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &UpdateFruit,
    ) -> Result<Option<Fruit>, sqlx::Error> {
        let query = format!(
            "UPDATE fruits SET \
                 name = COALESCE($2, name), \
                 color = COALESCE($3, color), \
                 ready_to_eat = COALESCE($4, ready_to_eat), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fruit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.ready_to_eat)
            .fetch_optional(pool)
            .await
    }

    /// Delete a fruit by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fruits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
