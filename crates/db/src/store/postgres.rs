use async_trait::async_trait;

use super::{check_new, check_update, parse_id, FruitStore, StoreResult};
use crate::models::fruit::{Fruit, NewFruit, UpdateFruit};
use crate::repositories::FruitRepo;
use crate::DbPool;

/// [`FruitStore`] backed by the `fruits` table.
#[derive(Clone)]
pub struct PgFruitStore {
    pool: DbPool,
}

impl PgFruitStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FruitStore for PgFruitStore {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        Ok(FruitRepo::list_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>> {
        let id = parse_id(id)?;
        Ok(FruitRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_one(&self, fruit: NewFruit) -> StoreResult<Fruit> {
        check_new(&fruit)?;
        Ok(FruitRepo::create(&self.pool, &fruit).await?)
    }

    async fn insert_many(&self, fruits: Vec<NewFruit>) -> StoreResult<Vec<Fruit>> {
        for fruit in &fruits {
            check_new(fruit)?;
        }
        Ok(FruitRepo::create_many(&self.pool, &fruits).await?)
    }

    async fn update_by_id(&self, id: &str, changes: UpdateFruit) -> StoreResult<Option<Fruit>> {
        let id = parse_id(id)?;
        check_update(&changes)?;
        Ok(FruitRepo::update(&self.pool, id, &changes).await?)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let id = parse_id(id)?;
        Ok(FruitRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        tracing::debug!("Closing database pool");
        self.pool.close().await;
    }
}
