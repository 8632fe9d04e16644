use async_trait::async_trait;
use fruitstand_core::types::new_record_id;
use tokio::sync::RwLock;

use super::{check_new, check_update, parse_id, FruitStore, StoreResult};
use crate::models::fruit::{Fruit, NewFruit, UpdateFruit};

/// [`FruitStore`] holding records in process memory.
///
/// Records are kept in a `Vec` so iteration order is insertion order.
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`.
#[derive(Default)]
pub struct MemoryFruitStore {
    fruits: RwLock<Vec<Fruit>>,
}

impl MemoryFruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.fruits.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.fruits.read().await.is_empty()
    }
}

fn materialize(fruit: NewFruit) -> Fruit {
    let now = chrono::Utc::now();
    Fruit {
        id: new_record_id(),
        name: fruit.name,
        color: fruit.color,
        ready_to_eat: fruit.ready_to_eat,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl FruitStore for MemoryFruitStore {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        Ok(self.fruits.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>> {
        let id = parse_id(id)?;
        Ok(self.fruits.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn insert_one(&self, fruit: NewFruit) -> StoreResult<Fruit> {
        check_new(&fruit)?;
        let created = materialize(fruit);
        self.fruits.write().await.push(created.clone());
        Ok(created)
    }

    async fn insert_many(&self, fruits: Vec<NewFruit>) -> StoreResult<Vec<Fruit>> {
        for fruit in &fruits {
            check_new(fruit)?;
        }
        let created: Vec<Fruit> = fruits.into_iter().map(materialize).collect();
        self.fruits.write().await.extend(created.iter().cloned());
        Ok(created)
    }

    async fn update_by_id(&self, id: &str, changes: UpdateFruit) -> StoreResult<Option<Fruit>> {
        let id = parse_id(id)?;
        check_update(&changes)?;

        let mut fruits = self.fruits.write().await;
        let Some(fruit) = fruits.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        changes.apply_to(fruit);
        fruit.updated_at = chrono::Utc::now();
        Ok(Some(fruit.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let id = parse_id(id)?;

        let mut fruits = self.fruits.write().await;
        let before = fruits.len();
        fruits.retain(|f| f.id != id);
        Ok(fruits.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
