//! Store gateway.
//!
//! The store owns item identity and timestamps: `save` assigns an id when
//! the item has none and resets both timestamps on every upsert.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use itemstack_model::Item;

use crate::error::StoreError;

/// Persistence capability required by the item provider.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Upsert an item and return it as stored.
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Fetch an item by id.
    async fn get_by_id(&self, item_id: &str) -> Result<Item, StoreError>;

    /// Delete an item by id.
    async fn delete_by_id(&self, item_id: &str) -> Result<(), StoreError>;
}

/// Assign an id if absent and stamp `created_at` / `updated_at` with the
/// current time.
#[must_use]
pub fn prepare_for_save(mut item: Item) -> Item {
    if item.id.is_empty() {
        item.id = uuid::Uuid::new_v4().to_string();
    }
    let now = Utc::now();
    item.created_at = Some(now);
    item.updated_at = Some(now);
    item
}

/// In-memory store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: DashMap<String, Item>,
}

impl MemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        let item = prepare_for_save(item);
        self.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn get_by_id(&self, item_id: &str) -> Result<Item, StoreError> {
        if item_id.is_empty() {
            return Err(StoreError::MissingId);
        }
        self.items
            .get(item_id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, item_id: &str) -> Result<(), StoreError> {
        if item_id.is_empty() {
            return Err(StoreError::MissingId);
        }
        self.items.remove(item_id);
        Ok(())
    }
}
