//! Item operations.
//!
//! The provider owns the create/get/delete semantics and returns typed
//! results; mapping them to HTTP responses is the handler's job.

use itemstack_model::Item;
use tracing::{debug, info, warn};

use crate::error::ItemsError;
use crate::notifier::ItemNotifier;
use crate::store::ItemStore;

/// Item business logic over a store and a notifier.
#[derive(Debug)]
pub struct ItemsProvider<S, N> {
    store: S,
    notifier: N,
}

impl<S: ItemStore, N: ItemNotifier> ItemsProvider<S, N> {
    /// Create a new provider.
    #[must_use]
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying notifier.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Create an item from a JSON body.
    ///
    /// The notification is published before the item is saved and its
    /// outcome never affects the result.
    pub async fn handle_create(&self, body: &str) -> Result<Item, ItemsError> {
        let item: Item = serde_json::from_str(body).map_err(ItemsError::InvalidBody)?;

        if item.has_id() {
            return Err(ItemsError::IdNotAllowed);
        }

        match self.notifier.publish(&item).await {
            Ok(message_id) => info!(message_id = %message_id, "published item notification"),
            Err(e) => warn!(error = %e, "item notification failed, continuing"),
        }

        let saved = self.store.save(item).await?;
        info!(item_id = %saved.id, "persisted item");
        Ok(saved)
    }

    /// Fetch an item.
    pub async fn handle_get(&self, item_id: &str) -> Result<Item, ItemsError> {
        debug!(item_id, "fetching item");
        Ok(self.store.get_by_id(item_id).await?)
    }

    /// Delete an item.
    pub async fn handle_delete(&self, item_id: &str) -> Result<(), ItemsError> {
        debug!(item_id, "deleting item");
        self.store.delete_by_id(item_id).await?;
        info!(item_id, "deleted item");
        Ok(())
    }
}
