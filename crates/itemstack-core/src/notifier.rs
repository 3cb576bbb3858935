//! Notifier gateway.

use async_trait::async_trait;
use itemstack_model::Item;

use crate::error::NotifyError;

/// Publish capability used for best-effort create notifications.
#[async_trait]
pub trait ItemNotifier: Send + Sync + 'static {
    /// Publish an item and return the message id.
    async fn publish(&self, item: &Item) -> Result<String, NotifyError>;
}
