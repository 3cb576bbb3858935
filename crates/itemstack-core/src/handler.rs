//! Handler bridging the HTTP layer to the item provider.
//!
//! Outcome mapping:
//!
//! | operation | success | any failure |
//! |-----------|---------|-------------|
//! | create    | 201 + `Location` | 400 |
//! | get       | 200     | 404 |
//! | delete    | 204     | 404 |

use std::sync::Arc;

use async_trait::async_trait;
use itemstack_http::dispatch::ItemsHandler;
use itemstack_http::response::{
    Headers, Response, bad_request, created, no_content, not_found, ok,
};

use crate::error::{ItemsError, StoreError};
use crate::notifier::ItemNotifier;
use crate::provider::ItemsProvider;
use crate::store::ItemStore;

/// Handler that bridges the HTTP layer to the [`ItemsProvider`].
#[derive(Debug)]
pub struct ItemStackHandler<S, N> {
    provider: Arc<ItemsProvider<S, N>>,
}

impl<S: ItemStore, N: ItemNotifier> ItemStackHandler<S, N> {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<ItemsProvider<S, N>>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<S: ItemStore, N: ItemNotifier> ItemsHandler for ItemStackHandler<S, N> {
    async fn create(&self, body: &str, request_uri: &str) -> Response {
        match self.provider.handle_create(body).await {
            Ok(saved) => {
                let location = format!("{request_uri}/{}", saved.id);
                created(saved, location)
            }
            // Store failures are reported as 400 along with client errors.
            Err(e) => {
                log_failure("create", &e);
                bad_request(&e.to_string())
            }
        }
    }

    async fn get(&self, item_id: &str) -> Response {
        match self.provider.handle_get(item_id).await {
            Ok(item) => ok(item, Headers::new()),
            Err(e) => {
                log_failure("get", &e);
                not_found(&e.to_string())
            }
        }
    }

    async fn delete(&self, item_id: &str) -> Response {
        match self.provider.handle_delete(item_id).await {
            Ok(()) => no_content(),
            Err(e) => {
                log_failure("delete", &e);
                not_found(&e.to_string())
            }
        }
    }
}

/// Absent items and rejected input are routine; anything else is a backend
/// failure worth an error line.
fn log_failure(operation: &'static str, err: &ItemsError) {
    match err {
        ItemsError::InvalidBody(_)
        | ItemsError::IdNotAllowed
        | ItemsError::Store(StoreError::NotFound | StoreError::MissingId) => {
            tracing::info!(operation, error = %err, "item request rejected");
        }
        ItemsError::Store(_) => {
            tracing::error!(operation, error = %err, "item store failure");
        }
    }
}
