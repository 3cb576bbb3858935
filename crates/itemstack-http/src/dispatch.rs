//! Item handler trait and route dispatch.

use async_trait::async_trait;

use crate::response::{Response, method_not_allowed};
use crate::router::ItemRoute;

/// Trait that the item business logic must implement.
///
/// Each method receives already-routed input and returns a complete
/// [`Response`]; failures are expressed as error responses, never as `Err`.
/// This trait is the boundary between the HTTP layer and the business logic
/// layer.
#[async_trait]
pub trait ItemsHandler: Send + Sync + 'static {
    /// Create an item from the raw JSON body. `request_uri` is the absolute
    /// URI of the collection, used to build the `Location` header.
    async fn create(&self, body: &str, request_uri: &str) -> Response;

    /// Fetch one item.
    async fn get(&self, item_id: &str) -> Response;

    /// Delete one item.
    async fn delete(&self, item_id: &str) -> Response;
}

/// Dispatch a resolved route to the handler.
pub async fn dispatch_route<H: ItemsHandler + ?Sized>(
    handler: &H,
    route: ItemRoute<'_>,
    body: &str,
    request_uri: &str,
) -> Response {
    tracing::debug!(route = %route, "dispatching item route");
    match route {
        ItemRoute::Create => handler.create(body, request_uri).await,
        ItemRoute::Get(item_id) => handler.get(item_id).await,
        ItemRoute::Delete(item_id) => handler.delete(item_id).await,
        ItemRoute::MethodNotAllowed(allow) => method_not_allowed(allow),
    }
}
