//! HTTP layer for ItemStack.
//!
//! This crate turns API Gateway proxy events
//! (`aws_lambda_events::apigw::ApiGatewayProxyRequest`) into item operations
//! and back:
//!
//! - **Router**: Resolves the item route from the method and `itemId` path parameter
//! - **Handler trait**: Defines the boundary between HTTP and business logic
//! - **Service**: Runs one request through route → dispatch → serialize
//! - **Response helpers**: Uniform success/error responses and proxy serialization

pub mod dispatch;
pub mod proxy;
pub mod response;
pub mod router;
pub mod service;

pub use dispatch::ItemsHandler;
pub use proxy::ProxyResponse;
pub use response::{Headers, Response, ResponseBody};
pub use router::ItemRoute;
pub use service::ItemsHttpService;
