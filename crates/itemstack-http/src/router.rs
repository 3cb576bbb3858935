//! Item request router.
//!
//! Routing has two inputs: whether the `itemId` path parameter is present,
//! and the HTTP method.
//!
//! ```text
//! POST   /items            -> create
//! GET    /items/{itemId}   -> get
//! DELETE /items/{itemId}   -> delete
//! other  /items            -> 405, Allow: POST
//! other  /items/{itemId}   -> 405, Allow: GET, DELETE
//! ```

use std::fmt;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use http::Method;

/// Path parameter carrying the item identifier.
pub const ITEM_ID_PARAM: &str = "itemId";

/// Methods permitted on the collection path.
pub const COLLECTION_ALLOW: &str = "POST";

/// Methods permitted on a resource path.
pub const RESOURCE_ALLOW: &str = "GET, DELETE";

/// Hostname fragment of a default API Gateway endpoint. Such hosts need the
/// stage name as the first path segment.
const EXECUTE_API_HOST: &str = ".execute-api.";

/// Scheme used when `X-Forwarded-Proto` is absent.
const DEFAULT_SCHEME: &str = "https";

/// The action selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRoute<'a> {
    /// Create a new item from the body.
    Create,
    /// Fetch the item with this id.
    Get(&'a str),
    /// Delete the item with this id.
    Delete(&'a str),
    /// The method is not supported on this path; carries the `Allow` value.
    MethodNotAllowed(&'static str),
}

impl fmt::Display for ItemRoute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("CreateItem"),
            Self::Get(_) => f.write_str("GetItem"),
            Self::Delete(_) => f.write_str("DeleteItem"),
            Self::MethodNotAllowed(_) => f.write_str("MethodNotAllowed"),
        }
    }
}

/// Resolve the item route for a proxy request.
///
/// Method names are matched exactly, so a lowercase `post` is not `POST`.
#[must_use]
pub fn resolve_route(req: &ApiGatewayProxyRequest) -> ItemRoute<'_> {
    match item_id(req) {
        None => match req.http_method {
            Method::POST => ItemRoute::Create,
            _ => ItemRoute::MethodNotAllowed(COLLECTION_ALLOW),
        },
        Some(item_id) => match req.http_method {
            Method::GET => ItemRoute::Get(item_id),
            Method::DELETE => ItemRoute::Delete(item_id),
            _ => ItemRoute::MethodNotAllowed(RESOURCE_ALLOW),
        },
    }
}

/// The `itemId` path parameter. Empty counts as absent.
#[must_use]
pub fn item_id(req: &ApiGatewayProxyRequest) -> Option<&str> {
    req.path_parameters
        .get(ITEM_ID_PARAM)
        .map(String::as_str)
        .filter(|id| !id.is_empty())
}

/// Compute the absolute URI of the request.
///
/// Default `*.execute-api.*` hosts get the stage inserted before the path;
/// custom domains map the stage away and use the path as-is.
#[must_use]
pub fn request_uri(req: &ApiGatewayProxyRequest) -> String {
    let scheme = header(req, "x-forwarded-proto")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SCHEME);
    let host = header(req, "host").unwrap_or_default();
    let path = req.path.as_deref().unwrap_or_default();

    if host.contains(EXECUTE_API_HOST) {
        let stage = req.request_context.stage.as_deref().unwrap_or_default();
        format!("{scheme}://{host}/{stage}{path}")
    } else {
        format!("{scheme}://{host}{path}")
    }
}

/// Header value as text. Names are matched case-insensitively; values that
/// are not visible ASCII are ignored.
fn header<'a>(req: &'a ApiGatewayProxyRequest, name: &str) -> Option<&'a str> {
    req.headers.get(name).and_then(|v| v.to_str().ok())
}
