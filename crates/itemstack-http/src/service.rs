//! Item request service: one API Gateway event in, one proxy response out.

use std::borrow::Cow;
use std::sync::Arc;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::dispatch::{ItemsHandler, dispatch_route};
use crate::proxy::{ProxyResponse, to_proxy_response};
use crate::response::bad_request;
use crate::router::{ItemRoute, request_uri, resolve_route};

/// Request service wrapping an [`ItemsHandler`].
///
/// Stateless apart from the shared handler, so one instance serves every
/// invocation.
#[derive(Debug)]
pub struct ItemsHttpService<H: ItemsHandler> {
    handler: Arc<H>,
}

impl<H: ItemsHandler> ItemsHttpService<H> {
    /// Create a new `ItemsHttpService`.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Handle a single proxy request.
    pub async fn handle(&self, req: ApiGatewayProxyRequest) -> ProxyResponse {
        let route = resolve_route(&req);
        let uri = request_uri(&req);

        let response = match route {
            ItemRoute::Create => match decode_body(&req) {
                Ok(body) => dispatch_route(self.handler.as_ref(), route, &body, &uri).await,
                Err(message) => bad_request(&message),
            },
            _ => dispatch_route(self.handler.as_ref(), route, "", &uri).await,
        };

        tracing::info!(
            method = %req.http_method,
            route = %route,
            status = response.status.as_u16(),
            "handled item request"
        );
        tracing::debug!(response = ?response, "item response");

        to_proxy_response(response)
    }
}

impl<H: ItemsHandler> Clone for ItemsHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

/// Extract the request body as text, decoding base64 when flagged.
fn decode_body(req: &ApiGatewayProxyRequest) -> Result<Cow<'_, str>, String> {
    let raw = req.body.as_deref().unwrap_or_default();
    if !req.is_base64_encoded {
        return Ok(Cow::Borrowed(raw));
    }

    let bytes = BASE64
        .decode(raw)
        .map_err(|e| format!("Invalid base64 request body: {e}"))?;
    String::from_utf8(bytes)
        .map(Cow::Owned)
        .map_err(|e| format!("Request body is not valid UTF-8: {e}"))
}
