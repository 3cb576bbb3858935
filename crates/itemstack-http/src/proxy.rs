//! Conversion of a [`Response`] into an API Gateway proxy response.
//!
//! [`ProxyResponse`] mirrors the REST proxy integration response. Header
//! names are kept as strings because `http::HeaderMap`, used by
//! `aws_lambda_events::apigw::ApiGatewayProxyResponse`, lowercases them and
//! callers expect `Location` and `Allow` back exactly as set.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::response::{Headers, Response};

/// Content type for every response body.
pub const CONTENT_TYPE: &str = "application/json";

/// Body returned when a response payload cannot be encoded.
const ENCODING_FAILURE_BODY: &str = r#"{"code":500,"message":"Internal Server Error"}"#;

/// The response handed back to API Gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers, keys exactly as set.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Response body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Always `false`: bodies are JSON text.
    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// Serialize a [`Response`] into the proxy response shape.
///
/// Headers are copied verbatim. When a body is present it is encoded as
/// JSON and `Content-Type: application/json` is forced, replacing any
/// caller-supplied value for that key. A response without a body never
/// gains a `Content-Type`.
#[must_use]
pub fn to_proxy_response(response: Response) -> ProxyResponse {
    let Response {
        status,
        body,
        headers,
    } = response;
    encode(status, headers, body.as_ref())
}

/// Build the proxy response for any serializable body.
///
/// A body that fails to encode turns the whole response into a bare 500,
/// since the intended payload cannot be delivered.
pub(crate) fn encode<B: Serialize>(
    status: StatusCode,
    headers: Headers,
    body: Option<&B>,
) -> ProxyResponse {
    let mut proxy = ProxyResponse {
        status_code: status.as_u16(),
        headers,
        body: None,
        is_base64_encoded: false,
    };

    if let Some(body) = body {
        match serde_json::to_string(body) {
            Ok(json) => {
                proxy
                    .headers
                    .insert("Content-Type".to_owned(), CONTENT_TYPE.to_owned());
                proxy.body = Some(json);
            }
            Err(e) => {
                tracing::error!(status = %status, error = %e, "failed to encode response body");
                return encoding_failure();
            }
        }
    }

    proxy
}

fn encoding_failure() -> ProxyResponse {
    ProxyResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        headers: [("Content-Type".to_owned(), CONTENT_TYPE.to_owned())].into(),
        body: Some(ENCODING_FAILURE_BODY.to_owned()),
        is_base64_encoded: false,
    }
}
