//! Uniform response construction.
//!
//! One constructor per outcome kind. Error constructors wrap the message in
//! an [`ErrorBody`] whose `code` mirrors the status; an empty message is
//! replaced with the standard reason phrase for that status.

use std::collections::BTreeMap;

use http::StatusCode;
use itemstack_model::{ErrorBody, Item};
use serde::Serialize;

/// Response headers. Keys are kept exactly as supplied.
pub type Headers = BTreeMap<String, String>;

/// Pass as a message to get the standard reason phrase.
pub const DEFAULT_STATUS_TEXT: &str = "";

/// Serializable response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// A single item.
    Item(Item),
    /// A failure description.
    Error(ErrorBody),
    /// Arbitrary JSON.
    Json(serde_json::Value),
}

impl From<Item> for ResponseBody {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<ErrorBody> for ResponseBody {
    fn from(error: ErrorBody) -> Self {
        Self::Error(error)
    }
}

impl From<serde_json::Value> for ResponseBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// The outcome of handling one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status.
    pub status: StatusCode,
    /// Optional payload.
    pub body: Option<ResponseBody>,
    /// Caller-supplied headers.
    pub headers: Headers,
}

impl Response {
    /// The error payload, if this is a failure response.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorBody> {
        match &self.body {
            Some(ResponseBody::Error(err)) => Some(err),
            _ => None,
        }
    }
}

/// Resolve the message for a status, substituting the standard phrase for
/// an empty message.
fn status_text(status: StatusCode, message: &str) -> String {
    if message == DEFAULT_STATUS_TEXT {
        status.canonical_reason().unwrap_or_default().to_owned()
    } else {
        message.to_owned()
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    Response {
        status,
        body: Some(ErrorBody::with_code(status.as_u16(), status_text(status, message)).into()),
        headers: Headers::new(),
    }
}

/// 200 with the given body and headers.
#[must_use]
pub fn ok(body: impl Into<ResponseBody>, headers: Headers) -> Response {
    Response {
        status: StatusCode::OK,
        body: Some(body.into()),
        headers,
    }
}

/// 201 with a `Location` header.
#[must_use]
pub fn created(body: impl Into<ResponseBody>, location: impl Into<String>) -> Response {
    Response {
        status: StatusCode::CREATED,
        body: Some(body.into()),
        headers: Headers::from([("Location".to_owned(), location.into())]),
    }
}

/// 204 without body or headers.
#[must_use]
pub fn no_content() -> Response {
    Response {
        status: StatusCode::NO_CONTENT,
        body: None,
        headers: Headers::new(),
    }
}

/// 400 Bad Request.
#[must_use]
pub fn bad_request(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// 404 Not Found.
#[must_use]
pub fn not_found(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

/// 405 Method Not Allowed, listing the permitted methods in `Allow`.
#[must_use]
pub fn method_not_allowed(allow: &str) -> Response {
    let mut response = error_response(StatusCode::METHOD_NOT_ALLOWED, DEFAULT_STATUS_TEXT);
    response
        .headers
        .insert("Allow".to_owned(), allow.to_owned());
    response
}

/// 409 Conflict.
#[must_use]
pub fn conflict(message: &str) -> Response {
    error_response(StatusCode::CONFLICT, message)
}

/// 500 Internal Server Error.
#[must_use]
pub fn internal_server_error(message: &str) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
