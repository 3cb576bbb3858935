//! Failure response body.
//!
//! Every non-2xx response carries an [`ErrorBody`]:
//!
//! ```json
//! {
//!   "code": 404,
//!   "message": "Resource not found"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// JSON body of a failure response.
///
/// Use either `code` or `reason`, not both. `meta` is private diagnostic
/// data and is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ErrorBody {
    /// Numeric code, usually the HTTP status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Symbolic code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// Public structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Nested errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorBody>,
    /// Private metadata.
    #[serde(skip)]
    pub meta: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Create an error body with a numeric code.
    #[must_use]
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Create an error body with a symbolic reason.
    #[must_use]
    pub fn with_reason(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attach public details.
    #[must_use]
    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Append a nested error.
    #[must_use]
    pub fn push(mut self, error: ErrorBody) -> Self {
        self.errors.push(error);
        self
    }

    /// Attach private metadata.
    #[must_use]
    pub fn meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }
}
