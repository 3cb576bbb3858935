//! Error types for configuration, the gateways and item operations.

/// Boxed backend error kept as the source of a gateway failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable holds an unsupported value.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Store gateway error.
///
/// Display strings are returned to clients as-is, so backend variants carry
/// a fixed message and keep the SDK error as their source.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Empty item id.
    #[error("Missing resource ID")]
    MissingId,

    /// No item with the requested id.
    #[error("Resource not found")]
    NotFound,

    /// The backend rejected a write.
    #[error("Failed to save into the repository")]
    Save(#[source] BoxError),

    /// The backend failed a read.
    #[error("Failed to read item from the repository")]
    Read(#[source] BoxError),

    /// The backend failed a delete.
    #[error("Failed to delete item from the repository")]
    Delete(#[source] BoxError),

    /// A stored record does not map onto an item.
    #[error("Failed to decode stored item: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether the item is absent, as opposed to the backend failing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Notifier gateway error. Never surfaced to clients.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The item could not be encoded as a message.
    #[error("Failed to encode notification message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend rejected the publish.
    #[error("Failed to send a message to {topic_arn}")]
    Publish {
        /// Destination topic.
        topic_arn: String,
        /// Backend error.
        #[source]
        source: BoxError,
    },
}

/// Item operation error.
#[derive(Debug, thiserror::Error)]
pub enum ItemsError {
    /// The request body is not an item.
    #[error("{0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The client tried to choose the id.
    #[error("Item ID is not allowed when creating a new resource.")]
    IdNotAllowed,

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
