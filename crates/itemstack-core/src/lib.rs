//! Item business logic for ItemStack.
//!
//! The provider validates requests and drives two gateways: an
//! [`ItemStore`](store::ItemStore) for persistence and an
//! [`ItemNotifier`](notifier::ItemNotifier) for best-effort notifications.
//! Production implementations are backed by DynamoDB and SNS.
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
pub mod dynamodb;
pub mod error;
pub mod handler;
pub mod notifier;
pub mod provider;
pub mod sns;
pub mod store;

pub use config::{ItemsConfig, LogFormat, LoggingConfig};
pub use error::{ConfigError, ItemsError, NotifyError, StoreError};
pub use handler::ItemStackHandler;
pub use provider::ItemsProvider;
