//! Service configuration.
//!
//! All configuration is read from environment variables once at startup and
//! passed explicitly to the components that need it.

use std::env;

use crate::error::ConfigError;

/// DynamoDB table holding the items.
pub const ENV_TABLE_NAME: &str = "DB_TABLE_NAME";
/// SNS topic receiving create notifications.
pub const ENV_TOPIC_ARN: &str = "SNS_TOPIC_ARN";
/// Log level filter, used when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Log output format, `text` or `json`.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Item service configuration. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsConfig {
    /// DynamoDB table name.
    pub table_name: String,
    /// SNS topic ARN.
    pub topic_arn: String,
}

impl ItemsConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Unset and empty variables are both treated as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: required(&lookup, ENV_TABLE_NAME)?,
            topic_arn: required(&lookup, ENV_TOPIC_ARN)?,
        })
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter.
    pub log_level: String,
    /// Output format.
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load logging configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            config.log_level = v;
        }
        if let Some(v) = lookup(ENV_LOG_FORMAT).filter(|v| !v.is_empty()) {
            config.log_format = match v.to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_LOG_FORMAT,
                        value: v,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}
