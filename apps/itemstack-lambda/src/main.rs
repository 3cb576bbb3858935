//! ItemStack Lambda - item API behind an API Gateway proxy integration.
//!
//! Registers the item request service as the sole Lambda handler. Items are
//! stored in DynamoDB and every create is announced on an SNS topic.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DB_TABLE_NAME` | *(required)* | DynamoDB table holding the items |
//! | `SNS_TOPIC_ARN` | *(required)* | SNS topic receiving create notifications |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `LOG_FORMAT` | `text` | `text` or `json` |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//!
//! The process exits before taking any traffic if a required variable is
//! missing.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use aws_config::BehaviorVersion;
use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use itemstack_core::dynamodb::DynamoDbItemStore;
use itemstack_core::sns::SnsItemNotifier;
use itemstack_core::{ItemStackHandler, ItemsConfig, ItemsProvider, LogFormat, LoggingConfig};
use itemstack_http::{ItemsHttpService, ProxyResponse};

type LambdaHandler = ItemStackHandler<DynamoDbItemStore, SnsItemNotifier>;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level filter: {}", config.log_level))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}

/// Build the request service over DynamoDB and SNS clients.
async fn build_service(config: &ItemsConfig) -> ItemsHttpService<LambdaHandler> {
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let store = DynamoDbItemStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.table_name.clone(),
    );
    let notifier = SnsItemNotifier::new(
        aws_sdk_sns::Client::new(&sdk_config),
        config.topic_arn.clone(),
    );

    let provider = Arc::new(ItemsProvider::new(store, notifier));
    ItemsHttpService::new(Arc::new(ItemStackHandler::new(provider)))
}

async fn handle_event(
    service: &ItemsHttpService<LambdaHandler>,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ProxyResponse, lambda_runtime::Error> {
    Ok(service.handle(event.payload).await)
}

#[tokio::main]
async fn main() -> Result<()> {
    let logging = LoggingConfig::from_env().context("invalid logging configuration")?;
    init_tracing(&logging)?;

    let config = ItemsConfig::from_env().inspect_err(|e| {
        error!(error = %e, "service is not configured");
    })?;

    info!(
        table = %config.table_name,
        topic_arn = %config.topic_arn,
        version = env!("CARGO_PKG_VERSION"),
        "starting item handler"
    );

    let service = build_service(&config).await;

    lambda_runtime::run(service_fn(|event| handle_event(&service, event)))
        .await
        .map_err(|e| anyhow!(e))
}
