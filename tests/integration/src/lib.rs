//! Integration tests for the ItemStack gateways.
//!
//! These tests require a LocalStack-compatible endpoint (DynamoDB + SNS) at
//! `localhost:4566`. They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p itemstack-integration -- --ignored
//! ```

use std::sync::Once;

use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the emulated AWS services.
fn endpoint_url() -> String {
    std::env::var("ITEMSTACK_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

fn test_credentials() -> Credentials {
    Credentials::new("test", "test", None, None, "integration-test")
}

/// Create a configured DynamoDB client pointing at the local endpoint.
#[must_use]
pub fn dynamodb_client() -> aws_sdk_dynamodb::Client {
    init_tracing();

    let config = aws_sdk_dynamodb::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(test_credentials())
        .endpoint_url(endpoint_url())
        .build();

    aws_sdk_dynamodb::Client::from_conf(config)
}

/// Create a configured SNS client pointing at the local endpoint.
#[must_use]
pub fn sns_client() -> aws_sdk_sns::Client {
    init_tracing();

    let config = aws_sdk_sns::config::Builder::new()
        .behavior_version(aws_sdk_sns::config::BehaviorVersion::latest())
        .region(aws_sdk_sns::config::Region::new("us-east-1"))
        .credentials_provider(test_credentials())
        .endpoint_url(endpoint_url())
        .build();

    aws_sdk_sns::Client::from_conf(config)
}

/// Generate a unique resource name for a test.
#[must_use]
pub fn test_resource_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create an items table keyed by `id` and return its name. Caller is
/// responsible for cleanup.
pub async fn create_items_table(client: &aws_sdk_dynamodb::Client, prefix: &str) -> String {
    let name = test_resource_name(prefix);
    client
        .create_table()
        .table_name(&name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("id")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to create table {name}: {e}"));
    name
}

/// Delete a table, ignoring errors.
pub async fn cleanup_table(client: &aws_sdk_dynamodb::Client, table_name: &str) {
    let _ = client.delete_table().table_name(table_name).send().await;
}

mod test_dynamodb_store;
mod test_lambda_flow;
mod test_sns_notifier;
