//! SNS-backed notifier gateway.

use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;
use itemstack_model::Item;

use crate::error::NotifyError;
use crate::notifier::ItemNotifier;

/// Subject line of every notification.
pub const NOTIFICATION_SUBJECT: &str = "Item notification";

/// Publishes items as JSON messages to an SNS topic.
#[derive(Debug, Clone)]
pub struct SnsItemNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsItemNotifier {
    /// Create a notifier for `topic_arn` using an existing client.
    #[must_use]
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// The destination topic.
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl ItemNotifier for SnsItemNotifier {
    async fn publish(&self, item: &Item) -> Result<String, NotifyError> {
        let message = serde_json::to_string(item)?;

        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(NOTIFICATION_SUBJECT)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(
                    topic_arn = %self.topic_arn,
                    error = %DisplayErrorContext(&e),
                    "Publish failed"
                );
                NotifyError::Publish {
                    topic_arn: self.topic_arn.clone(),
                    source: Box::new(e),
                }
            })?;

        Ok(output.message_id().unwrap_or_default().to_owned())
    }
}
