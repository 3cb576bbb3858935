//! SNS notifier integration tests.

#[cfg(test)]
mod tests {
    use itemstack_core::NotifyError;
    use itemstack_core::notifier::ItemNotifier;
    use itemstack_core::sns::SnsItemNotifier;
    use itemstack_model::Item;

    use crate::{sns_client, test_resource_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_publish_item_to_topic() {
        let client = sns_client();
        let topic = client
            .create_topic()
            .name(test_resource_name("items-topic"))
            .send()
            .await
            .unwrap();
        let topic_arn = topic.topic_arn().unwrap().to_owned();

        let notifier = SnsItemNotifier::new(client.clone(), &topic_arn);
        let message_id = notifier.publish(&Item::named("sns")).await.unwrap();
        assert!(!message_id.is_empty());

        let _ = client.delete_topic().topic_arn(&topic_arn).send().await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fail_for_unknown_topic() {
        let notifier = SnsItemNotifier::new(
            sns_client(),
            "arn:aws:sns:us-east-1:000000000000:test-items-missing",
        );
        let err = notifier.publish(&Item::named("sns")).await.unwrap_err();
        assert!(matches!(err, NotifyError::Publish { .. }));
    }
}
