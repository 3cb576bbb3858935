//! DynamoDB item store integration tests.

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::AttributeValue;
    use itemstack_core::dynamodb::DynamoDbItemStore;
    use itemstack_core::StoreError;
    use itemstack_core::store::ItemStore;
    use itemstack_model::{Details, Item};

    use crate::{cleanup_table, create_items_table, dynamodb_client};

    fn sample_item() -> Item {
        Item {
            name: "integration".to_owned(),
            details: Details {
                description: "from the integration suite".to_owned(),
                location: "shelf 3".to_owned(),
                quantity: 7,
            },
            ..Item::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_save_and_get_item() {
        let client = dynamodb_client();
        let table = create_items_table(&client, "items-save").await;
        let store = DynamoDbItemStore::new(client.clone(), &table);

        let saved = store.save(sample_item()).await.unwrap();
        assert!(!saved.id.is_empty());
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.updated_at);

        let fetched = store.get_by_id(&saved.id).await.unwrap();
        assert_eq!(fetched, saved);

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_store_item_under_id_key() {
        let client = dynamodb_client();
        let table = create_items_table(&client, "items-layout").await;
        let store = DynamoDbItemStore::new(client.clone(), &table);

        let saved = store.save(sample_item()).await.unwrap();

        let raw = client
            .get_item()
            .table_name(&table)
            .key("id", AttributeValue::S(saved.id.clone()))
            .send()
            .await
            .unwrap();
        let attrs = raw.item().expect("item should exist");
        assert_eq!(attrs["name"], AttributeValue::S("integration".to_owned()));

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_not_found_after_delete() {
        let client = dynamodb_client();
        let table = create_items_table(&client, "items-delete").await;
        let store = DynamoDbItemStore::new(client.clone(), &table);

        let saved = store.save(sample_item()).await.unwrap();
        store.delete_by_id(&saved.id).await.unwrap();

        let err = store.get_by_id(&saved.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));

        cleanup_table(&client, &table).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fail_against_missing_table() {
        let client = dynamodb_client();
        let store = DynamoDbItemStore::new(client, "test-items-does-not-exist");

        let err = store.save(sample_item()).await.unwrap_err();
        assert!(matches!(err, StoreError::Save(_)));
        assert_eq!(err.to_string(), "Failed to save into the repository");
    }
}
