//! End-to-end proxy request flow over DynamoDB and SNS.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aws_lambda_events::apigw::ApiGatewayProxyRequest;
    use http::{HeaderValue, Method};
    use itemstack_core::dynamodb::DynamoDbItemStore;
    use itemstack_core::sns::SnsItemNotifier;
    use itemstack_core::{ItemStackHandler, ItemsProvider};
    use itemstack_http::ItemsHttpService;
    use itemstack_model::Item;

    use crate::{
        cleanup_table, create_items_table, dynamodb_client, sns_client, test_resource_name,
    };

    fn request(method: &str, item_id: Option<&str>, body: Option<&str>) -> ApiGatewayProxyRequest {
        let mut req = ApiGatewayProxyRequest::default();
        req.http_method = Method::from_bytes(method.as_bytes()).unwrap();
        req.path = Some(match item_id {
            Some(id) => format!("/items/{id}"),
            None => "/items".to_owned(),
        });
        req.headers.insert(
            "host",
            HeaderValue::from_static("abc123.execute-api.us-east-1.amazonaws.com"),
        );
        if let Some(id) = item_id {
            req.path_parameters.insert("itemId".to_owned(), id.to_owned());
        }
        req.body = body.map(str::to_owned);
        req.request_context.stage = Some("prod".to_owned());
        req
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_get_and_delete_through_proxy() {
        let ddb = dynamodb_client();
        let table = create_items_table(&ddb, "items-flow").await;

        let sns = sns_client();
        let topic = sns
            .create_topic()
            .name(test_resource_name("items-flow"))
            .send()
            .await
            .unwrap();
        let topic_arn = topic.topic_arn().unwrap().to_owned();

        let provider = Arc::new(ItemsProvider::new(
            DynamoDbItemStore::new(ddb.clone(), &table),
            SnsItemNotifier::new(sns.clone(), &topic_arn),
        ));
        let service = ItemsHttpService::new(Arc::new(ItemStackHandler::new(provider)));

        let resp = service
            .handle(request(
                "POST",
                None,
                Some(r#"{"name":"flow","details":{"quantity":2}}"#),
            ))
            .await;
        assert_eq!(resp.status_code, 201);
        let created: Item = serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            resp.headers["Location"],
            format!(
                "https://abc123.execute-api.us-east-1.amazonaws.com/prod/items/{}",
                created.id
            )
        );

        let resp = service
            .handle(request("GET", Some(&created.id), None))
            .await;
        assert_eq!(resp.status_code, 200);
        let fetched: Item = serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
        assert_eq!(fetched, created);

        let resp = service
            .handle(request("DELETE", Some(&created.id), None))
            .await;
        assert_eq!(resp.status_code, 204);

        let resp = service
            .handle(request("GET", Some(&created.id), None))
            .await;
        assert_eq!(resp.status_code, 404);

        cleanup_table(&ddb, &table).await;
        let _ = sns.delete_topic().topic_arn(&topic_arn).send().await;
    }
}
