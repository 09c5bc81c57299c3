use dynamo_etl::{AwsConfig, DynamoDbWriter, EtlError, PersistedItem, TableWriter};
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn local_config(endpoint_url: String) -> AwsConfig {
    AwsConfig {
        access_key: "AKIAEXAMPLE".to_string(),
        secret_key: "secret".to_string(),
        region: "us-east-1".to_string(),
        db_name: "main".to_string(),
        table_name: "api_records".to_string(),
        endpoint_url: Some(endpoint_url),
    }
}

fn item() -> PersistedItem {
    PersistedItem {
        attributes: HashMap::from([("id".to_string(), "1".to_string())]),
    }
}

#[tokio::test]
async fn test_put_item_sends_string_attributes() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .header("x-amz-target", "DynamoDB_20120810.PutItem")
                .json_body(json!({
                    "TableName": "api_records",
                    "Item": {"id": {"S": "1"}}
                }));
            then.status(200)
                .header("Content-Type", "application/x-amz-json-1.0")
                .body("{}");
        })
        .await;

    let writer = DynamoDbWriter::from_config(&local_config(server.base_url())).await;

    writer.put_item("api_records", item()).await.unwrap();

    put_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_put_is_write_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(400)
                .header("Content-Type", "application/x-amz-json-1.0")
                .json_body(json!({
                    "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
                    "message": "Requested resource not found"
                }));
        })
        .await;

    let writer = DynamoDbWriter::from_config(&local_config(server.base_url())).await;

    let result = writer.put_item("api_records", item()).await;

    match result {
        Err(EtlError::WriteError { table, message }) => {
            assert_eq!(table, "api_records");
            assert_eq!(message, "Table not found");
        }
        other => panic!("expected WriteError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_throttled_put_is_sent_once() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(400)
                .header("Content-Type", "application/x-amz-json-1.0")
                .json_body(json!({
                    "__type": "com.amazonaws.dynamodb.v20120810#ProvisionedThroughputExceededException",
                    "message": "The level of configured provisioned throughput for the table was exceeded"
                }));
        })
        .await;

    let writer = DynamoDbWriter::from_config(&local_config(server.base_url())).await;

    let result = writer.put_item("api_records", item()).await;

    put_mock.assert_hits_async(1).await;
    match result {
        Err(EtlError::WriteError { table, message }) => {
            assert_eq!(table, "api_records");
            assert_eq!(message, "Throughput exceeded");
        }
        other => panic!("expected WriteError, got {:?}", other),
    }
}
