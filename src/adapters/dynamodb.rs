//! DynamoDB implementation of [`TableWriter`].

use crate::config::AwsConfig;
use crate::domain::model::PersistedItem;
use crate::domain::ports::TableWriter;
use crate::utils::error::{EtlError, Result};
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use std::fmt::Debug;

const CREDENTIALS_PROVIDER: &str = "dynamo-etl-config";

#[derive(Debug, Clone)]
pub struct DynamoDbWriter {
    client: Client,
}

impl DynamoDbWriter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from explicit credentials and region; the SDK's
    /// default credential chain is never consulted. SDK retries are off so
    /// each put is exactly one request.
    pub async fn from_config(config: &AwsConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        tracing::debug!("DynamoDB client ready for {}", config.target_display());
        Self::new(Client::new(&sdk_config))
    }
}

impl TableWriter for DynamoDbWriter {
    async fn put_item(&self, table_name: &str, item: PersistedItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(to_attribute_map(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table_name))?;

        Ok(())
    }
}

/// Every attribute is stored as `S`.
pub fn to_attribute_map(item: PersistedItem) -> HashMap<String, AttributeValue> {
    item.attributes
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect()
}

/// Dispatch and timeout failures never reached the table; everything else
/// is the service rejecting the write.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> EtlError {
    if matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)) {
        return EtlError::StorageTransportError {
            message: DisplayErrorContext(&err).to_string(),
        };
    }

    let message = match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        PutItemError::ConditionalCheckFailedException(_) => {
            "Conditional check failed".to_string()
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded".to_string()
        }
        PutItemError::RequestLimitExceeded(_) => "Request limit exceeded".to_string(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        PutItemError::TransactionConflictException(_) => "Transaction conflict".to_string(),
        PutItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!(
            "{}: {}",
            err.code().unwrap_or("PutItem failed"),
            err.message().unwrap_or("no message")
        ),
    };

    EtlError::WriteError {
        table: table_name.to_string(),
        message,
    }
}
