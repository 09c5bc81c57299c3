use crate::config::ApiConfig;
use crate::core::{RecordBatch, Result, Source};
use crate::utils::error::EtlError;
use reqwest::{Client, StatusCode};

/// Reason reported for status codes without a registered phrase, e.g. 599.
const UNKNOWN_STATUS_REASON: &str = "Unknown Status";

/// Pulls one batch of records from a single API endpoint.
pub struct ApiFetcher {
    config: ApiConfig,
    client: Client,
}

impl ApiFetcher {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait::async_trait]
impl Source for ApiFetcher {
    async fn fetch(&self) -> Result<RecordBatch> {
        let url = self.config.full_url();

        tracing::debug!("Making API request to: {}", url);
        let mut request = self.client.get(&url).query(self.config.params());
        for (name, value) in self.config.headers() {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // Only 200 counts; other 2xx codes are failures too.
        if status != StatusCode::OK {
            return Err(EtlError::HttpStatusError {
                url,
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or(UNKNOWN_STATUS_REASON)
                    .to_string(),
            });
        }

        let body = response.text().await?;
        let batch: RecordBatch = serde_json::from_str(&body)?;
        tracing::info!("Fetched {} records from {}", batch.len(), url);

        Ok(batch)
    }
}
