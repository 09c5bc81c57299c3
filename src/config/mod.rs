#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// HTTP source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// `{base_url}/{endpoint}`, joined as given.
    pub fn full_url(&self) -> String {
        format!("{}/{}", self.base_url, self.endpoint)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Returns a copy with `updates` merged in.
    ///
    /// Recognised keys are `base_url`, `endpoint`, `header.<name>` and
    /// `param.<name>`.
    pub fn with_updates(&self, updates: &HashMap<String, String>) -> Result<Self> {
        let mut updated = self.clone();
        for (key, value) in updates {
            match key.as_str() {
                "base_url" => updated.base_url = value.clone(),
                "endpoint" => updated.endpoint = value.clone(),
                k => {
                    if let Some(name) = k.strip_prefix("header.") {
                        updated.headers.insert(name.to_string(), value.clone());
                    } else if let Some(name) = k.strip_prefix("param.") {
                        updated.params.insert(name.to_string(), value.clone());
                    } else {
                        return Err(EtlError::ConfigError {
                            message: format!("Unknown api setting '{}'", k),
                        });
                    }
                }
            }
        }
        Ok(updated)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_non_empty_string("api.endpoint", &self.endpoint)?;
        for (name, value) in &self.headers {
            validation::validate_resolved(&format!("api.headers.{}", name), value)?;
        }
        for (name, value) in &self.params {
            validation::validate_resolved(&format!("api.params.{}", name), value)?;
        }
        Ok(())
    }
}

/// DynamoDB target settings. Credentials are always explicit.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsConfig {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub db_name: String,
    pub table_name: String,
    /// Overrides the service endpoint, e.g. a local DynamoDB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!(
                "{}/{} on local DynamoDB ({})",
                self.db_name, self.table_name, url
            ),
            None => format!(
                "{}/{} on AWS DynamoDB (region: {})",
                self.db_name, self.table_name, self.region
            ),
        }
    }

    /// Returns a copy with `updates` merged in. Unknown keys are rejected.
    pub fn with_updates(&self, updates: &HashMap<String, String>) -> Result<Self> {
        let mut updated = self.clone();
        for (key, value) in updates {
            match key.as_str() {
                "access_key" => updated.access_key = value.clone(),
                "secret_key" => updated.secret_key = value.clone(),
                "region" => updated.region = value.clone(),
                "db_name" => updated.db_name = value.clone(),
                "table_name" => updated.table_name = value.clone(),
                "endpoint_url" => updated.endpoint_url = Some(value.clone()),
                k => {
                    return Err(EtlError::ConfigError {
                        message: format!("Unknown aws setting '{}'", k),
                    })
                }
            }
        }
        Ok(updated)
    }
}

impl fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &"***")
            .field("region", &self.region)
            .field("db_name", &self.db_name)
            .field("table_name", &self.table_name)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}***", visible)
}

impl Validate for AwsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("aws.access_key", &self.access_key)?;
        validation::validate_non_empty_string("aws.secret_key", &self.secret_key)?;
        validation::validate_aws_region("aws.region", &self.region)?;
        validation::validate_non_empty_string("aws.db_name", &self.db_name)?;
        validation::validate_table_name("aws.table_name", &self.table_name)?;
        if let Some(endpoint) = &self.endpoint_url {
            validation::validate_url("aws.endpoint_url", endpoint)?;
        }
        Ok(())
    }
}

/// Parses `KEY=VALUE` pairs into an update map.
pub fn parse_updates(pairs: &[String]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| EtlError::InvalidConfigValueError {
                    field: "override".to_string(),
                    value: pair.clone(),
                    reason: "Expected KEY=VALUE".to_string(),
                })
        })
        .collect()
}
