use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request to {url} returned {status} {reason}")]
    HttpStatusError {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Write to table '{table}' failed: {message}")]
    WriteError { table: String, message: String },

    #[error("Storage transport error: {message}")]
    StorageTransportError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value for {field}: environment variable {variable} is not set")]
    MissingConfigError { field: String, variable: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::HttpStatusError { .. } => ErrorCategory::Api,
            EtlError::ApiError(_) | EtlError::StorageTransportError { .. } => {
                ErrorCategory::Network
            }
            EtlError::WriteError { .. } | EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::SerializationError(_) => ErrorCategory::Data,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Transient failures are `Medium`: a later run may succeed unchanged.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::HttpStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            EtlError::HttpStatusError { .. } => ErrorSeverity::High,
            EtlError::ApiError(_) | EtlError::StorageTransportError { .. } => {
                ErrorSeverity::Medium
            }
            EtlError::WriteError { .. } | EtlError::SerializationError(_) => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::HttpStatusError { status, .. } => match status {
                401 | 403 => "Check the API credentials in the configured headers",
                404 => "Check api.base_url and api.endpoint",
                429 => "The API is rate limiting requests; wait before running again",
                s if *s >= 500 => "The API is failing on its side; try again later",
                _ => "Inspect the API response and the configured query parameters",
            },
            EtlError::ApiError(_) => "Check network connectivity and that the API host is reachable",
            EtlError::StorageTransportError { .. } => {
                "Check network connectivity to DynamoDB and aws.endpoint_url if set"
            }
            EtlError::WriteError { .. } => {
                "Check that the table exists, the credentials allow PutItem, and the item contains the table's key attributes"
            }
            EtlError::SerializationError(_) => "The API must return a JSON array of objects",
            EtlError::IoError(_) => "Check that the file exists and is readable",
            EtlError::MissingConfigError { .. } => {
                "Export the named environment variable or write the value into the configuration file"
            }
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => "Fix the configuration file and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::HttpStatusError { status, reason, .. } => {
                format!("The API answered {} {}", status, reason)
            }
            EtlError::ApiError(_) => "Could not reach the API".to_string(),
            EtlError::StorageTransportError { .. } => "Could not reach DynamoDB".to_string(),
            EtlError::WriteError { table, .. } => {
                format!("DynamoDB rejected a write to table '{}'", table)
            }
            EtlError::SerializationError(_) => "The API response was not valid JSON records".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
