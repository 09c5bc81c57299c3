pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::dynamodb::DynamoDbWriter;
pub use crate::config::{toml_config::EtlConfig, ApiConfig, AwsConfig};
pub use crate::core::{fetcher::ApiFetcher, pipeline::DataPipeline, sink::TableSink};
pub use crate::domain::model::{PersistedItem, Record, RecordBatch};
pub use crate::domain::ports::{Sink, Source, TableWriter};
pub use crate::utils::error::{EtlError, Result};
