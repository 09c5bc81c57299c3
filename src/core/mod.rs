pub mod fetcher;
pub mod pipeline;
pub mod sink;

pub use crate::domain::model::{PersistedItem, Record, RecordBatch};
pub use crate::domain::ports::{Sink, Source, TableWriter};
pub use crate::utils::error::Result;
