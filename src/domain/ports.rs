use crate::domain::model::{PersistedItem, RecordBatch};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Put-only access to a key-value table.
pub trait TableWriter: Send + Sync {
    fn put_item(
        &self,
        table_name: &str,
        item: PersistedItem,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Source: Send + Sync {
    async fn fetch(&self) -> Result<RecordBatch>;
}

#[async_trait]
pub trait Sink: Send + Sync {
    async fn store(&self, batch: RecordBatch) -> Result<()>;
}
