use crate::config::AwsConfig;
use crate::core::{PersistedItem, RecordBatch, Result, Sink, TableWriter};

/// Writes every record of a batch into one table, one put per record.
pub struct TableSink<W: TableWriter> {
    config: AwsConfig,
    writer: W,
}

impl<W: TableWriter> TableSink<W> {
    pub fn new(config: AwsConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[async_trait::async_trait]
impl<W: TableWriter> Sink for TableSink<W> {
    async fn store(&self, batch: RecordBatch) -> Result<()> {
        let table_name = self.config.table_name();
        let total = batch.len();

        tracing::debug!("Writing {} records to table {}", total, table_name);
        for (index, record) in batch.iter().enumerate() {
            let item = PersistedItem::from_record(record);
            if let Err(e) = self.writer.put_item(table_name, item).await {
                tracing::error!(
                    "Put {} of {} into {} failed, {} records left unwritten: {}",
                    index + 1,
                    total,
                    table_name,
                    total - index - 1,
                    e
                );
                return Err(e);
            }
        }

        tracing::info!("Stored {} records in table {}", total, table_name);
        Ok(())
    }
}
