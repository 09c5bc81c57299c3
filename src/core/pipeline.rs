use crate::core::{Result, Sink, Source};

/// Moves one batch from a source to a sink per run.
///
/// Errors from either side are returned exactly as produced. Running twice
/// against an unchanged API writes every record twice.
pub struct DataPipeline<F: Source, S: Sink> {
    fetcher: F,
    sink: S,
}

impl<F: Source, S: Sink> DataPipeline<F, S> {
    pub fn new(fetcher: F, sink: S) -> Self {
        Self { fetcher, sink }
    }

    pub async fn run(&self) -> Result<()> {
        let batch = self.fetcher.fetch().await?;
        self.sink.store(batch).await
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
