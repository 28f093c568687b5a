use thiserror::Error;

use crate::domain::sheets::sheet_range::SheetRange;

#[derive(Error, Debug)]
pub enum RowSourceError {
    #[error("Failed to read range {0}")]
    ReadRange(String),
}

#[async_trait::async_trait]
pub trait RowSource: Send + Sync {
    /// Reads the alias/target columns as rows of text cells. A response without any
    /// values yields an empty vector; deciding whether that is an error is up to the caller.
    async fn read_rows(
        &self,
        range: SheetRange,
    ) -> error_stack::Result<Vec<Vec<String>>, RowSourceError>;
}
