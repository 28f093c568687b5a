use error_stack::{Result, ResultExt};
use google_sheets4::{
    api::{Scope, ValueRange},
    Sheets,
};
use std::fmt::Debug;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::{a1_notation::ToA1Notation, sheet_range::SheetRange};
use crate::ports::row_source::{RowSource, RowSourceError};

use super::{
    auth,
    http_client::{self, HttpsConnector},
    row_values::value_range_rows,
};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Invalid service account key")]
    InvalidServiceAccountKey,
    #[error("Failed to authenticate service account")]
    FailedToAuthenticate,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
}

/// Logged on every read, also when the call succeeded and there is no error to show.
fn log_values_get_outcome<E: Debug>(error: Option<&E>) {
    info!(error = ?error, "values.get finished");
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    #[instrument]
    pub async fn read_range(&self, range: &str) -> Result<ValueRange, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .add_scope(Scope::SpreadsheetReadonly)
            .doit()
            .await;

        log_values_get_outcome(response.as_ref().err());

        let (_, value_range) = response
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        Ok(value_range)
    }
}

#[async_trait::async_trait]
impl RowSource for SpreadsheetManager {
    async fn read_rows(&self, range: SheetRange) -> Result<Vec<Vec<String>>, RowSourceError> {
        let a1_notation = range.to_a1_notation(self.config.sheet_name.as_deref());

        let value_range = self
            .read_range(a1_notation.as_ref())
            .await
            .change_context_lazy(|| RowSourceError::ReadRange(a1_notation.to_string()))?;

        Ok(value_range_rows(value_range))
    }
}
