use error_stack::{report, Result, ResultExt};
use tracing::{info, instrument, warn};

use crate::domain::{redirects::mapping::RedirectMapping, sheets::sheet_range::SheetRange};
use crate::ports::row_source::RowSource;

use super::build_stage::BuildError;

/// Reads the alias/target columns and builds the redirect mapping.
///
/// A sheet without any rows is treated as misconfiguration and fails with
/// [`BuildError::EmptySpreadsheet`] instead of producing an empty manifest.
#[instrument(skip(source))]
pub async fn fetch_mapping(
    source: &dyn RowSource,
    skip_first_row: bool,
) -> Result<RedirectMapping, BuildError> {
    let range = SheetRange::from_skip_first_row(skip_first_row);

    let rows = source
        .read_rows(range)
        .await
        .change_context(BuildError::FetchRows)?;

    if rows.is_empty() {
        warn!("No data found in spreadsheet");
        return Err(report!(BuildError::EmptySpreadsheet)
            .attach_printable(format!("Range {} returned no rows", range)));
    }

    let row_count = rows.len();
    let mapping = RedirectMapping::from_rows(rows);
    info!(
        rows = row_count,
        redirects = mapping.len(),
        "Fetched redirect mapping"
    );

    Ok(mapping)
}
