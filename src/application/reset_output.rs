use std::path::Path;

use error_stack::{Result, ResultExt};
use tracing::{debug, instrument};

use crate::ports::build_fs::BuildFs;

use super::build_stage::BuildError;

/// Removes `output_dir` and everything beneath it. Does nothing when it is already absent.
#[instrument(skip(fs))]
pub async fn reset_output_dir(fs: &dyn BuildFs, output_dir: &Path) -> Result<(), BuildError> {
    let exists = fs
        .exists(output_dir)
        .await
        .change_context(BuildError::ResetOutput)
        .attach_printable_lazy(|| format!("Could not stat {}", output_dir.display()))?;

    if !exists {
        debug!("Output directory absent, nothing to remove");
        return Ok(());
    }

    fs.remove_dir_all(output_dir)
        .await
        .change_context(BuildError::ResetOutput)
        .attach_printable_lazy(|| format!("Could not remove {}", output_dir.display()))?;

    debug!("Removed previous output directory");
    Ok(())
}
