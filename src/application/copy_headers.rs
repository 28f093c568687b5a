use error_stack::{Result, ResultExt};
use tracing::{info, instrument};

use crate::config::build_config::BuildConfig;
use crate::ports::build_fs::BuildFs;

use super::build_stage::BuildError;

#[instrument(skip_all)]
pub async fn copy_headers(fs: &dyn BuildFs, config: &BuildConfig) -> Result<(), BuildError> {
    let source = config.headers_source();
    let target = config.headers_target();

    let bytes = fs
        .copy(&source, &target)
        .await
        .change_context(BuildError::CopyHeaders)
        .attach_printable_lazy(|| {
            format!("Could not copy {} to {}", source.display(), target.display())
        })?;

    info!(path = %target.display(), bytes, "Copied headers file");
    Ok(())
}
