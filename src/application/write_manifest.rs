use error_stack::{Result, ResultExt};
use tracing::{info, instrument};

use crate::config::build_config::BuildConfig;
use crate::domain::redirects::{mapping::RedirectMapping, rule::ToRedirectManifest};
use crate::ports::build_fs::BuildFs;

use super::build_stage::BuildError;

/// Writes `_redirects` into the output directory, creating the directory if needed.
/// Returns once the file is fully written.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
pub async fn write_manifest(
    fs: &dyn BuildFs,
    config: &BuildConfig,
    mapping: &RedirectMapping,
) -> Result<(), BuildError> {
    fs.create_dir_all(config.output_dir())
        .await
        .change_context(BuildError::WriteManifest)
        .attach_printable_lazy(|| format!("Could not create {}", config.output_dir.display()))?;

    let path = config.redirects_path();
    let manifest = mapping.to_redirect_manifest(config.status);

    fs.write(&path, manifest.as_bytes())
        .await
        .change_context(BuildError::WriteManifest)
        .attach_printable_lazy(|| format!("Could not write {}", path.display()))?;

    info!(path = %path.display(), redirects = mapping.len(), "Wrote redirect manifest");
    Ok(())
}
