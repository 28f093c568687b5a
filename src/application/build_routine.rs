use std::future::Future;
use std::sync::Arc;

use error_stack::{Result, ResultExt};
use tracing::{info, instrument, Instrument};

use crate::config::build_config::BuildConfig;
use crate::ports::build_fs::BuildFs;
use crate::ports::routine::{Routine, RoutineError};
use crate::ports::row_source::RowSource;

use super::{
    build_stage::{BuildError, BuildStage},
    copy_headers::copy_headers,
    fetch_mapping::fetch_mapping,
    reset_output::reset_output_dir,
    write_manifest::write_manifest,
};

/// Regenerates the output directory: reset, fetch, write, copy.
///
/// Stages run strictly one after another. The first failure stops the build and
/// nothing already written is rolled back.
pub struct BuildRoutine {
    source: Arc<dyn RowSource>,
    fs: Arc<dyn BuildFs>,
    config: BuildConfig,
    skip_first_row: bool,
}

impl BuildRoutine {
    pub fn new(
        source: Arc<dyn RowSource>,
        fs: Arc<dyn BuildFs>,
        config: BuildConfig,
        skip_first_row: bool,
    ) -> Self {
        Self {
            source,
            fs,
            config,
            skip_first_row,
        }
    }
}

async fn in_stage<T>(
    stage: BuildStage,
    step: impl Future<Output = Result<T, BuildError>>,
) -> Result<T, RoutineError> {
    step.instrument(tracing::info_span!("stage", %stage))
        .await
        .change_context(RoutineError::stage_failed(stage))
}

#[async_trait::async_trait]
impl Routine for BuildRoutine {
    fn name(&self) -> &str {
        "build-redirects"
    }

    #[instrument(skip(self), fields(output_dir = %self.config.output_dir.display()))]
    async fn run(&self) -> Result<(), RoutineError> {
        let fs = self.fs.as_ref();

        in_stage(
            BuildStage::Reset,
            reset_output_dir(fs, self.config.output_dir()),
        )
        .await?;

        let mapping = in_stage(
            BuildStage::Fetch,
            fetch_mapping(self.source.as_ref(), self.skip_first_row),
        )
        .await?;

        in_stage(
            BuildStage::Write,
            write_manifest(fs, &self.config, &mapping),
        )
        .await?;

        in_stage(BuildStage::Copy, copy_headers(fs, &self.config)).await?;

        info!("✅ {}: OK", self.name());
        Ok(())
    }
}
