use thiserror::Error;

use crate::application::build_stage::BuildStage;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Routine failed during the {stage} stage")]
    StageFailed { stage: BuildStage },
}

impl RoutineError {
    pub fn stage_failed(stage: BuildStage) -> Self {
        RoutineError::StageFailed { stage }
    }
}

#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
