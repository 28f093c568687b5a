use thiserror::Error;

/// Steps of a build, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Reset,
    Fetch,
    Write,
    Copy,
}

impl std::fmt::Display for BuildStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildStage::Reset => "reset",
            BuildStage::Fetch => "fetch",
            BuildStage::Write => "write",
            BuildStage::Copy => "copy",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to remove the previous output directory")]
    ResetOutput,
    #[error("Failed to read rows from the spreadsheet")]
    FetchRows,
    #[error("No data found in spreadsheet")]
    EmptySpreadsheet,
    #[error("Failed to write the redirect manifest")]
    WriteManifest,
    #[error("Failed to copy the headers file")]
    CopyHeaders,
}
