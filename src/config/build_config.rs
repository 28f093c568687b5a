use std::path::{Path, PathBuf};

use crate::domain::redirects::rule::{RedirectStatus, HEADERS_FILE_NAME, REDIRECTS_FILE_NAME};

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Where the build reads its static resources from and writes its artifacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub status: RedirectStatus,
}

impl BuildConfig {
    pub fn new(output_dir: impl Into<PathBuf>, resources_dir: impl Into<PathBuf>) -> Self {
        BuildConfig {
            output_dir: output_dir.into(),
            resources_dir: resources_dir.into(),
            status: RedirectStatus::default(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn redirects_path(&self) -> PathBuf {
        self.output_dir.join(REDIRECTS_FILE_NAME)
    }

    pub fn headers_source(&self) -> PathBuf {
        self.resources_dir.join(HEADERS_FILE_NAME)
    }

    pub fn headers_target(&self) -> PathBuf {
        self.output_dir.join(HEADERS_FILE_NAME)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig::new(DEFAULT_OUTPUT_DIR, DEFAULT_RESOURCES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = BuildConfig::default();
        assert_eq!(config.redirects_path(), Path::new("dist").join("_redirects"));
        assert_eq!(config.headers_source(), Path::new("resources").join("_headers"));
        assert_eq!(config.headers_target(), Path::new("dist").join("_headers"));
        assert_eq!(config.status, RedirectStatus(307));
    }
}
