use config::Config;
use error_stack::{Result, ResultExt};
use thiserror::Error;

use super::{build_config::BuildConfig, sheets_config::SpreadsheetConfig};

pub const DEFAULT_CONFIG_PATH: &str = "Config";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Failed to read configuration sources")]
    ReadSources,
    #[error("Failed to deserialize spreadsheet configuration")]
    Deserialize,
}

/// Everything a build needs, constructed once at startup and handed to each step.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    pub build: BuildConfig,
}

impl AppConfig {
    /// Reads the spreadsheet settings from an optional config file (`Config.toml`,
    /// `Config.json`, ...) overridden by environment variables.
    pub fn load(config_path: &str, build: BuildConfig) -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::default())
            .build()
            .change_context(AppConfigError::ReadSources)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))?;

        Self::from_config(config, build)
    }

    pub fn from_config(config: Config, build: BuildConfig) -> Result<Self, AppConfigError> {
        let sheets = config
            .try_deserialize::<SpreadsheetConfig>()
            .change_context(AppConfigError::Deserialize)
            .attach_printable(
                "Make sure SPREADSHEET_ID, PROJECT_ID, SERVICE_ACCOUNT_PRIVATE_KEY, \
                 SERVICE_ACCOUNT_PRIVATE_KEY_ID and SERVICE_ACCOUNT_CLIENT_EMAIL are set",
            )?;

        Ok(AppConfig { sheets, build })
    }
}
