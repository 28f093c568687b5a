use serde::{Deserialize, Deserializer};

/// Service account credentials and the spreadsheet to read the redirects from.
///
/// Field names follow the environment variables they are loaded from
/// (`SPREADSHEET_ID`, `SERVICE_ACCOUNT_PRIVATE_KEY`, ...).
#[derive(serde::Deserialize, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub project_id: Box<str>,
    #[serde(
        rename = "service_account_private_key",
        deserialize_with = "deserialize_private_key"
    )]
    pub private_key: Box<str>,
    #[serde(rename = "service_account_private_key_id")]
    pub private_key_id: Box<str>,
    #[serde(rename = "service_account_client_email")]
    pub client_email: Box<str>,
    #[serde(default = "default_skip_first_row")]
    pub skip_first_row: bool,
    /// Sheet title to read from. The first sheet is used when unset.
    #[serde(default)]
    pub sheet_name: Option<Box<str>>,
}

fn default_skip_first_row() -> bool {
    true
}

/// Keys stored in `.env` files carry literal `\n` sequences instead of line breaks.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn deserialize_private_key<'de, D>(deserializer: D) -> Result<Box<str>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_private_key(&raw).into_boxed_str())
}

impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("project_id", &self.project_id)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("client_email", &self.client_email)
            .field("skip_first_row", &self.skip_first_row)
            .field("sheet_name", &self.sheet_name)
            .finish()
    }
}
