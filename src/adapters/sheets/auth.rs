use error_stack::{Result, ResultExt};
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use tracing::instrument;

use crate::config::sheets_config::SpreadsheetConfig;

use super::{http_client::HttpsConnector, spreadsheet_manager::SpreadsheetManagerError};

pub const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Assembles the service account key that would otherwise be downloaded as a JSON file.
pub fn service_account_key(
    config: &SpreadsheetConfig,
) -> Result<oauth2::ServiceAccountKey, SpreadsheetManagerError> {
    let key = serde_json::json!({
        "type": "service_account",
        "project_id": config.project_id,
        "private_key_id": config.private_key_id,
        "private_key": config.private_key,
        "client_email": config.client_email,
        "token_uri": TOKEN_URI,
    });

    serde_json::from_value(key).change_context(SpreadsheetManagerError::InvalidServiceAccountKey)
}

#[instrument(skip_all, fields(client_email = %config.client_email))]
pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> Result<Authenticator<HttpsConnector>, SpreadsheetManagerError> {
    let secret = service_account_key(config)?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::FailedToAuthenticate)
        .attach_printable("could not create an authenticator")
}
