pub mod auth;
pub mod http_client;
pub mod row_values;
pub mod spreadsheet_manager;
