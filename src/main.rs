use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use error_stack::{report, Result, ResultExt};
use thiserror::Error;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use sheet_redirects::adapters::{sheets::spreadsheet_manager::SpreadsheetManager, tokio_fs::TokioFs};
use sheet_redirects::application::build_routine::BuildRoutine;
use sheet_redirects::config::{
    app_config::{AppConfig, DEFAULT_CONFIG_PATH},
    build_config::{BuildConfig, DEFAULT_OUTPUT_DIR, DEFAULT_RESOURCES_DIR},
};
use sheet_redirects::ports::routine::Routine;

/// Builds a `_redirects` manifest from the alias table of a Google Sheets spreadsheet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory that is wiped and regenerated on every run.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Directory holding the `_headers` file copied into the output.
    #[arg(long, default_value = DEFAULT_RESOURCES_DIR)]
    resources_dir: PathBuf,

    /// Optional config file, read before environment variables.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum AppError {
    #[error("Failed to load configuration")]
    Config,
    #[error("Failed to set up the Google Sheets client")]
    Sheets,
    #[error("Build failed")]
    Build,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    setup_panic_hook();

    match run(cli).await {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!("{:?}", report);
            ExitCode::FAILURE
        }
    }
}

#[instrument]
async fn run(cli: Cli) -> Result<(), AppError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(report!(e).change_context(AppError::Config));
        }
    }

    let app_config = AppConfig::load(
        &cli.config,
        BuildConfig::new(cli.out_dir, cli.resources_dir),
    )
    .change_context(AppError::Config)?;

    let skip_first_row = app_config.sheets.skip_first_row;
    let manager = SpreadsheetManager::new(app_config.sheets)
        .await
        .change_context(AppError::Sheets)?;

    BuildRoutine::new(
        Arc::new(manager),
        Arc::new(TokioFs),
        app_config.build,
        skip_first_row,
    )
    .run()
    .await
    .change_context(AppError::Build)
}

fn setup_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    Registry::default()
        .with(tracing_subscriber::filter::Targets::new().with_target("sheet_redirects", level))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
