// src/main.rs
mod cli;
mod commands;
mod logging;
mod version;

use clap::Parser;
use cli::Args;
use commands::{
    handle_config_update_command, handle_list_config_command, handle_page_command,
    handle_version_command, validate_args,
};
use league_hub::error::AppError;
use logging::setup_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    if args.version {
        return handle_version_command();
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are written to {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.is_config_update() {
        return handle_config_update_command(&args).await;
    }

    handle_page_command(&args).await
}
