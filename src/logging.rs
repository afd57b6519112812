use crate::cli::Args;
use league_hub::config::Config;
use league_hub::constants::{APP_NAME, LOG_FILE_NAME};
use league_hub::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}=info")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Layers every run logs through: the file writer, plus stdout in debug mode.
fn build_subscriber(
    debug: bool,
    plain: bool,
    file_writer: NonBlocking,
) -> Result<impl Subscriber + Send + Sync + 'static, AppError> {
    let stdout_layer = if debug {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(!plain)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    let file_layer = fmt::Layer::new()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(env_filter()?);

    Ok(tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer))
}

/// Splits a custom log path into directory and file name.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging configuration for the application.
///
/// Logs always go to a daily rolling file; `--debug` adds a stdout layer.
/// The `--log-file` flag wins over the configured path, which wins over the
/// default log directory.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Read without validation so a stale data file does not hide the log path
    let config_log_path = Config::load_stored(&Config::get_config_path())
        .await
        .ok()
        .and_then(|mut config| {
            config.apply_env_overrides();
            config.log_file_path
        });

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    build_subscriber(args.debug, args.plain, non_blocking)?.init();

    let log_file_path = Path::new(&log_dir)
        .join(&log_file_name)
        .to_string_lossy()
        .to_string();
    Ok((log_file_path, guard))
}
