use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use chrono::{FixedOffset, Local, Offset};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// League dataset in JSON form. The bundled dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Fixed UTC offset for game times. The system time zone is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_hours: Option<i32>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: defaults are used instead.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `LEAGUE_HUB_DATA_FILE` - Override league data file
    /// - `LEAGUE_HUB_LOG_FILE` - Override log file path
    /// - `LEAGUE_HUB_UTC_OFFSET` - Override display offset in hours
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable, malformed, or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `LEAGUE_HUB_*` environment overrides on top of file values.
    /// An unparsable offset is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(data_file) = std::env::var(env_vars::DATA_FILE) {
            self.data_file = Some(data_file);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(raw) = std::env::var(env_vars::UTC_OFFSET) {
            match raw.trim().parse::<i32>() {
                Ok(offset) => self.utc_offset_hours = Some(offset),
                Err(_) => tracing::warn!(
                    "Ignoring {}={raw}: not a whole number of hours",
                    env_vars::UTC_OFFSET
                ),
            }
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.data_file, &self.log_file_path, self.utc_offset_hours)
    }

    /// Offset used to display kickoff times and article dates.
    pub fn display_offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .and_then(|hours| FixedOffset::east_opt(hours * 3600))
            .unwrap_or_else(|| Local::now().offset().fix())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using bundled league data and system time zone)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("League Data:");
        match &config.data_file {
            Some(path) => println!("{path}"),
            None => println!("(Bundled dataset)"),
        }
        println!("────────────────────────────────────");
        println!("Time Zone:");
        match config.utc_offset_hours {
            Some(hours) => println!("UTC{hours:+}"),
            None => println!("(System time zone)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Reads the config file as stored, for editing.
    ///
    /// No environment overrides and no validation. Defaults are returned only
    /// when the file does not exist; an unreadable or malformed file is an error.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            tracing::debug!("No config file at {path}, starting from defaults");
            return Ok(Config::default());
        }
        Config::load_from_path(path).await
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
