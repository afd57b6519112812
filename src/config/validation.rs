use crate::constants::validation::{MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `data_file` - Optional league data file to validate
/// * `log_file_path` - Optional log file path to validate
/// * `utc_offset_hours` - Optional display offset to validate
///
/// # Validation Rules
/// - If a data file is provided, it cannot be empty and must exist
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - UTC offset must lie within -12..=14 hours
pub fn validate_config(
    data_file: &Option<String>,
    log_file_path: &Option<String>,
    utc_offset_hours: Option<i32>,
) -> Result<(), AppError> {
    if let Some(data_path) = data_file {
        if data_path.is_empty() {
            return Err(AppError::config_error("Data file path cannot be empty"));
        }
        if !Path::new(data_path).is_file() {
            return Err(AppError::data_file_not_found(data_path.clone()));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(offset) = utc_offset_hours
        && !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset)
    {
        return Err(AppError::config_error(format!(
            "UTC offset must be between {MIN_UTC_OFFSET_HOURS} and {MAX_UTC_OFFSET_HOURS} hours, got {offset}"
        )));
    }

    Ok(())
}
