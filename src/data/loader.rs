use super::league_data::LeagueData;
use super::repository::LeagueRepository;
use crate::config::Config;
use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Loads the league dataset selected by the configuration.
///
/// Uses `config.data_file` when set, otherwise the bundled dataset.
/// Integrity problems are logged as warnings and never fail the load.
pub async fn load_league_data(config: &Config) -> Result<LeagueData, AppError> {
    let league = match &config.data_file {
        Some(path) => load_from_file(path).await?,
        None => {
            debug!("Using bundled league dataset");
            LeagueData::bundled()?
        }
    };

    for warning in league.integrity_warnings() {
        warn!("League data: {warning}");
    }

    info!(
        "Loaded {} teams, {} players, {} games, {} articles",
        league.teams().len(),
        league.players().len(),
        league.games().len(),
        league.articles().len()
    );

    Ok(league)
}

/// Reads and parses a dataset file.
pub async fn load_from_file(path: &str) -> Result<LeagueData, AppError> {
    if !Path::new(path).is_file() {
        return Err(AppError::data_file_not_found(path));
    }
    debug!("Reading league dataset from {path}");
    let content = fs::read_to_string(path).await?;
    LeagueData::from_json(&content)
}
