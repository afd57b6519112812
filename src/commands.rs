use crate::cli::{Args, PageRequest};
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use league_hub::config::Config;
use league_hub::constants::validation::{MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS};
use league_hub::constants::{TERMINAL_TITLE, page_numbers};
use league_hub::data::{LeagueData, load_league_data};
use league_hub::error::AppError;
use league_hub::pages::formatting::parse_date_filter;
use league_hub::pages::{
    DisplayOptions, PlayerFilter, TextPage, article_page, game_center_page, news_list_page,
    player_profile_page, players_index_page, rankings_page, schedule_page, scores_page,
    team_hub_page, teams_index_page,
};
use std::io::stdout;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let requests = args.page_requests();
    if requests.len() > 1 {
        return Err(AppError::config_error(
            "Only one page can be shown at a time; pick a single page flag",
        ));
    }

    if let Some(date) = &args.date {
        let page_takes_date = matches!(
            requests.first(),
            None | Some(PageRequest::Schedule) | Some(PageRequest::Scores)
        );
        if !page_takes_date {
            return Err(AppError::config_error(
                "--date can only be used with the schedule or scores page",
            ));
        }
        parse_date_filter(date)?;
    }

    let filters_given = args.search.is_some() || args.team_filter.is_some();
    if filters_given && requests.first() != Some(&PageRequest::Players) {
        return Err(AppError::config_error(
            "--search and --team-filter can only be used with --players",
        ));
    }

    if let Some(offset) = args.new_utc_offset
        && !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset)
    {
        return Err(AppError::config_error(format!(
            "UTC offset must be between {MIN_UTC_OFFSET_HOURS} and {MAX_UTC_OFFSET_HOURS} hours, got {offset}"
        )));
    }

    if args.new_data_file.is_some() && args.clear_data_file {
        return Err(AppError::config_error(
            "Cannot use --set-data-file and --clear-data-file together",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use --set-log-file and --clear-log-file together",
        ));
    }

    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    version::print_version_info()?;
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Applies the configuration flags to `config`.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(path) = &args.new_data_file {
        config.data_file = Some(path.clone());
    } else if args.clear_data_file {
        config.data_file = None;
        println!("Custom data file cleared. Using the bundled dataset.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(offset) = args.new_utc_offset {
        config.utc_offset_hours = Some(offset);
    }
}

/// Applies the configuration flags to the config file at `path` and saves it.
///
/// The file is edited as stored: environment overrides are not written back
/// and settings the flags leave alone are kept. Nothing is written when the
/// result does not validate.
pub async fn update_config_file(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await?;

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save_to_path(path).await?;

    Ok(config)
}

/// Handles configuration update commands (--set-data-file, --clear-data-file,
/// --set-log-file, --clear-log-file, --set-utc-offset).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Builds the page selected by `args` from an already loaded dataset.
pub fn build_page(args: &Args, league: &LeagueData, options: &DisplayOptions) -> Result<TextPage, AppError> {
    let date_filter = args.date.as_deref().map(parse_date_filter).transpose()?;
    let request = args
        .page_requests()
        .into_iter()
        .next()
        .unwrap_or(PageRequest::Schedule);
    info!("Building page {request:?}");

    match request {
        PageRequest::Schedule => schedule_page(league, date_filter, options),
        PageRequest::Scores => scores_page(league, date_filter, options),
        PageRequest::Rankings => rankings_page(league, options),
        PageRequest::Players => {
            let filter = PlayerFilter::new(args.search.clone(), args.team_filter.clone());
            players_index_page(league, &filter, options)
        }
        PageRequest::News => news_list_page(league, options),
        PageRequest::Teams => teams_index_page(league, options),
        PageRequest::Team(slug) => team_hub_page(league, &slug, options),
        PageRequest::Player(slug) => player_profile_page(league, &slug, options),
        PageRequest::Game(id) => game_center_page(league, &id, options),
        PageRequest::Article(slug) => article_page(league, &slug, options),
    }
}

/// Page shown in place of a page whose subject does not exist.
pub fn not_found_page(error: &AppError, plain: bool) -> TextPage {
    let mut page = TextPage::new(page_numbers::NOT_FOUND, "NOT FOUND", "", plain);
    page.add_error_message(&error.to_string());
    page.add_text("Check the slug or id and try again.");
    page
}

/// Loads config and data, builds the requested page and renders it once.
///
/// Lookups that find nothing render an error page instead of failing.
pub async fn handle_page_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let options = DisplayOptions::new(config.display_offset(), args.plain);
    let league = load_league_data(&config).await?;

    let page = match build_page(args, &league, &options) {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            warn!("{e}");
            not_found_page(&e, args.plain)
        }
        Err(e) => return Err(e),
    };

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    page.render_buffered(&mut stdout())?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use league_hub::constants::env_vars;
    use serial_test::serial;
    use tempfile::tempdir;

    fn args(flags: &[&str]) -> Args {
        let mut argv = vec!["league_hub"];
        argv.extend_from_slice(flags);
        Args::parse_from(argv)
    }

    #[test]
    fn test_validate_rejects_two_pages() {
        assert!(validate_args(&args(&["--news", "--rankings"])).is_err());
        assert!(validate_args(&args(&["--news"])).is_ok());
        assert!(validate_args(&args(&[])).is_ok());
    }

    #[test]
    fn test_validate_date_usage() {
        assert!(validate_args(&args(&["--scores", "--date", "2025-10-18"])).is_ok());
        assert!(validate_args(&args(&["--date", "2025-10-18"])).is_ok());
        assert!(validate_args(&args(&["--rankings", "--date", "2025-10-18"])).is_err());
        assert!(matches!(
            validate_args(&args(&["--schedule", "--date", "18.10.2025"])),
            Err(AppError::DateTimeParse(_))
        ));
    }

    #[test]
    fn test_validate_player_filters_need_players_page() {
        assert!(validate_args(&args(&["--players", "--search", "ladi"])).is_ok());
        assert!(validate_args(&args(&["--news", "--search", "ladi"])).is_err());
    }

    #[test]
    fn test_validate_offset_range() {
        assert!(validate_args(&args(&["--set-utc-offset", "8"])).is_ok());
        assert!(validate_args(&args(&["--set-utc-offset", "15"])).is_err());
        assert!(validate_args(&args(&["--set-utc-offset", "-13"])).is_err());
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config {
            data_file: Some("old.json".to_string()),
            log_file_path: Some("/tmp/old.log".to_string()),
            utc_offset_hours: None,
        };
        apply_config_updates(&mut config, &args(&["--clear-data-file", "--set-utc-offset", "8"]));
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/old.log"));
        assert_eq!(config.utc_offset_hours, Some(8));
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_does_not_persist_env_overrides() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let config_path = config_path.to_string_lossy().to_string();
        let log_path = dir.path().join("keep.log").to_string_lossy().to_string();
        Config {
            log_file_path: Some(log_path.clone()),
            ..Config::default()
        }
        .save_to_path(&config_path)
        .await
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/tmp/from-env.log");
            std::env::set_var(env_vars::DATA_FILE, "/tmp/from-env.json");
        }
        let result = update_config_file(&config_path, &args(&["--set-utc-offset", "9"])).await;
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::DATA_FILE);
        }

        let saved = result.unwrap();
        assert_eq!(saved.utc_offset_hours, Some(9));
        assert_eq!(saved.log_file_path.as_deref(), Some(log_path.as_str()));
        assert_eq!(saved.data_file, None);

        let stored = Config::load_from_path(&config_path).await.unwrap();
        assert_eq!(stored, saved);
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("from-env"));
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_keeps_settings_when_data_file_is_gone() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let config_path = config_path.to_string_lossy().to_string();
        let data_path = dir.path().join("season.json");
        tokio::fs::write(&data_path, "{}").await.unwrap();
        let stored = Config {
            data_file: Some(data_path.to_string_lossy().to_string()),
            log_file_path: Some(dir.path().join("keep.log").to_string_lossy().to_string()),
            utc_offset_hours: Some(8),
        };
        stored.save_to_path(&config_path).await.unwrap();
        tokio::fs::remove_file(&data_path).await.unwrap();

        // The stale data file is reported and the file is left as it was
        let error = update_config_file(&config_path, &args(&["--set-utc-offset", "9"]))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::DataFileNotFound { .. }));
        assert_eq!(Config::load_from_path(&config_path).await.unwrap(), stored);

        // Clearing it in the same run keeps every other setting
        let saved = update_config_file(
            &config_path,
            &args(&["--clear-data-file", "--set-utc-offset", "9"]),
        )
        .await
        .unwrap();
        assert_eq!(saved.data_file, None);
        assert_eq!(saved.log_file_path, stored.log_file_path);
        assert_eq!(saved.utc_offset_hours, Some(9));
        assert_eq!(Config::load_from_path(&config_path).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_config_update_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        tokio::fs::write(&config_path, "utc_offset_hours = \"eight").await.unwrap();

        let result = update_config_file(&config_path.to_string_lossy(), &args(&["--set-utc-offset", "9"])).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(content, "utc_offset_hours = \"eight");
    }

    #[test]
    fn test_build_page_defaults_to_schedule() {
        let league = LeagueData::bundled().unwrap();
        let page = build_page(&args(&[]), &league, &DisplayOptions::utc_plain()).unwrap();
        assert_eq!(page.page_number(), page_numbers::SCHEDULE);
    }

    #[test]
    fn test_build_teams_index() {
        let league = LeagueData::bundled().unwrap();
        let page = build_page(&args(&["--teams"]), &league, &DisplayOptions::utc_plain()).unwrap();
        assert_eq!(page.page_number(), page_numbers::TEAMS_INDEX);
        assert!(page.contains_text("ateneo-blue-eagles"));
    }

    #[test]
    fn test_build_page_not_found() {
        let league = LeagueData::bundled().unwrap();
        let error = build_page(&args(&["--team", "nobody"]), &league, &DisplayOptions::utc_plain())
            .unwrap_err();
        assert!(error.is_not_found());
        let page = not_found_page(&error, true);
        assert!(page.contains_text("Team not found: nobody"));
    }
}
