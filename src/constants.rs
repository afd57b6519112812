//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! so the page builders and the estimator share one source of truth.

/// Application name used for config and log directories
pub const APP_NAME: &str = "league_hub";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "league_hub.log";

/// Terminal title shown while a page is displayed
pub const TERMINAL_TITLE: &str = "LEAGUE HUB";

/// Power index estimator values
pub mod estimator {
    /// Power index assigned to a team that has not played a game yet
    pub const NEUTRAL_POWER_INDEX: f64 = 50.0;

    /// Probability (percent) given to each side when the power total is not positive
    pub const NEUTRAL_PROBABILITY_PERCENT: f64 = 50.0;

    /// Factor applied to field goal percentage when estimating points allowed
    pub const OPPONENT_PPG_FG_FACTOR: f64 = 2.0;
}

/// List sizes used by the page builders
pub mod limits {
    /// Upcoming games shown on the team hub
    pub const TEAM_UPCOMING_GAMES: usize = 3;

    /// Players listed per team leaders category
    pub const TEAM_LEADERS_PER_CATEGORY: usize = 3;

    /// Players listed per leaderboard on the rankings page
    pub const LEADERBOARD_SIZE: usize = 10;

    /// Articles shown in the featured block of the news page
    pub const FEATURED_ARTICLES: usize = 4;

    /// Jersey number used for ordering players without one
    pub const MISSING_JERSEY_NUMBER: u32 = 99;
}

/// UI layout constants
pub mod ui {
    /// Default render width in columns
    pub const PAGE_WIDTH: usize = 80;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Column width for team names in tables
    pub const TEAM_NAME_WIDTH: usize = 24;

    /// Column width for stat labels
    pub const STAT_LABEL_WIDTH: usize = 20;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for overriding the league data file
    pub const DATA_FILE: &str = "LEAGUE_HUB_DATA_FILE";

    /// Environment variable for overriding the log file path
    pub const LOG_FILE: &str = "LEAGUE_HUB_LOG_FILE";

    /// Environment variable for overriding the display UTC offset in hours
    pub const UTC_OFFSET: &str = "LEAGUE_HUB_UTC_OFFSET";
}

/// Validation bounds for configuration values
pub mod validation {
    /// Smallest UTC offset in hours accepted in the config
    pub const MIN_UTC_OFFSET_HOURS: i32 = -12;

    /// Largest UTC offset in hours accepted in the config
    pub const MAX_UTC_OFFSET_HOURS: i32 = 14;
}

/// Teletext page numbers shown in the header
pub mod page_numbers {
    pub const SCHEDULE: u16 = 230;
    pub const SCORES: u16 = 235;
    pub const RANKINGS: u16 = 240;
    pub const TEAMS_INDEX: u16 = 245;
    pub const TEAM_HUB: u16 = 250;
    pub const PLAYERS_INDEX: u16 = 260;
    pub const PLAYER_PROFILE: u16 = 265;
    pub const GAME_CENTER: u16 = 270;
    pub const NEWS: u16 = 280;
    pub const ARTICLE: u16 = 285;
    pub const NOT_FOUND: u16 = 404;
}
