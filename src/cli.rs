use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Page picked by the command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Schedule,
    Scores,
    Rankings,
    Players,
    News,
    Teams,
    Team(String),
    Player(String),
    Game(String),
    Article(String),
}

/// Collegiate basketball league hub
///
/// Teletext-style pages for the league's schedule, scores, standings,
/// teams, players and news, including a matchup predictor built on each
/// team's power index.
///
/// Without a page flag the full schedule is shown.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the team hub for a team slug, e.g. ateneo-blue-eagles. `--teams` lists the slugs.
    #[arg(long = "team", value_name = "SLUG", help_heading = "Pages")]
    pub team: Option<String>,

    /// List every team with its record and slug
    #[arg(long = "teams", help_heading = "Pages")]
    pub teams: bool,

    /// Show a player profile. The slug is matched case-insensitively.
    #[arg(long = "player", value_name = "SLUG", help_heading = "Pages")]
    pub player: Option<String>,

    /// Show the game center with head-to-head stats and the matchup predictor
    #[arg(long = "game", value_name = "ID", help_heading = "Pages")]
    pub game: Option<String>,

    /// Show every game grouped by day (default page)
    #[arg(long = "schedule", help_heading = "Pages")]
    pub schedule: bool,

    /// Show live and final games only
    #[arg(long = "scores", help_heading = "Pages")]
    pub scores: bool,

    /// Show team standings and player leaderboards
    #[arg(long = "rankings", help_heading = "Pages")]
    pub rankings: bool,

    /// Show the players index
    #[arg(long = "players", help_heading = "Pages")]
    pub players: bool,

    /// Show the news list
    #[arg(long = "news", help_heading = "Pages")]
    pub news: bool,

    /// Show a single news article
    #[arg(long = "article", value_name = "SLUG", help_heading = "Pages")]
    pub article: Option<String>,

    /// Only show games on this local date, in YYYY-MM-DD format.
    /// Applies to the schedule and scores pages.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Filter the players index by name (case-insensitive substring)
    #[arg(long = "search", short = 's', help_heading = "Display Options")]
    pub search: Option<String>,

    /// Filter the players index by team name or slug, or "all"
    #[arg(long = "team-filter", help_heading = "Display Options")]
    pub team_filter: Option<String>,

    /// Disable colours in the output.
    /// Useful for piping the page to a file or another program.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Load league data from this JSON file instead of the bundled dataset
    #[arg(long = "set-data-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_data_file: Option<String>,

    /// Clear the custom data file from config and use the bundled dataset again
    #[arg(long = "clear-data-file", help_heading = "Configuration")]
    pub clear_data_file: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Store the UTC offset in hours used for dates and times, e.g. 8 for Manila
    #[arg(
        long = "set-utc-offset",
        value_name = "HOURS",
        allow_negative_numbers = true,
        help_heading = "Configuration"
    )]
    pub new_utc_offset: Option<i32>,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode. Logs are written to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when any configuration flag is present.
    pub fn is_config_update(&self) -> bool {
        self.new_data_file.is_some()
            || self.clear_data_file
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
            || self.new_utc_offset.is_some()
    }

    /// Every page flag that was given, in declaration order.
    pub fn page_requests(&self) -> Vec<PageRequest> {
        let mut requests = Vec::new();
        if let Some(slug) = &self.team {
            requests.push(PageRequest::Team(slug.clone()));
        }
        if self.teams {
            requests.push(PageRequest::Teams);
        }
        if let Some(slug) = &self.player {
            requests.push(PageRequest::Player(slug.clone()));
        }
        if let Some(id) = &self.game {
            requests.push(PageRequest::Game(id.clone()));
        }
        if self.schedule {
            requests.push(PageRequest::Schedule);
        }
        if self.scores {
            requests.push(PageRequest::Scores);
        }
        if self.rankings {
            requests.push(PageRequest::Rankings);
        }
        if self.players {
            requests.push(PageRequest::Players);
        }
        if self.news {
            requests.push(PageRequest::News);
        }
        if let Some(slug) = &self.article {
            requests.push(PageRequest::Article(slug.clone()));
        }
        requests
    }
}
