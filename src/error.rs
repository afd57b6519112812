use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to parse league data: {0}")]
    DataParse(#[from] serde_json::Error),

    #[error("League data file not found: {path}")]
    DataFileNotFound { path: String },

    // Lookups against the league tables
    #[error("Team not found: {slug}")]
    TeamNotFound { slug: String },

    #[error("Player not found: {slug}")]
    PlayerNotFound { slug: String },

    #[error("Game not found: {id}")]
    GameNotFound { id: String },

    #[error("Article not found: {slug}")]
    ArticleNotFound { slug: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn data_file_not_found(path: impl Into<String>) -> Self {
        Self::DataFileNotFound { path: path.into() }
    }

    pub fn team_not_found(slug: impl Into<String>) -> Self {
        Self::TeamNotFound { slug: slug.into() }
    }

    pub fn player_not_found(slug: impl Into<String>) -> Self {
        Self::PlayerNotFound { slug: slug.into() }
    }

    pub fn game_not_found(id: impl Into<String>) -> Self {
        Self::GameNotFound { id: id.into() }
    }

    pub fn article_not_found(slug: impl Into<String>) -> Self {
        Self::ArticleNotFound { slug: slug.into() }
    }

    /// Check if error indicates a missing record (user input, not a technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::TeamNotFound { .. }
                | AppError::PlayerNotFound { .. }
                | AppError::GameNotFound { .. }
                | AppError::ArticleNotFound { .. }
        )
    }
}
