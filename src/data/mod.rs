pub mod league_data;
pub mod loader;
pub mod models;
pub mod repository;

pub use league_data::LeagueData;
pub use loader::load_league_data;
pub use models::{
    Article, ArticleCategory, Game, GameLogEntry, GameStatus, InjuryReport, Player, PlayerStats,
    Socials, Team, TeamHistory, TeamStats, Winner,
};
pub use repository::LeagueRepository;
