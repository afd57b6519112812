pub mod news;
pub mod player;
pub mod schedule;
pub mod team;

pub use news::{Article, ArticleCategory};
pub use player::{GameLogEntry, Player, PlayerStats, Socials};
pub use schedule::{Game, GameStatus, Winner};
pub use team::{InjuryReport, Team, TeamHistory, TeamStats};
