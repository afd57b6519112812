//! Collegiate Basketball League Hub Library
//!
//! This library loads a season of league data (teams, players, schedule and
//! news) and renders it as teletext-style text pages, including a matchup
//! predictor driven by each team's power index.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_hub::data::LeagueData;
//! use league_hub::error::AppError;
//! use league_hub::pages::{DisplayOptions, game_center_page};
//!
//! fn main() -> Result<(), AppError> {
//!     let league = LeagueData::bundled()?;
//!
//!     let page = game_center_page(&league, "game-001", &DisplayOptions::utc_plain())?;
//!
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod estimator;
pub mod pages;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data::{LeagueData, LeagueRepository, load_league_data};
pub use error::AppError;
pub use estimator::{MatchupRecord, WinProbability, power_index, win_probability};
pub use pages::{DisplayOptions, TextPage};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
