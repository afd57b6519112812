//! Text pages built from the league tables.
//!
//! Every builder reads through [`LeagueRepository`](crate::data::LeagueRepository)
//! and produces a [`TextPage`] that the binary renders to the terminal.

pub mod colors;
pub mod formatting;
pub mod game_center;
pub mod news;
pub mod page;
pub mod player_profile;
pub mod players_index;
pub mod rankings;
pub mod schedule;
pub mod team_hub;
pub mod teams_index;

use chrono::{FixedOffset, Offset, Utc};

pub use game_center::game_center_page;
pub use news::{article_page, news_list_page};
pub use page::{PageRow, TextPage};
pub use player_profile::player_profile_page;
pub use players_index::{PlayerFilter, players_index_page};
pub use rankings::rankings_page;
pub use schedule::{schedule_page, scores_page};
pub use team_hub::team_hub_page;
pub use teams_index::teams_index_page;

/// Rendering options shared by all builders.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Time zone used for every date and time shown
    pub offset: FixedOffset,
    /// Emit no ANSI colour codes
    pub plain: bool,
}

impl DisplayOptions {
    pub fn new(offset: FixedOffset, plain: bool) -> Self {
        Self { offset, plain }
    }

    /// UTC, plain output. Handy for tests and piping.
    pub fn utc_plain() -> Self {
        Self {
            offset: Utc.fix(),
            plain: true,
        }
    }
}
