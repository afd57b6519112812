use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Upcoming,
    Live,
    Final,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Upcoming => "UPCOMING",
            GameStatus::Live => "LIVE",
            GameStatus::Final => "FINAL",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    /// Tip-off time in UTC
    pub date: DateTime<Utc>,
    pub venue: String,
    pub status: GameStatus,
    #[serde(rename = "homeTeamSlug")]
    pub home_team_slug: String,
    #[serde(rename = "awayTeamSlug")]
    pub away_team_slug: String,
    #[serde(rename = "homeTeamScore", default)]
    pub home_team_score: Option<u32>,
    #[serde(rename = "awayTeamScore", default)]
    pub away_team_score: Option<u32>,
    #[serde(default)]
    pub broadcast: Option<String>,
    #[serde(rename = "liveStreamLink", default)]
    pub live_stream_link: Option<String>,
    #[serde(rename = "ticketLink", default)]
    pub ticket_link: Option<String>,
}

/// Side that won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Home,
    Away,
}

impl Game {
    pub fn involves(&self, team_slug: &str) -> bool {
        self.home_team_slug == team_slug || self.away_team_slug == team_slug
    }

    /// Winner of a final game. Missing scores count as zero; ties have no winner.
    pub fn winner(&self) -> Option<Winner> {
        if self.status != GameStatus::Final {
            return None;
        }
        let home = self.home_team_score.unwrap_or(0);
        let away = self.away_team_score.unwrap_or(0);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Winner::Home),
            std::cmp::Ordering::Less => Some(Winner::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Live or final games show a score line.
    pub fn has_score(&self) -> bool {
        self.status != GameStatus::Upcoming
    }
}
