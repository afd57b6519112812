use serde::{Deserialize, Serialize};

/// Per-game averages. Used for both the current season and career totals.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayerStats {
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: u32,
    #[serde(rename = "pointsPerGame", default)]
    pub points_per_game: f64,
    #[serde(rename = "reboundsPerGame", default)]
    pub rebounds_per_game: f64,
    #[serde(rename = "assistsPerGame", default)]
    pub assists_per_game: f64,
    #[serde(rename = "stealsPerGame", default)]
    pub steals_per_game: f64,
    #[serde(rename = "blocksPerGame", default)]
    pub blocks_per_game: f64,
    #[serde(rename = "fieldGoalPercentage", default)]
    pub field_goal_percentage: f64,
    #[serde(rename = "threePointPercentage", default)]
    pub three_point_percentage: f64,
    #[serde(rename = "freeThrowPercentage", default)]
    pub free_throw_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameLogEntry {
    #[serde(rename = "gameId")]
    pub game_id: String,
    #[serde(rename = "opponentSlug")]
    pub opponent_slug: String,
    #[serde(rename = "opponentName")]
    pub opponent_name: String,
    /// Outcome and score, e.g. "W 88-85"
    pub result: String,
    /// Short display date, e.g. "Oct 18"
    pub date: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Socials {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}

impl Socials {
    /// Non-empty links as (label, url) pairs in a fixed order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", self.twitter.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("Facebook", self.facebook.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    pub position: String,
    /// Display name of the team
    pub team: String,
    #[serde(rename = "teamSlug")]
    pub team_slug: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub socials: Socials,
    pub stats: PlayerStats,
    #[serde(rename = "careerStats", default)]
    pub career_stats: PlayerStats,
    #[serde(rename = "recentGames", default)]
    pub recent_games: Vec<GameLogEntry>,
}

impl Player {
    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }
}
