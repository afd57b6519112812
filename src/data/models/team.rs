use serde::{Deserialize, Serialize};

/// Season aggregate statistics for a team. Percentages are 0-1 fractions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamStats {
    #[serde(rename = "pointsPerGame")]
    pub points_per_game: f64,
    #[serde(rename = "reboundsPerGame")]
    pub rebounds_per_game: f64,
    #[serde(rename = "assistsPerGame")]
    pub assists_per_game: f64,
    #[serde(rename = "stealsPerGame", default)]
    pub steals_per_game: f64,
    #[serde(rename = "blocksPerGame", default)]
    pub blocks_per_game: f64,
    #[serde(rename = "fieldGoalPercentage", default)]
    pub field_goal_percentage: Option<f64>,
    #[serde(rename = "threePointPercentage", default)]
    pub three_point_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamHistory {
    pub season: String,
    /// Season record such as "12-2"
    pub record: String,
    /// Final placing such as "Champions" or "Final Four"
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InjuryReport {
    #[serde(rename = "playerName")]
    pub player_name: String,
    /// "Out", "Day-to-Day", "Probable", ...
    pub status: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub slug: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub stats: TeamStats,
    #[serde(default)]
    pub history: Vec<TeamHistory>,
    #[serde(default)]
    pub injuries: Vec<InjuryReport>,
}

impl Team {
    /// Record formatted as "W-L".
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}
