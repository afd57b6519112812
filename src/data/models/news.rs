use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ArticleCategory {
    #[serde(rename = "Game Recap")]
    GameRecap,
    #[serde(rename = "Player Spotlight")]
    PlayerSpotlight,
    #[serde(rename = "League News")]
    LeagueNews,
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArticleCategory::GameRecap => "Game Recap",
            ArticleCategory::PlayerSpotlight => "Player Spotlight",
            ArticleCategory::LeagueNews => "League News",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Body as an HTML fragment
    pub content: String,
    pub category: ArticleCategory,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "relatedPlayer", default)]
    pub related_player: Option<String>,
    #[serde(rename = "relatedTeam", default)]
    pub related_team: Option<String>,
}
