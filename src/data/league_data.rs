use super::models::{Article, Game, Player, Team};
use super::repository::LeagueRepository;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Season dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/league.json");

/// In-memory league tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueData {
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    players: Vec<Player>,
    #[serde(rename = "schedule", default)]
    games: Vec<Game>,
    #[serde(default)]
    articles: Vec<Article>,
}

impl LeagueData {
    pub fn new(
        teams: Vec<Team>,
        players: Vec<Player>,
        games: Vec<Game>,
        articles: Vec<Article>,
    ) -> Self {
        Self {
            teams,
            players,
            games,
            articles,
        }
    }

    /// Parses a dataset in the `{teams, players, schedule, articles}` JSON layout.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The dataset shipped with the binary.
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Cross-table problems that pages can render around but that likely
    /// indicate a broken dataset.
    pub fn integrity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut team_slugs = HashSet::new();
        for team in &self.teams {
            if !team_slugs.insert(team.slug.as_str()) {
                warnings.push(format!("Duplicate team slug '{}'", team.slug));
            }
        }

        let mut player_slugs = HashSet::new();
        for player in &self.players {
            if !player_slugs.insert(player.slug.to_ascii_lowercase()) {
                warnings.push(format!("Duplicate player slug '{}'", player.slug));
            }
            if !team_slugs.contains(player.team_slug.as_str()) {
                warnings.push(format!(
                    "Player '{}' belongs to unknown team '{}'",
                    player.slug, player.team_slug
                ));
            }
        }

        let mut game_ids = HashSet::new();
        for game in &self.games {
            if !game_ids.insert(game.id.as_str()) {
                warnings.push(format!("Duplicate game id '{}'", game.id));
            }
            for slug in [&game.home_team_slug, &game.away_team_slug] {
                if !team_slugs.contains(slug.as_str()) {
                    warnings.push(format!("Game '{}' references unknown team '{slug}'", game.id));
                }
            }
        }

        let mut article_slugs = HashSet::new();
        for article in &self.articles {
            if !article_slugs.insert(article.slug.as_str()) {
                warnings.push(format!("Duplicate article slug '{}'", article.slug));
            }
            if let Some(team) = &article.related_team
                && !team_slugs.contains(team.as_str())
            {
                warnings.push(format!(
                    "Article '{}' references unknown team '{team}'",
                    article.slug
                ));
            }
            if let Some(player) = &article.related_player
                && !player_slugs.contains(&player.to_ascii_lowercase())
            {
                warnings.push(format!(
                    "Article '{}' references unknown player '{player}'",
                    article.slug
                ));
            }
        }

        warnings
    }
}

impl LeagueRepository for LeagueData {
    fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn games(&self) -> &[Game] {
        &self.games
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }
}
