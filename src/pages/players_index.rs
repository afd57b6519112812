use super::{DisplayOptions, TextPage};
use crate::constants::page_numbers;
use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data::{LeagueRepository, Player};
use crate::error::AppError;
use tracing::debug;

/// Team filter value that selects every team.
pub const ALL_TEAMS: &str = "all";

/// Group name for players without a team.
const UNATTACHED: &str = "Unattached";

/// Search and team filter for the players index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    /// Substring of the player name, case-insensitive
    pub search: Option<String>,
    /// Team name or slug, case-insensitive; `all` disables the filter
    pub team: Option<String>,
}

impl PlayerFilter {
    pub fn new(search: Option<String>, team: Option<String>) -> Self {
        Self { search, team }
    }

    pub fn matches(&self, player: &Player) -> bool {
        let matches_team = match self.team.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(team) if team.eq_ignore_ascii_case(ALL_TEAMS) => true,
            Some(team) => {
                player.team.eq_ignore_ascii_case(team) || player.team_slug.eq_ignore_ascii_case(team)
            }
        };
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(search) => player.name.to_lowercase().contains(&search.to_lowercase()),
        };
        matches_team && matches_search
    }
}

fn group_name(player: &Player) -> &str {
    if player.team.trim().is_empty() {
        UNATTACHED
    } else {
        &player.team
    }
}

/// Players sharing one team name.
pub type TeamGroup<'a> = (&'a str, Vec<&'a Player>);

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Filtered players grouped by team name. Groups and the players inside
/// them are sorted by name, ignoring case.
pub fn group_players_by_team<'a, R: LeagueRepository>(
    repo: &'a R,
    filter: &PlayerFilter,
) -> Vec<TeamGroup<'a>> {
    let mut grouped: Vec<TeamGroup<'a>> = Vec::new();
    for player in repo.players().iter().filter(|p| filter.matches(p)) {
        let team = group_name(player);
        match grouped.iter_mut().find(|(name, _)| *name == team) {
            Some((_, players)) => players.push(player),
            None => grouped.push((team, vec![player])),
        }
    }
    grouped.sort_by_cached_key(|(team, _)| name_key(team));
    for (_, players) in &mut grouped {
        players.sort_by_cached_key(|p| name_key(&p.name));
    }
    grouped
}

/// Builds the players index page.
pub fn players_index_page<R: LeagueRepository>(
    repo: &R,
    filter: &PlayerFilter,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let mut page = TextPage::new(
        page_numbers::PLAYERS_INDEX,
        "PLAYERS",
        "Browse all players by team",
        options.plain,
    );

    let grouped = group_players_by_team(repo, filter);
    debug!("Players index: {} teams match {:?}", grouped.len(), filter);

    if grouped.is_empty() {
        page.add_error_message("No players found.");
        page.add_text("Try adjusting your search or filter.");
        return Ok(page);
    }

    for (team, players) in grouped {
        page.add_section_header(team);
        page.add_text(format!("{} players", players.len()));
        for player in players {
            let number = player
                .number
                .map_or_else(|| "--".to_string(), |n| format!("#{n}"));
            page.add_text(format!(
                "{number:>4} {:<TEAM_NAME_WIDTH$}{:<12}{}",
                player.name, player.position, player.slug
            ));
        }
    }

    Ok(page)
}
