use super::models::{Article, Game, GameStatus, Player, Team};
use crate::constants::limits::MISSING_JERSEY_NUMBER;

/// Read-only access to the league tables.
///
/// Implementors only provide the four tables; lookups, joins and orderings
/// used by the page builders are derived here so every data source behaves
/// the same way.
pub trait LeagueRepository {
    fn teams(&self) -> &[Team];
    fn players(&self) -> &[Player];
    fn games(&self) -> &[Game];
    fn articles(&self) -> &[Article];

    fn team(&self, slug: &str) -> Option<&Team> {
        self.teams().iter().find(|t| t.slug == slug)
    }

    /// Player lookup ignores ASCII case so `Kymani-Ladi` finds `kymani-ladi`.
    fn player(&self, slug: &str) -> Option<&Player> {
        self.players()
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
    }

    fn game(&self, id: &str) -> Option<&Game> {
        self.games().iter().find(|g| g.id == id)
    }

    fn article(&self, slug: &str) -> Option<&Article> {
        self.articles().iter().find(|a| a.slug == slug)
    }

    /// Players of a team ordered by jersey number; players without a number go last.
    fn roster(&self, team_slug: &str) -> Vec<&Player> {
        let mut roster: Vec<&Player> = self
            .players()
            .iter()
            .filter(|p| p.team_slug == team_slug)
            .collect();
        roster.sort_by_key(|p| p.number.unwrap_or(MISSING_JERSEY_NUMBER));
        roster
    }

    /// Upcoming games involving the team, soonest first.
    fn upcoming_games(&self, team_slug: &str, limit: usize) -> Vec<&Game> {
        let mut games: Vec<&Game> = self
            .games()
            .iter()
            .filter(|g| g.status == GameStatus::Upcoming && g.involves(team_slug))
            .collect();
        games.sort_by_key(|g| g.date);
        games.truncate(limit);
        games
    }

    /// Teams by wins descending; fewer losses breaks ties.
    fn standings(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams().iter().collect();
        teams.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
        teams
    }

    /// 1-based standings position.
    fn team_rank(&self, slug: &str) -> Option<usize> {
        self.standings()
            .iter()
            .position(|t| t.slug == slug)
            .map(|index| index + 1)
    }
}
