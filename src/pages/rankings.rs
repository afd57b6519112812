use super::formatting::{one_decimal, truncate};
use super::{DisplayOptions, TextPage};
use crate::constants::limits::LEADERBOARD_SIZE;
use crate::constants::page_numbers;
use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data::{LeagueRepository, Player, PlayerStats};
use crate::error::AppError;

/// League-wide per-game leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    Points,
    Rebounds,
    Assists,
}

impl Leaderboard {
    pub fn title(self) -> &'static str {
        match self {
            Leaderboard::Points => "Points Per Game",
            Leaderboard::Rebounds => "Rebounds Per Game",
            Leaderboard::Assists => "Assists Per Game",
        }
    }

    fn value(self, stats: &PlayerStats) -> f64 {
        match self {
            Leaderboard::Points => stats.points_per_game,
            Leaderboard::Rebounds => stats.rebounds_per_game,
            Leaderboard::Assists => stats.assists_per_game,
        }
    }
}

/// Top `limit` players across the league, best first.
pub fn leaders<R: LeagueRepository>(repo: &R, board: Leaderboard, limit: usize) -> Vec<&Player> {
    let mut players: Vec<&Player> = repo.players().iter().collect();
    players.sort_by(|a, b| board.value(&b.stats).total_cmp(&board.value(&a.stats)));
    players.truncate(limit);
    players
}

/// Standings table followed by the points, rebounds and assists leaderboards.
pub fn rankings_page<R: LeagueRepository>(repo: &R, options: &DisplayOptions) -> Result<TextPage, AppError> {
    let mut page = TextPage::new(
        page_numbers::RANKINGS,
        "RANKINGS",
        "Rankings & Leaders",
        options.plain,
    );

    page.add_section_header("Team Standings");
    let standings = repo.standings();
    if standings.is_empty() {
        page.add_text("No teams available.");
    } else {
        page.add_text(format!(
            "{:>3}  {:<TEAM_NAME_WIDTH$}{:>4}{:>4}{:>7}{:>7}{:>7}",
            "#", "Team", "W", "L", "PPG", "RPG", "APG"
        ));
    }
    for (index, team) in standings.iter().enumerate() {
        let line = format!(
            "{:>3}  {:<TEAM_NAME_WIDTH$}{:>4}{:>4}{:>7}{:>7}{:>7}",
            index + 1,
            truncate(&team.name, TEAM_NAME_WIDTH - 1),
            team.wins,
            team.losses,
            one_decimal(team.stats.points_per_game),
            one_decimal(team.stats.rebounds_per_game),
            one_decimal(team.stats.assists_per_game),
        );
        if index == 0 {
            page.add_highlight(line);
        } else {
            page.add_text(line);
        }
    }

    for board in [Leaderboard::Points, Leaderboard::Rebounds, Leaderboard::Assists] {
        page.add_section_header(board.title());
        let top = leaders(repo, board, LEADERBOARD_SIZE);
        if top.is_empty() {
            page.add_text("No player statistics available.");
        }
        for (index, player) in top.iter().enumerate() {
            page.add_text(format!(
                "{:>3}. {:<TEAM_NAME_WIDTH$}{:<TEAM_NAME_WIDTH$}{:>6}",
                index + 1,
                truncate(&player.name, TEAM_NAME_WIDTH - 1),
                truncate(&player.team, TEAM_NAME_WIDTH - 1),
                one_decimal(board.value(&player.stats)),
            ));
        }
    }

    Ok(page)
}
