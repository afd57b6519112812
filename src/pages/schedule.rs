use super::formatting::{format_long_date, format_time, local_day, truncate};
use super::{DisplayOptions, TextPage};
use crate::constants::page_numbers;
use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data::{Game, GameStatus, LeagueRepository, Winner};
use crate::error::AppError;
use chrono::{FixedOffset, NaiveDate};
use tracing::debug;

/// Games that share one local calendar day.
#[derive(Debug)]
pub struct GameDay<'a> {
    pub day: NaiveDate,
    pub games: Vec<&'a Game>,
}

/// Groups games by local day. Days and the games inside them run newest first.
pub fn group_games_by_day<'a>(games: &[&'a Game], offset: &FixedOffset) -> Vec<GameDay<'a>> {
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut days: Vec<GameDay<'a>> = Vec::new();
    for game in sorted {
        let day = local_day(&game.date, offset);
        match days.last_mut() {
            Some(group) if group.day == day => group.games.push(game),
            _ => days.push(GameDay {
                day,
                games: vec![game],
            }),
        }
    }
    days
}

/// Team name and record, or the raw slug and `0-0` when the team is unknown.
fn team_label<R: LeagueRepository>(repo: &R, slug: &str) -> (String, String) {
    match repo.team(slug) {
        Some(team) => (team.name.clone(), team.record()),
        None => (slug.to_string(), "0-0".to_string()),
    }
}

fn team_line(name: &str, record: &str, score: Option<u32>, winner: bool) -> String {
    let name = truncate(name, TEAM_NAME_WIDTH);
    let score = score.map_or_else(String::new, |s| format!("{s:>4}"));
    let mark = if winner { " W" } else { "" };
    format!("{name:<TEAM_NAME_WIDTH$} {record:>6}{score}{mark}")
}

fn add_game<R: LeagueRepository>(page: &mut TextPage, repo: &R, game: &Game, offset: &FixedOffset) {
    let (away_name, away_record) = team_label(repo, &game.away_team_slug);
    let (home_name, home_record) = team_label(repo, &game.home_team_slug);

    let status = match game.status {
        GameStatus::Upcoming => format_time(&game.date, offset),
        GameStatus::Live => "LIVE".to_string(),
        GameStatus::Final => "FINAL".to_string(),
    };
    page.add_text(format!("{status}  {}  [{}]", game.venue, game.id));

    let winner = game.winner();
    let (away_score, home_score) = if game.has_score() {
        (
            Some(game.away_team_score.unwrap_or(0)),
            Some(game.home_team_score.unwrap_or(0)),
        )
    } else {
        (None, None)
    };

    let away = format!(
        "  {}",
        team_line(&away_name, &away_record, away_score, winner == Some(Winner::Away))
    );
    let home = format!(
        "@ {}",
        team_line(&home_name, &home_record, home_score, winner == Some(Winner::Home))
    );

    match winner {
        Some(Winner::Away) => {
            page.add_highlight(away);
            page.add_text(home);
        }
        Some(Winner::Home) => {
            page.add_text(away);
            page.add_highlight(home);
        }
        None => {
            page.add_text(away);
            page.add_text(home);
        }
    }
}

fn build_game_list<R: LeagueRepository>(
    repo: &R,
    mut page: TextPage,
    games: Vec<&Game>,
    date_filter: Option<NaiveDate>,
    options: &DisplayOptions,
    empty_messages: (&str, &str),
) -> TextPage {
    let days: Vec<GameDay> = group_games_by_day(&games, &options.offset)
        .into_iter()
        .filter(|group| date_filter.is_none_or(|day| group.day == day))
        .collect();
    debug!("Listing {} games over {} days", games.len(), days.len());

    if days.is_empty() {
        page.add_error_message(empty_messages.0);
        page.add_text(empty_messages.1);
        return page;
    }

    for group in days {
        if let Some(first) = group.games.first() {
            page.add_section_header(format_long_date(&first.date, &options.offset));
        }
        for (index, game) in group.games.iter().enumerate() {
            if index > 0 {
                page.add_spacer();
            }
            add_game(&mut page, repo, game, &options.offset);
        }
    }
    page
}

/// Every game in the schedule, optionally limited to one local day.
pub fn schedule_page<R: LeagueRepository>(
    repo: &R,
    date_filter: Option<NaiveDate>,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let page = TextPage::new(
        page_numbers::SCHEDULE,
        "SCHEDULE",
        "Game schedules and results",
        options.plain,
    );
    let games: Vec<&Game> = repo.games().iter().collect();
    Ok(build_game_list(
        repo,
        page,
        games,
        date_filter,
        options,
        ("No games scheduled.", "Check back soon for the upcoming schedule."),
    ))
}

/// Live and finished games only.
pub fn scores_page<R: LeagueRepository>(
    repo: &R,
    date_filter: Option<NaiveDate>,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let page = TextPage::new(page_numbers::SCORES, "SCORES", "Scores & Recaps", options.plain);
    let games: Vec<&Game> = repo
        .games()
        .iter()
        .filter(|g| matches!(g.status, GameStatus::Live | GameStatus::Final))
        .collect();
    Ok(build_game_list(
        repo,
        page,
        games,
        date_filter,
        options,
        ("No scores to display.", "Check back soon for the latest results."),
    ))
}
