//! Game center: matchup header, head-to-head comparison and win predictor.

use super::formatting::{format_month_day, format_time, one_decimal, truncate};
use super::{DisplayOptions, TextPage};
use crate::constants::page_numbers;
use crate::constants::ui::{STAT_LABEL_WIDTH, TEAM_NAME_WIDTH};
use crate::data::{Game, GameStatus, LeagueRepository, Team};
use crate::error::AppError;
use crate::estimator::{MatchupRecord, WinProbability, win_probability};
use tracing::{debug, warn};

/// Width of the predictor bar in characters.
const PREDICTOR_BAR_WIDTH: usize = 40;

/// Which side leads a head-to-head line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Home,
    Away,
    Even,
}

/// One head-to-head comparison line. Values are already scaled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadLine {
    pub label: &'static str,
    pub away: f64,
    pub home: f64,
    pub is_percentage: bool,
}

impl HeadToHeadLine {
    pub fn edge(&self) -> Edge {
        if self.home > self.away {
            Edge::Home
        } else if self.away > self.home {
            Edge::Away
        } else {
            Edge::Even
        }
    }

    fn format_value(&self, value: f64) -> String {
        if self.is_percentage {
            format!("{}%", one_decimal(value))
        } else {
            one_decimal(value)
        }
    }
}

fn fraction_to_percent(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0) * 100.0
}

/// PPG, RPG, APG, FG% and 3P% for both teams.
pub fn head_to_head(home: &Team, away: &Team) -> Vec<HeadToHeadLine> {
    vec![
        HeadToHeadLine {
            label: "Points Per Game",
            away: away.stats.points_per_game,
            home: home.stats.points_per_game,
            is_percentage: false,
        },
        HeadToHeadLine {
            label: "Rebounds Per Game",
            away: away.stats.rebounds_per_game,
            home: home.stats.rebounds_per_game,
            is_percentage: false,
        },
        HeadToHeadLine {
            label: "Assists Per Game",
            away: away.stats.assists_per_game,
            home: home.stats.assists_per_game,
            is_percentage: false,
        },
        HeadToHeadLine {
            label: "FG%",
            away: fraction_to_percent(away.stats.field_goal_percentage),
            home: fraction_to_percent(home.stats.field_goal_percentage),
            is_percentage: true,
        },
        HeadToHeadLine {
            label: "3P%",
            away: fraction_to_percent(away.stats.three_point_percentage),
            home: fraction_to_percent(home.stats.three_point_percentage),
            is_percentage: true,
        },
    ]
}

/// Home share of a bar, `#` for home and `-` for away.
fn probability_bar(probability: &WinProbability) -> String {
    let home_cells = ((probability.home_percent / 100.0) * PREDICTOR_BAR_WIDTH as f64).round() as usize;
    let home_cells = home_cells.min(PREDICTOR_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(home_cells),
        "-".repeat(PREDICTOR_BAR_WIDTH - home_cells)
    )
}

fn add_matchup_header(page: &mut TextPage, game: &Game, home: &Team, away: &Team, options: &DisplayOptions) {
    page.add_highlight(format!(
        "{} ({})  VS  {} ({})",
        away.name,
        away.record(),
        home.name,
        home.record()
    ));
    page.add_text(format_time(&game.date, &options.offset));
    page.add_text(format!(
        "{} • {}",
        format_month_day(&game.date, &options.offset),
        game.venue
    ));

    if game.has_score() {
        let label = match game.status {
            GameStatus::Live => "LIVE",
            _ => "FINAL",
        };
        page.add_highlight(format!(
            "{label}  {} {}  -  {} {}",
            away.name,
            game.away_team_score.unwrap_or(0),
            game.home_team_score.unwrap_or(0),
            home.name
        ));
    }

    let mut actions = Vec::new();
    if game.status != GameStatus::Final
        && let Some(link) = game.ticket_link.as_deref().filter(|l| !l.is_empty())
    {
        actions.push(format!("Buy Tickets ({link})"));
    }
    match game.live_stream_link.as_deref().filter(|l| !l.is_empty()) {
        Some(link) => {
            let label = if game.status == GameStatus::Live {
                "Watch Live"
            } else {
                "Watch"
            };
            actions.push(format!("{label} ({link})"));
        }
        None if game.status != GameStatus::Final => actions.push("No Stream".to_string()),
        None => {}
    }
    if !actions.is_empty() {
        page.add_text(actions.join("  |  "));
    }
    if let Some(broadcast) = game.broadcast.as_deref().filter(|b| !b.is_empty()) {
        page.add_stat("Broadcast", broadcast);
    }
}

fn add_head_to_head(page: &mut TextPage, home: &Team, away: &Team) {
    page.add_section_header("Head-to-Head Stats");
    page.add_text(format!(
        "{:<STAT_LABEL_WIDTH$}{:>12}{:>12}",
        "",
        truncate(&away.name, 11),
        truncate(&home.name, 11)
    ));
    for line in head_to_head(home, away) {
        let away_value = line.format_value(line.away);
        let home_value = line.format_value(line.home);
        let (away_mark, home_mark) = match line.edge() {
            Edge::Away => ("*", " "),
            Edge::Home => (" ", "*"),
            Edge::Even => (" ", " "),
        };
        page.add_text(format!(
            "{:<STAT_LABEL_WIDTH$}{away_value:>11}{away_mark}{home_value:>11}{home_mark}",
            line.label
        ));
    }
}

fn add_predictor(page: &mut TextPage, home: &Team, away: &Team) {
    let probability = win_probability(&MatchupRecord::from(home), &MatchupRecord::from(away));
    debug!(
        "Predictor {} {:.3} vs {} {:.3}",
        home.slug, probability.home_percent, away.slug, probability.away_percent
    );

    page.add_section_header("Matchup Predictor");
    page.add_stat(
        truncate(&home.name, STAT_LABEL_WIDTH - 1),
        format!("{}%", one_decimal(probability.home_percent)),
    );
    page.add_stat(
        truncate(&away.name, STAT_LABEL_WIDTH - 1),
        format!("{}%", one_decimal(probability.away_percent)),
    );
    page.add_text(probability_bar(&probability));
    page.add_text("Based on Team Power Index");
}

fn add_roster<R: LeagueRepository>(page: &mut TextPage, repo: &R, team: &Team) {
    page.add_section_header(format!("{} Roster", team.name));
    let roster = repo.roster(&team.slug);
    if roster.is_empty() {
        page.add_text("Roster information is not yet available.");
    }
    for player in roster {
        let number = player
            .number
            .map_or_else(|| "--".to_string(), |n| format!("#{n}"));
        page.add_text(format!(
            "{number:>4} {:<TEAM_NAME_WIDTH$}{}",
            player.name, player.position
        ));
    }
}

fn add_injuries(page: &mut TextPage, team: &Team) {
    page.add_section_header(format!("{} Injuries", team.name));
    if team.injuries.is_empty() {
        page.add_text("No injuries reported.");
    }
    for injury in &team.injuries {
        page.add_text(format!(
            "{} - {} ({})",
            injury.player_name, injury.status, injury.details
        ));
    }
}

/// Builds the game center page for game `id`.
///
/// A game whose teams cannot be resolved still yields a page, carrying a
/// single error message in place of the matchup.
pub fn game_center_page<R: LeagueRepository>(
    repo: &R,
    id: &str,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let game = repo.game(id).ok_or_else(|| AppError::game_not_found(id))?;
    let mut page = TextPage::new(
        page_numbers::GAME_CENTER,
        "GAME CENTER",
        game.status.to_string(),
        options.plain,
    );

    let (Some(home), Some(away)) = (repo.team(&game.home_team_slug), repo.team(&game.away_team_slug)) else {
        warn!(
            "Game {} references unknown team ({} / {})",
            game.id, game.home_team_slug, game.away_team_slug
        );
        page.add_error_message("Team data could not be loaded for this game.");
        return Ok(page);
    };

    add_matchup_header(&mut page, game, home, away, options);
    add_head_to_head(&mut page, home, away);
    add_predictor(&mut page, home, away);
    add_roster(&mut page, repo, home);
    add_roster(&mut page, repo, away);
    add_injuries(&mut page, home);
    add_injuries(&mut page, away);

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LeagueData;
    use crate::testing_utils::TestDataBuilder;

    fn league() -> LeagueData {
        let mut eagles = TestDataBuilder::create_team("eagles", "Blue Eagles", 11, 3);
        eagles.stats.points_per_game = 78.5;
        let mut archers = TestDataBuilder::create_team("archers", "Green Archers", 10, 4);
        archers.stats.points_per_game = 82.1;
        archers.stats.field_goal_percentage = Some(0.45);

        let mut upcoming =
            TestDataBuilder::create_upcoming_game("g1", "eagles", "archers", "2025-10-22T16:00:00Z");
        upcoming.ticket_link = Some("#tickets".to_string());
        upcoming.broadcast = Some("UAAP Varsity Channel".to_string());

        let mut live =
            TestDataBuilder::create_live_game("g2", "archers", "eagles", "2025-10-20T16:00:00Z", 68, 72);
        live.live_stream_link = Some("#stream".to_string());

        let finished =
            TestDataBuilder::create_final_game("g3", "eagles", "archers", "2025-10-18T16:00:00Z", 88, 85);
        let orphan =
            TestDataBuilder::create_upcoming_game("g4", "eagles", "ghost", "2025-10-30T16:00:00Z");

        let players = vec![
            TestDataBuilder::create_player("guard", "Some Guard", Some(3), "eagles"),
        ];
        LeagueData::new(vec![eagles, archers], players, vec![upcoming, live, finished, orphan], vec![])
    }

    #[test]
    fn test_unknown_game_is_not_found() {
        let result = game_center_page(&league(), "nope", &DisplayOptions::utc_plain());
        assert!(matches!(result, Err(AppError::GameNotFound { .. })));
    }

    #[test]
    fn test_missing_team_shows_error_message() {
        let page = game_center_page(&league(), "g4", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.has_error_messages());
        assert_eq!(
            page.plain_lines(),
            vec!["Team data could not be loaded for this game.".to_string()]
        );
    }

    #[test]
    fn test_matchup_header_for_upcoming_game() {
        let page = game_center_page(&league(), "g1", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("Green Archers (10-4)  VS  Blue Eagles (11-3)"));
        assert!(page.contains_text("4:00 PM"));
        assert!(page.contains_text("October 22 • Mall of Asia Arena"));
        assert!(page.contains_text("Buy Tickets (#tickets)  |  No Stream"));
        assert!(page.contains_text("UAAP Varsity Channel"));
    }

    #[test]
    fn test_live_and_final_actions() {
        let page = game_center_page(&league(), "g2", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("LIVE  Blue Eagles 72  -  68 Green Archers"));
        assert!(page.contains_text("Watch Live (#stream)"));

        let page = game_center_page(&league(), "g3", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("FINAL  Green Archers 85  -  88 Blue Eagles"));
        assert!(!page.contains_text("Buy Tickets"));
        assert!(!page.contains_text("No Stream"));
    }

    #[test]
    fn test_predictor_percentages() {
        let page = game_center_page(&league(), "g1", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("52.1%"));
        assert!(page.contains_text("47.9%"));
        assert!(page.contains_text("Based on Team Power Index"));
    }

    #[test]
    fn test_head_to_head_edges() {
        let league = league();
        let eagles = league.team("eagles").unwrap();
        let archers = league.team("archers").unwrap();
        let lines = head_to_head(eagles, archers);
        assert_eq!(lines[0].edge(), Edge::Away);
        assert_eq!(lines[1].edge(), Edge::Even);
        assert_eq!(lines[3].edge(), Edge::Away);
        assert!((lines[3].away - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_probability_bar_width() {
        let bar = probability_bar(&WinProbability {
            home_percent: 75.0,
            away_percent: 25.0,
        });
        assert_eq!(bar, format!("[{}{}]", "#".repeat(30), "-".repeat(10)));
    }

    #[test]
    fn test_rosters_and_injuries_listed() {
        let page = game_center_page(&league(), "g1", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("BLUE EAGLES ROSTER"));
        assert!(page.contains_text("Some Guard"));
        assert!(page.contains_text("GREEN ARCHERS ROSTER"));
        assert!(page.contains_text("No injuries reported."));
    }
}
