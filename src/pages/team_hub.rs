use super::formatting::{format_short_date, format_time, one_decimal, optional_percent, percent_or_na};
use super::{DisplayOptions, TextPage};
use crate::constants::limits::{TEAM_LEADERS_PER_CATEGORY, TEAM_UPCOMING_GAMES};
use crate::constants::page_numbers;
use crate::data::{LeagueRepository, Player};
use crate::error::AppError;
use tracing::debug;

/// Stat a team leaders list is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderCategory {
    Points,
    Assists,
    ThreePointPercentage,
    Rebounds,
    Steals,
    Blocks,
}

impl LeaderCategory {
    pub fn label(self) -> &'static str {
        match self {
            LeaderCategory::Points => "Points",
            LeaderCategory::Assists => "Assists",
            LeaderCategory::ThreePointPercentage => "3P%",
            LeaderCategory::Rebounds => "Rebounds",
            LeaderCategory::Steals => "Steals",
            LeaderCategory::Blocks => "Blocks",
        }
    }

    fn value(self, player: &Player) -> f64 {
        let stats = &player.stats;
        match self {
            LeaderCategory::Points => stats.points_per_game,
            LeaderCategory::Assists => stats.assists_per_game,
            LeaderCategory::ThreePointPercentage => stats.three_point_percentage,
            LeaderCategory::Rebounds => stats.rebounds_per_game,
            LeaderCategory::Steals => stats.steals_per_game,
            LeaderCategory::Blocks => stats.blocks_per_game,
        }
    }

    fn format(self, player: &Player) -> String {
        match self {
            LeaderCategory::ThreePointPercentage => percent_or_na(self.value(player)),
            _ => one_decimal(self.value(player)),
        }
    }
}

/// Side of the ball a set of leader categories belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderGroup {
    Offense,
    Defense,
}

impl LeaderGroup {
    pub const ALL: [LeaderGroup; 2] = [LeaderGroup::Offense, LeaderGroup::Defense];

    pub fn label(self) -> &'static str {
        match self {
            LeaderGroup::Offense => "Offense",
            LeaderGroup::Defense => "Defense",
        }
    }

    pub fn categories(self) -> [LeaderCategory; 3] {
        match self {
            LeaderGroup::Offense => [
                LeaderCategory::Points,
                LeaderCategory::Assists,
                LeaderCategory::ThreePointPercentage,
            ],
            LeaderGroup::Defense => [
                LeaderCategory::Rebounds,
                LeaderCategory::Steals,
                LeaderCategory::Blocks,
            ],
        }
    }
}

/// Top `limit` players of a roster for one category, best first.
/// Players without a usable value are left out; equal values keep roster order.
pub fn team_leaders<'a>(roster: &[&'a Player], category: LeaderCategory, limit: usize) -> Vec<&'a Player> {
    let mut leaders: Vec<&Player> = roster
        .iter()
        .copied()
        .filter(|p| category.value(p).is_finite())
        .collect();
    leaders.sort_by(|a, b| category.value(b).total_cmp(&category.value(a)));
    leaders.truncate(limit);
    leaders
}

/// Builds the team hub page for `slug`.
pub fn team_hub_page<R: LeagueRepository>(
    repo: &R,
    slug: &str,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let team = repo.team(slug).ok_or_else(|| AppError::team_not_found(slug))?;
    debug!("Building team hub for {}", team.slug);

    let mut page = TextPage::new(page_numbers::TEAM_HUB, "TEAM HUB", team.name.clone(), options.plain);

    page.add_highlight(team.name.clone());
    page.add_stat("Record", team.record());
    let team_count = repo.teams().len();
    if let Some(rank) = repo.team_rank(&team.slug) {
        page.add_stat("Standing", format!("#{rank} of {team_count}"));
    }

    page.add_section_header("Season Stats");
    page.add_stat("Points per game", one_decimal(team.stats.points_per_game));
    page.add_stat("Rebounds per game", one_decimal(team.stats.rebounds_per_game));
    page.add_stat("Assists per game", one_decimal(team.stats.assists_per_game));
    page.add_stat("Field goal %", optional_percent(team.stats.field_goal_percentage));
    page.add_stat("Three point %", optional_percent(team.stats.three_point_percentage));

    let roster = repo.roster(&team.slug);

    page.add_section_header("Team Leaders");
    if roster.is_empty() {
        page.add_text("No player statistics available.");
    } else {
        for group in LeaderGroup::ALL {
            page.add_highlight(group.label());
            for category in group.categories() {
                let names: Vec<String> = team_leaders(&roster, category, TEAM_LEADERS_PER_CATEGORY)
                    .iter()
                    .map(|p| format!("{} {}", p.name, category.format(p)))
                    .collect();
                page.add_stat(category.label(), names.join(", "));
            }
        }
    }

    page.add_section_header("Roster");
    if roster.is_empty() {
        page.add_text("Roster information is not yet available.");
    }
    for player in &roster {
        let number = player
            .number
            .map_or_else(|| "--".to_string(), |n| format!("#{n}"));
        page.add_text(format!("{number:>4} {} ({})", player.name, player.position));
    }

    page.add_section_header("Upcoming Games");
    let upcoming = repo.upcoming_games(&team.slug, TEAM_UPCOMING_GAMES);
    if upcoming.is_empty() {
        page.add_text("No upcoming games scheduled.");
    }
    for game in upcoming {
        let (prefix, opponent_slug) = if game.home_team_slug == team.slug {
            ("vs", game.away_team_slug.as_str())
        } else {
            ("@", game.home_team_slug.as_str())
        };
        let opponent = repo.team(opponent_slug).map_or(opponent_slug, |t| t.name.as_str());
        page.add_text(format!(
            "{} {}  {prefix} {opponent}  {}",
            format_short_date(&game.date, &options.offset),
            format_time(&game.date, &options.offset),
            game.venue
        ));
    }

    if !team.history.is_empty() {
        page.add_section_header("Team History");
        for season in &team.history {
            page.add_stat(season.season.clone(), format!("{}  {}", season.record, season.result));
        }
    }

    if !team.injuries.is_empty() {
        page.add_section_header("Injury Report");
        for injury in &team.injuries {
            page.add_text(format!("{} - {} ({})", injury.player_name, injury.status, injury.details));
        }
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ui::STAT_LABEL_WIDTH;
    use crate::data::LeagueData;
    use crate::testing_utils::TestDataBuilder;

    fn league() -> LeagueData {
        let teams = vec![
            TestDataBuilder::create_team_with_reports("eagles", "Blue Eagles", 11, 3),
            TestDataBuilder::create_team("archers", "Green Archers", 10, 4),
            TestDataBuilder::create_team("bulldogs", "Bulldogs", 0, 0),
        ];
        let mut big = TestDataBuilder::create_player_with_stats("big", "eagles", 12.0, 11.0, 1.0);
        big.stats.blocks_per_game = 2.4;
        big.stats.three_point_percentage = 0.0;
        let mut point = TestDataBuilder::create_player_with_stats("point", "eagles", 9.0, 3.0, 7.0);
        point.stats.steals_per_game = 2.1;
        point.stats.three_point_percentage = 0.41;
        let mut bench = TestDataBuilder::create_player_with_stats("bench", "eagles", 2.0, 1.0, 0.5);
        bench.stats.steals_per_game = f64::NAN;
        let players = vec![
            TestDataBuilder::create_player_with_stats("scorer", "eagles", 20.0, 5.0, 2.0),
            big,
            point,
            bench,
        ];
        let games = vec![
            TestDataBuilder::create_upcoming_game("g1", "eagles", "archers", "2025-10-22T08:00:00Z"),
            TestDataBuilder::create_upcoming_game("g2", "archers", "eagles", "2025-10-25T08:00:00Z"),
            TestDataBuilder::create_upcoming_game("g3", "eagles", "ghost-team", "2025-10-29T08:00:00Z"),
            TestDataBuilder::create_upcoming_game("g4", "eagles", "archers", "2025-11-05T08:00:00Z"),
        ];
        LeagueData::new(teams, players, games, vec![])
    }

    #[test]
    fn test_unknown_team_is_not_found() {
        let result = team_hub_page(&league(), "nobody", &DisplayOptions::utc_plain());
        assert!(matches!(result, Err(AppError::TeamNotFound { .. })));
    }

    #[test]
    fn test_team_hub_header_and_rank() {
        let page = team_hub_page(&league(), "eagles", &DisplayOptions::utc_plain()).unwrap();
        assert_eq!(page.page_number(), page_numbers::TEAM_HUB);
        assert_eq!(page.subheader(), "Blue Eagles");
        assert!(page.contains_text("11-3"));
        assert!(page.contains_text("#1 of 3"));
        assert!(page.contains_text("75.0"));
    }

    #[test]
    fn test_team_leaders_ranked_by_category() {
        let league = league();
        let roster = league.roster("eagles");
        let rebounders: Vec<&str> = team_leaders(&roster, LeaderCategory::Rebounds, 3)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(rebounders, vec!["big", "scorer", "point"]);

        let passers = team_leaders(&roster, LeaderCategory::Assists, 1);
        assert_eq!(passers[0].slug, "point");
    }

    #[test]
    fn test_defensive_leaders() {
        let league = league();
        let roster = league.roster("eagles");

        let stealers: Vec<&str> = team_leaders(&roster, LeaderCategory::Steals, 3)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        // bench has no usable steals figure
        assert_eq!(stealers, vec!["point", "scorer", "big"]);

        let blockers = team_leaders(&roster, LeaderCategory::Blocks, 1);
        assert_eq!(blockers[0].slug, "big");

        let shooters = team_leaders(&roster, LeaderCategory::ThreePointPercentage, 1);
        assert_eq!(shooters[0].slug, "point");
    }

    #[test]
    fn test_leaders_grouped_by_offense_and_defense() {
        let page = team_hub_page(&league(), "eagles", &DisplayOptions::utc_plain()).unwrap();
        let lines = page.plain_lines();
        let offense = lines.iter().position(|l| l == "Offense").unwrap();
        let defense = lines.iter().position(|l| l == "Defense").unwrap();
        assert!(offense < defense);

        let stat_line = |label: &str| {
            lines
                .iter()
                .position(|l| l.starts_with(&format!("{label:<STAT_LABEL_WIDTH$}")))
                .unwrap_or_else(|| panic!("no {label} line"))
        };
        assert!(offense < stat_line("Points") && stat_line("Points") < defense);
        assert!(offense < stat_line("3P%") && stat_line("3P%") < defense);
        assert!(defense < stat_line("Steals"));
        assert!(defense < stat_line("Blocks"));
        assert!(page.contains_text("big 2.4"));
        assert!(page.contains_text("point 41.0%"));
        assert!(!page.contains_text("Field Goal %"));
    }

    #[test]
    fn test_upcoming_games_use_vs_and_at() {
        let page = team_hub_page(&league(), "eagles", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("Oct 22 8:00 AM  vs Green Archers  Mall of Asia Arena"));
        assert!(page.contains_text("Oct 25 8:00 AM  @ Green Archers"));
        // Unknown opponent falls back to its slug
        assert!(page.contains_text("vs ghost-team"));
        // Only three upcoming games
        assert!(!page.contains_text("Nov 5"));
    }

    #[test]
    fn test_empty_team_messages() {
        let page = team_hub_page(&league(), "bulldogs", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("Roster information is not yet available."));
        assert!(page.contains_text("No upcoming games scheduled."));
        assert!(!page.contains_text("INJURY REPORT"));
    }

    #[test]
    fn test_history_and_injuries_listed() {
        let page = team_hub_page(&league(), "eagles", &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("TEAM HISTORY"));
        assert!(page.contains_text("12-2  Champions"));
        assert!(page.contains_text("Injured Player - Out (Knee Injury)"));
    }
}
