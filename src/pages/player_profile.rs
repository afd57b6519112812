use super::formatting::{NOT_AVAILABLE, one_decimal, or_na, percent_or_na};
use super::{DisplayOptions, TextPage};
use crate::constants::page_numbers;
use crate::data::{LeagueRepository, PlayerStats};
use crate::error::AppError;
use tracing::debug;

const STAT_COLUMN_WIDTH: usize = 10;

fn stat_table_row(label: &str, season: &str, career: &str) -> String {
    format!("{label:<18}{season:>STAT_COLUMN_WIDTH$}{career:>STAT_COLUMN_WIDTH$}")
}

fn stat_rows(season: &PlayerStats, career: &PlayerStats) -> Vec<(&'static str, String, String)> {
    vec![
        ("Games played", season.games_played.to_string(), career.games_played.to_string()),
        ("Points", one_decimal(season.points_per_game), one_decimal(career.points_per_game)),
        ("Rebounds", one_decimal(season.rebounds_per_game), one_decimal(career.rebounds_per_game)),
        ("Assists", one_decimal(season.assists_per_game), one_decimal(career.assists_per_game)),
        ("Steals", one_decimal(season.steals_per_game), one_decimal(career.steals_per_game)),
        ("Blocks", one_decimal(season.blocks_per_game), one_decimal(career.blocks_per_game)),
        (
            "Field goal %",
            percent_or_na(season.field_goal_percentage),
            percent_or_na(career.field_goal_percentage),
        ),
        (
            "Three point %",
            percent_or_na(season.three_point_percentage),
            percent_or_na(career.three_point_percentage),
        ),
        (
            "Free throw %",
            percent_or_na(season.free_throw_percentage),
            percent_or_na(career.free_throw_percentage),
        ),
    ]
}

/// Builds the player profile page. The slug match ignores ASCII case.
pub fn player_profile_page<R: LeagueRepository>(
    repo: &R,
    slug: &str,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let player = repo
        .player(slug)
        .ok_or_else(|| AppError::player_not_found(slug))?;
    debug!("Building player profile for {}", player.slug);

    let mut page = TextPage::new(
        page_numbers::PLAYER_PROFILE,
        "PLAYER",
        player.team.clone(),
        options.plain,
    );

    let number = player
        .number
        .map_or_else(|| NOT_AVAILABLE.to_string(), |n| format!("#{n}"));
    page.add_highlight(format!("{} {number}", player.name));
    page.add_text(format!("{} | {}", or_na(&player.position), or_na(&player.team)));

    page.add_section_header("Details");
    page.add_stat("Height", or_na(&player.height));
    page.add_stat("Weight", or_na(&player.weight));
    page.add_stat("Born", or_na(&player.birthdate));
    page.add_stat("College", or_na(&player.college));
    page.add_stat("Status", or_na(&player.status));

    let links = player.socials.links();
    if !links.is_empty() {
        page.add_section_header("Social Media");
        for (label, url) in links {
            page.add_stat(label, url);
        }
    }

    if !player.bio.trim().is_empty() {
        page.add_section_header("Biography");
        page.add_paragraph(&player.bio);
    }

    page.add_section_header("Statistics");
    page.add_text(stat_table_row("", "Season", "Career"));
    for (label, season, career) in stat_rows(&player.stats, &player.career_stats) {
        page.add_text(stat_table_row(label, &season, &career));
    }

    page.add_section_header("Recent Games");
    if player.recent_games.is_empty() {
        page.add_text("No recent games.");
    }
    for entry in &player.recent_games {
        page.add_text(format!(
            "{:<8}{:<24}{:<4}{:>4} PTS {:>3} REB {:>3} AST",
            entry.date,
            entry.opponent_name,
            entry.result,
            entry.points,
            entry.rebounds,
            entry.assists
        ));
    }

    Ok(page)
}
