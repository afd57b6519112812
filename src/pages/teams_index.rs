use super::formatting::truncate;
use super::{DisplayOptions, TextPage};
use crate::constants::page_numbers;
use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data::LeagueRepository;
use crate::error::AppError;

/// Every team in standings order, with the slug `--team` takes.
pub fn teams_index_page<R: LeagueRepository>(repo: &R, options: &DisplayOptions) -> Result<TextPage, AppError> {
    let mut page = TextPage::new(page_numbers::TEAMS_INDEX, "TEAMS", "Meet the Teams", options.plain);

    let standings = repo.standings();
    if standings.is_empty() {
        page.add_error_message("No teams available.");
        return Ok(page);
    }

    page.add_text(format!("{:<TEAM_NAME_WIDTH$}{:>7}  {}", "Team", "W-L", "Slug"));
    for team in standings {
        page.add_text(format!(
            "{:<TEAM_NAME_WIDTH$}{:>7}  {}",
            truncate(&team.name, TEAM_NAME_WIDTH - 1),
            team.record(),
            team.slug
        ));
    }
    page.add_spacer();
    page.add_text("Open a team hub with --team <slug>.");

    Ok(page)
}
