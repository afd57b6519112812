use super::formatting::{format_article_date, html_to_paragraphs};
use super::{DisplayOptions, TextPage};
use crate::constants::limits::FEATURED_ARTICLES;
use crate::constants::page_numbers;
use crate::data::{Article, LeagueRepository};
use crate::error::AppError;
use tracing::debug;

/// All articles, newest first.
pub fn articles_newest_first<R: LeagueRepository>(repo: &R) -> Vec<&Article> {
    let mut articles: Vec<&Article> = repo.articles().iter().collect();
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

fn add_article_summary(page: &mut TextPage, article: &Article, options: &DisplayOptions) {
    page.add_highlight(article.title.clone());
    page.add_text(format!(
        "{} • {} • {}",
        article.category,
        format_article_date(&article.date, &options.offset),
        article.slug
    ));
    page.add_paragraph(&article.summary);
}

/// News index: the newest articles are featured, the rest follow.
pub fn news_list_page<R: LeagueRepository>(repo: &R, options: &DisplayOptions) -> Result<TextPage, AppError> {
    let mut page = TextPage::new(page_numbers::NEWS, "NEWS", "The UAAP Bulletin", options.plain);

    let articles = articles_newest_first(repo);
    if articles.is_empty() {
        page.add_error_message("No news articles available.");
        return Ok(page);
    }

    let split = articles.len().min(FEATURED_ARTICLES);
    let (featured, more) = articles.split_at(split);
    debug!("News list: {} featured, {} more", featured.len(), more.len());

    page.add_section_header("Featured");
    for (index, article) in featured.iter().enumerate() {
        if index > 0 {
            page.add_spacer();
        }
        add_article_summary(&mut page, article, options);
    }

    if !more.is_empty() {
        page.add_section_header("More News");
        for (index, article) in more.iter().enumerate() {
            if index > 0 {
                page.add_spacer();
            }
            add_article_summary(&mut page, article, options);
        }
    }

    Ok(page)
}

/// Full article with its HTML body rendered as plain paragraphs.
pub fn article_page<R: LeagueRepository>(
    repo: &R,
    slug: &str,
    options: &DisplayOptions,
) -> Result<TextPage, AppError> {
    let article = repo
        .article(slug)
        .ok_or_else(|| AppError::article_not_found(slug))?;

    let mut page = TextPage::new(
        page_numbers::ARTICLE,
        "NEWS",
        article.category.to_string(),
        options.plain,
    );

    page.add_highlight(article.title.clone());
    page.add_text(format!(
        "By {} • {}",
        article.author,
        format_article_date(&article.date, &options.offset)
    ));
    page.add_spacer();
    page.add_paragraph(&article.summary);

    for paragraph in html_to_paragraphs(&article.content) {
        page.add_spacer();
        page.add_paragraph(&paragraph);
    }

    let team = article
        .related_team
        .as_deref()
        .map(|slug| repo.team(slug).map_or(slug, |t| t.name.as_str()));
    let player = article
        .related_player
        .as_deref()
        .map(|slug| repo.player(slug).map_or(slug, |p| p.name.as_str()));
    if team.is_some() || player.is_some() {
        page.add_section_header("Related");
        if let Some(team) = team {
            page.add_stat("Team", team);
        }
        if let Some(player) = player {
            page.add_stat("Player", player);
        }
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArticleCategory, LeagueData};
    use crate::pages::PageRow;
    use crate::testing_utils::TestDataBuilder;

    fn league(count: usize) -> LeagueData {
        let articles = (0..count)
            .map(|i| {
                TestDataBuilder::create_article(
                    &format!("story-{i}"),
                    &format!("Story {i}"),
                    ArticleCategory::LeagueNews,
                    &format!("2025-10-{:02}T10:00:00Z", 10 + i),
                )
            })
            .collect();
        LeagueData::new(vec![], vec![], vec![], articles)
    }

    fn highlights(page: &TextPage) -> Vec<String> {
        page.rows()
            .iter()
            .filter_map(|row| match row {
                PageRow::Highlight(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_news_list_newest_first_with_featured_split() {
        let page = news_list_page(&league(6), &DisplayOptions::utc_plain()).unwrap();
        assert_eq!(
            highlights(&page),
            vec!["Story 5", "Story 4", "Story 3", "Story 2", "Story 1", "Story 0"]
        );
        let lines = page.plain_lines();
        let featured = lines.iter().position(|l| l == "FEATURED").unwrap();
        let more = lines.iter().position(|l| l == "MORE NEWS").unwrap();
        let story_2 = lines.iter().position(|l| l == "Story 2").unwrap();
        let story_1 = lines.iter().position(|l| l == "Story 1").unwrap();
        assert!(featured < story_2 && story_2 < more && more < story_1);
    }

    #[test]
    fn test_few_articles_are_all_featured() {
        let page = news_list_page(&league(2), &DisplayOptions::utc_plain()).unwrap();
        assert!(page.contains_text("FEATURED"));
        assert!(!page.contains_text("MORE NEWS"));
        assert!(page.contains_text("League News • October 11, 2025 • story-1"));
    }

    #[test]
    fn test_empty_news() {
        let page = news_list_page(&league(0), &DisplayOptions::utc_plain()).unwrap();
        assert!(page.has_error_messages());
    }

    #[test]
    fn test_article_page() {
        let mut article =
            TestDataBuilder::create_article("story-0", "Story 0", ArticleCategory::LeagueNews, "2025-10-10T10:00:00Z");
        article.content = "<p>First <em>para</em>.</p><p>Second &amp; last.</p>".to_string();
        article.related_team = Some("ghost-team".to_string());
        let teams = vec![TestDataBuilder::create_team("eagles", "Blue Eagles", 1, 1)];
        let league = LeagueData::new(teams, vec![], vec![], vec![article]);

        let page = article_page(&league, "story-0", &DisplayOptions::utc_plain()).unwrap();
        assert_eq!(page.subheader(), "League News");
        assert!(page.contains_text("By League Press • October 10, 2025"));
        assert!(page.contains_text("First para."));
        assert!(page.contains_text("Second & last."));
        assert!(page.contains_text("ghost-team"));
        assert!(!page.contains_text("Player"));
    }

    #[test]
    fn test_unknown_article_is_not_found() {
        let result = article_page(&league(1), "missing", &DisplayOptions::utc_plain());
        assert!(matches!(result, Err(AppError::ArticleNotFound { .. })));
    }
}
