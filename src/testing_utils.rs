use crate::data::models::{
    Article, ArticleCategory, Game, GameStatus, InjuryReport, Player, PlayerStats, Socials, Team,
    TeamHistory, TeamStats,
};
use chrono::{DateTime, Utc};

/// Test utilities for creating fixture records.
///
/// Dates are RFC 3339 strings; malformed fixture dates panic.
pub struct TestDataBuilder;

impl TestDataBuilder {
    fn parse_date(date: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(date)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|e| panic!("invalid fixture date '{date}': {e}"))
    }

    /// Creates a team with mid-table season stats
    pub fn create_team(slug: &str, name: &str, wins: u32, losses: u32) -> Team {
        Team {
            slug: slug.to_string(),
            name: name.to_string(),
            wins,
            losses,
            stats: TeamStats {
                points_per_game: 75.0,
                rebounds_per_game: 40.0,
                assists_per_game: 14.0,
                steals_per_game: 7.0,
                blocks_per_game: 4.0,
                field_goal_percentage: Some(0.44),
                three_point_percentage: Some(0.31),
            },
            history: vec![],
            injuries: vec![],
        }
    }

    /// Creates a team with a season history and an injury list
    pub fn create_team_with_reports(slug: &str, name: &str, wins: u32, losses: u32) -> Team {
        let mut team = Self::create_team(slug, name, wins, losses);
        team.history = vec![
            TeamHistory {
                season: "S87".to_string(),
                record: "12-2".to_string(),
                result: "Champions".to_string(),
            },
            TeamHistory {
                season: "S86".to_string(),
                record: "10-4".to_string(),
                result: "Final Four".to_string(),
            },
        ];
        team.injuries = vec![InjuryReport {
            player_name: "Injured Player".to_string(),
            status: "Out".to_string(),
            details: "Knee Injury".to_string(),
        }];
        team
    }

    pub fn create_stats(points: f64, rebounds: f64, assists: f64, fg: f64) -> PlayerStats {
        PlayerStats {
            games_played: 14,
            points_per_game: points,
            rebounds_per_game: rebounds,
            assists_per_game: assists,
            steals_per_game: 1.0,
            blocks_per_game: 0.5,
            field_goal_percentage: fg,
            three_point_percentage: 0.33,
            free_throw_percentage: 0.75,
        }
    }

    /// Creates an active player. The team display name equals the team slug.
    pub fn create_player(slug: &str, name: &str, number: Option<u32>, team_slug: &str) -> Player {
        Player {
            slug: slug.to_string(),
            name: name.to_string(),
            number,
            position: "Guard".to_string(),
            team: team_slug.to_string(),
            team_slug: team_slug.to_string(),
            height: "6'2\"".to_string(),
            weight: "180 lbs".to_string(),
            birthdate: "N/A".to_string(),
            college: "Test University".to_string(),
            status: "Active".to_string(),
            bio: String::new(),
            socials: Socials::default(),
            stats: Self::create_stats(10.0, 4.0, 3.0, 0.45),
            career_stats: Self::create_stats(9.0, 3.5, 2.5, 0.44),
            recent_games: vec![],
        }
    }

    /// Creates a player with the given season points, rebounds and assists
    pub fn create_player_with_stats(
        slug: &str,
        team_slug: &str,
        points: f64,
        rebounds: f64,
        assists: f64,
    ) -> Player {
        let mut player = Self::create_player(slug, slug, None, team_slug);
        player.stats = Self::create_stats(points, rebounds, assists, 0.45);
        player
    }

    fn create_game(id: &str, home: &str, away: &str, date: &str, status: GameStatus) -> Game {
        Game {
            id: id.to_string(),
            date: Self::parse_date(date),
            venue: "Mall of Asia Arena".to_string(),
            status,
            home_team_slug: home.to_string(),
            away_team_slug: away.to_string(),
            home_team_score: None,
            away_team_score: None,
            broadcast: None,
            live_stream_link: None,
            ticket_link: None,
        }
    }

    pub fn create_upcoming_game(id: &str, home: &str, away: &str, date: &str) -> Game {
        Self::create_game(id, home, away, date, GameStatus::Upcoming)
    }

    pub fn create_live_game(
        id: &str,
        home: &str,
        away: &str,
        date: &str,
        home_score: u32,
        away_score: u32,
    ) -> Game {
        let mut game = Self::create_game(id, home, away, date, GameStatus::Live);
        game.home_team_score = Some(home_score);
        game.away_team_score = Some(away_score);
        game
    }

    pub fn create_final_game(
        id: &str,
        home: &str,
        away: &str,
        date: &str,
        home_score: u32,
        away_score: u32,
    ) -> Game {
        let mut game = Self::create_game(id, home, away, date, GameStatus::Final);
        game.home_team_score = Some(home_score);
        game.away_team_score = Some(away_score);
        game
    }

    pub fn create_article(slug: &str, title: &str, category: ArticleCategory, date: &str) -> Article {
        Article {
            id: format!("news-{slug}"),
            slug: slug.to_string(),
            title: title.to_string(),
            summary: format!("Summary of {title}"),
            content: format!("<p>{title} body.</p>"),
            category,
            author: "League Press".to_string(),
            date: Self::parse_date(date),
            related_player: None,
            related_team: None,
        }
    }
}
