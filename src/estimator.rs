//! Matchup power index and win probability.
//!
//! A team's power index is its winning percentage (scaled to 0-100) plus a
//! crude point differential estimated from scoring and field goal accuracy.
//! The two indices are then split proportionally into percentages.
//!
//! The weighting between the two terms is a fixed heuristic, not a fitted
//! model.

use crate::constants::estimator::{
    NEUTRAL_POWER_INDEX, NEUTRAL_PROBABILITY_PERCENT, OPPONENT_PPG_FG_FACTOR,
};
use crate::data::Team;

/// The slice of a team's season snapshot the estimator needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupRecord {
    pub wins: u32,
    pub losses: u32,
    pub points_per_game: f64,
    /// 0-1 fraction. `None`, zero, negative or non-finite values mean "unknown".
    pub field_goal_percentage: Option<f64>,
}

impl MatchupRecord {
    pub fn new(
        wins: u32,
        losses: u32,
        points_per_game: f64,
        field_goal_percentage: Option<f64>,
    ) -> Self {
        Self {
            wins,
            losses,
            points_per_game,
            field_goal_percentage,
        }
    }
}

impl From<&Team> for MatchupRecord {
    fn from(team: &Team) -> Self {
        Self {
            wins: team.wins,
            losses: team.losses,
            points_per_game: team.stats.points_per_game,
            field_goal_percentage: team.stats.field_goal_percentage,
        }
    }
}

/// Complementary home/away win chances in percent, full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinProbability {
    pub home_percent: f64,
    pub away_percent: f64,
}

impl WinProbability {
    fn neutral() -> Self {
        Self {
            home_percent: NEUTRAL_PROBABILITY_PERCENT,
            away_percent: NEUTRAL_PROBABILITY_PERCENT,
        }
    }

    /// Same split seen from the other bench.
    pub fn swapped(self) -> Self {
        Self {
            home_percent: self.away_percent,
            away_percent: self.home_percent,
        }
    }
}

/// Scoring margin estimate. Zero whenever field goal percentage is unusable.
pub fn point_differential(record: &MatchupRecord) -> f64 {
    match record.field_goal_percentage {
        Some(fgp) if fgp.is_finite() && fgp > 0.0 => {
            let estimated_opponent_ppg = record.points_per_game / (fgp * OPPONENT_PPG_FG_FACTOR);
            record.points_per_game - estimated_opponent_ppg
        }
        _ => 0.0,
    }
}

/// Power index of one team. A team with no games played sits at the neutral 50.
pub fn power_index(record: &MatchupRecord) -> f64 {
    if record.wins == 0 && record.losses == 0 {
        return NEUTRAL_POWER_INDEX;
    }
    let wins = f64::from(record.wins);
    let win_rate = wins / (wins + f64::from(record.losses));
    win_rate * 100.0 + point_differential(record)
}

/// Splits the two power indices into percentages that sum to 100.
///
/// Negative indices are floored at zero so both values stay within 0..=100.
/// When neither side has a positive index the split is 50/50.
pub fn win_probability(home: &MatchupRecord, away: &MatchupRecord) -> WinProbability {
    let home_power = power_index(home).max(0.0);
    let away_power = power_index(away).max(0.0);
    let total = home_power + away_power;

    // NaN inputs also land here
    if !total.is_finite() || total <= 0.0 {
        return WinProbability::neutral();
    }

    WinProbability {
        home_percent: home_power / total * 100.0,
        away_percent: away_power / total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ateneo() -> MatchupRecord {
        MatchupRecord::new(11, 3, 78.5, Some(0.44))
    }

    fn la_salle() -> MatchupRecord {
        MatchupRecord::new(10, 4, 82.1, Some(0.45))
    }

    #[test]
    fn test_point_differential_from_field_goal_rate() {
        // 78.5 - 78.5 / 0.88
        let diff = point_differential(&ateneo());
        assert!((diff - (-10.704545)).abs() < 1e-5, "got {diff}");
    }

    #[test]
    fn test_point_differential_unknown_fg() {
        for fgp in [None, Some(0.0), Some(-0.3), Some(f64::NAN), Some(f64::INFINITY)] {
            let record = MatchupRecord::new(5, 5, 120.0, fgp);
            assert_eq!(point_differential(&record), 0.0, "fgp {fgp:?}");
        }
    }

    #[test]
    fn test_power_index_combines_terms() {
        let power = power_index(&ateneo());
        assert!((power - 67.866883).abs() < 1e-5, "got {power}");

        let power = power_index(&la_salle());
        assert!((power - 62.306349).abs() < 1e-5, "got {power}");
    }

    #[test]
    fn test_power_index_without_games_is_neutral() {
        let record = MatchupRecord::new(0, 0, 95.0, Some(0.6));
        assert_eq!(power_index(&record), 50.0);
    }

    #[test]
    fn test_scenario_ateneo_vs_la_salle() {
        let result = win_probability(&ateneo(), &la_salle());
        assert_eq!(format!("{:.1}", result.home_percent), "52.1");
        assert_eq!(format!("{:.1}", result.away_percent), "47.9");
        assert!((result.home_percent + result.away_percent - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_both_teams_without_games_split_evenly() {
        let home = MatchupRecord::new(0, 0, 60.0, Some(0.3));
        let away = MatchupRecord::new(0, 0, 99.0, None);
        let result = win_probability(&home, &away);
        assert_eq!(result.home_percent, 50.0);
        assert_eq!(result.away_percent, 50.0);
    }

    #[test]
    fn test_missing_fg_uses_win_rate_only() {
        let home = MatchupRecord::new(9, 3, 200.0, Some(0.0));
        let away = MatchupRecord::new(6, 6, 50.0, Some(0.0));
        let result = win_probability(&home, &away);
        // 75 vs 50
        assert!((result.home_percent - 60.0).abs() < 1e-9);
        assert!((result.away_percent - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_total_is_neutral() {
        // Dreadful shooting drives both indices negative
        let home = MatchupRecord::new(0, 10, 80.0, Some(0.1));
        let away = MatchupRecord::new(1, 9, 80.0, Some(0.1));
        assert_eq!(win_probability(&home, &away), WinProbability::neutral());
    }

    #[test]
    fn test_negative_index_is_floored() {
        let home = MatchupRecord::new(0, 10, 80.0, Some(0.1));
        let away = MatchupRecord::new(5, 5, 70.0, None);
        let result = win_probability(&home, &away);
        assert_eq!(result.home_percent, 0.0);
        assert_eq!(result.away_percent, 100.0);
    }

    #[test]
    fn test_extra_win_while_floored_leaves_split_unchanged() {
        let away = la_salle();
        let winless = MatchupRecord::new(0, 10, 78.5, Some(0.44));
        let one_win = MatchupRecord::new(1, 10, 78.5, Some(0.44));

        assert!(power_index(&winless) < power_index(&one_win));
        assert!(power_index(&one_win) < 0.0);

        // Both indices floor to zero, so the extra win does not move the split
        let before = win_probability(&winless, &away);
        let after = win_probability(&one_win, &away);
        assert_eq!(before, after);
        assert_eq!(after.home_percent, 0.0);
        assert_eq!(after.away_percent, 100.0);

        // The next win lifts the index above zero and the chance with it
        let two_wins = MatchupRecord::new(2, 10, 78.5, Some(0.44));
        assert!(power_index(&two_wins) > 0.0);
        assert!(win_probability(&two_wins, &away).home_percent > after.home_percent);
    }

    #[test]
    fn test_swapping_teams_swaps_result() {
        let forward = win_probability(&ateneo(), &la_salle());
        let backward = win_probability(&la_salle(), &ateneo());
        assert_eq!(forward.swapped(), backward);
    }

    #[test]
    fn test_from_team() {
        let team = crate::testing_utils::TestDataBuilder::create_team("eagles", "Blue Eagles", 11, 3);
        let record = MatchupRecord::from(&team);
        assert_eq!(record.wins, 11);
        assert_eq!(record.losses, 3);
        assert_eq!(record.points_per_game, team.stats.points_per_game);
        assert_eq!(record.field_goal_percentage, team.stats.field_goal_percentage);
    }
}
