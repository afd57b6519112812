use league_hub::estimator::{MatchupRecord, point_differential, power_index, win_probability};
use proptest::prelude::*;

/// Field goal rates across the whole `(0, 1]` range, plus the unknown forms.
fn field_goal_rate_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (0.01..=1.0f64).prop_map(Some),
    ]
}

fn record_strategy() -> impl Strategy<Value = MatchupRecord> {
    (
        0u32..40,
        0u32..40,
        40.0..110.0f64,
        field_goal_rate_strategy(),
    )
        .prop_map(|(wins, losses, ppg, fgp)| MatchupRecord::new(wins, losses, ppg, fgp))
}

proptest! {
    #[test]
    fn probabilities_always_sum_to_one_hundred(home in record_strategy(), away in record_strategy()) {
        let result = win_probability(&home, &away);
        prop_assert!((result.home_percent + result.away_percent - 100.0).abs() < 1e-6);
        prop_assert!((0.0..=100.0).contains(&result.home_percent));
        prop_assert!((0.0..=100.0).contains(&result.away_percent));
    }

    #[test]
    fn teams_without_games_split_evenly(
        ppg in 40.0..110.0f64,
        fgp in field_goal_rate_strategy(),
    ) {
        let record = MatchupRecord::new(0, 0, ppg, fgp);
        let result = win_probability(&record, &record);
        prop_assert_eq!(result.home_percent, 50.0);
        prop_assert_eq!(result.away_percent, 50.0);
    }

    #[test]
    fn zero_field_goal_rate_uses_win_rate_only(
        home_wins in 0u32..30,
        home_losses in 1u32..30,
        away_wins in 0u32..30,
        away_losses in 1u32..30,
        ppg in 40.0..110.0f64,
    ) {
        let home = MatchupRecord::new(home_wins, home_losses, ppg, Some(0.0));
        let away = MatchupRecord::new(away_wins, away_losses, ppg, Some(0.0));
        prop_assert_eq!(point_differential(&home), 0.0);

        let home_rate = f64::from(home_wins) / f64::from(home_wins + home_losses) * 100.0;
        let away_rate = f64::from(away_wins) / f64::from(away_wins + away_losses) * 100.0;
        let result = win_probability(&home, &away);
        if home_rate + away_rate > 0.0 {
            let expected = home_rate / (home_rate + away_rate) * 100.0;
            prop_assert!((result.home_percent - expected).abs() < 1e-9);
        } else {
            prop_assert_eq!(result.home_percent, 50.0);
        }
    }

    #[test]
    fn more_home_wins_never_lower_home_chances(
        home_wins in 0u32..20,
        home_losses in 1u32..20,
        home_ppg in 40.0..110.0f64,
        home_fgp in field_goal_rate_strategy(),
        away in record_strategy(),
    ) {
        let before = MatchupRecord::new(home_wins, home_losses, home_ppg, home_fgp);
        let after = MatchupRecord::new(home_wins + 1, home_losses, home_ppg, home_fgp);
        prop_assert!(power_index(&after) > power_index(&before));

        let chance_before = win_probability(&before, &away).home_percent;
        let chance_after = win_probability(&after, &away).home_percent;
        prop_assert!(chance_after >= chance_before);

        // Strict once the improved side and the opponent both carry a positive index.
        // Below zero an index floors at 0 and the extra win cannot show.
        if power_index(&after) > 0.0 && power_index(&away) > 0.0 {
            prop_assert!(
                chance_after > chance_before,
                "{chance_before} -> {chance_after}"
            );
        }
    }

    #[test]
    fn swapping_sides_swaps_probabilities(home in record_strategy(), away in record_strategy()) {
        let forward = win_probability(&home, &away);
        let backward = win_probability(&away, &home);
        prop_assert_eq!(forward.home_percent, backward.away_percent);
        prop_assert_eq!(forward.away_percent, backward.home_percent);
    }
}

#[test]
fn test_classic_rivalry_scenario() {
    let home = MatchupRecord::new(11, 3, 78.5, Some(0.44));
    let away = MatchupRecord::new(10, 4, 82.1, Some(0.45));
    let result = win_probability(&home, &away);
    assert_eq!(format!("{:.1}", result.home_percent), "52.1");
    assert_eq!(format!("{:.1}", result.away_percent), "47.9");
}

#[test]
fn test_missing_home_field_goal_rate_zeroes_differential() {
    let with_rate = MatchupRecord::new(8, 4, 80.0, Some(0.4));
    let without_rate = MatchupRecord::new(8, 4, 80.0, None);
    assert_eq!(point_differential(&without_rate), 0.0);
    assert!((power_index(&without_rate) - 200.0 / 3.0).abs() < 1e-9);
    assert!(power_index(&with_rate) < power_index(&without_rate));
}
