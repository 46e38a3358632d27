//! Mathematical correctness of the descriptive statistics.

use aurum_core::{round2, StatisticsSummary};
use aurum_tests::daily_series;

#[test]
fn fixed_synthetic_series_matches_the_documented_figures() {
    let series = daily_series("2024-01-01", &[100.0, 200.0, 300.0]);
    let summary = StatisticsSummary::from_series(&series).expect("non-empty series");

    assert_eq!(round2(summary.mean), 200.0);
    assert_eq!(round2(summary.min), 100.0);
    assert_eq!(round2(summary.max), 300.0);
    assert_eq!(round2(summary.median), 200.0);
    assert_eq!(round2(summary.q1), 150.0);
    assert_eq!(round2(summary.q3), 250.0);
    assert_eq!(round2(summary.iqr), 100.0);
}

#[test]
fn quartiles_are_bounded_by_the_extrema() {
    let samples: [&[f64]; 4] = [
        &[269.04],
        &[269.04, 268.17],
        &[272.0, 265.2, 269.04, 268.17, 271.3],
        &[250.0, 250.0, 250.0, 250.0],
    ];

    for prices in samples {
        let summary = StatisticsSummary::from_prices(prices).expect("non-empty input");
        assert!(summary.min <= summary.q1, "min <= q1 for {prices:?}");
        assert!(summary.q1 <= summary.median, "q1 <= median for {prices:?}");
        assert!(summary.median <= summary.q3, "median <= q3 for {prices:?}");
        assert!(summary.q3 <= summary.max, "q3 <= max for {prices:?}");
    }
}

#[test]
fn iqr_always_equals_the_quartile_difference() {
    let samples: [&[f64]; 3] = [
        &[100.0, 200.0, 300.0],
        &[272.0, 265.2, 269.04, 268.17, 271.3, 266.6],
        &[5.0, 5.0, 7.0],
    ];

    for prices in samples {
        let summary = StatisticsSummary::from_prices(prices).expect("non-empty input");
        let difference = summary.q3 - summary.q1;
        assert!(
            (summary.iqr - difference).abs() <= 0.01,
            "iqr {} vs q3-q1 {} for {prices:?}",
            summary.iqr,
            difference
        );
    }
}

#[test]
fn mode_prefers_the_most_frequent_then_the_smallest_value() {
    let summary = StatisticsSummary::from_prices(&[5.0, 5.0, 7.0]).expect("non-empty input");
    assert_eq!(round2(summary.mode), 5.0);

    // Every value unique: the smallest wins the tie.
    let summary = StatisticsSummary::from_prices(&[7.0, 3.0, 5.0]).expect("non-empty input");
    assert_eq!(round2(summary.mode), 3.0);
}

#[test]
fn rounding_rule_is_half_away_from_zero_at_two_decimals() {
    // 0.125 and 0.375 are exactly representable, so these pin the rule.
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(-0.125), -0.13);
    assert_eq!(round2(268.174), 268.17);
    assert_eq!(round2(268.176), 268.18);
}

#[test]
fn summary_holds_unrounded_values() {
    // Rounding is cosmetic: the summary itself keeps full precision.
    let summary = StatisticsSummary::from_prices(&[1.001, 1.004]).expect("non-empty input");
    assert!((summary.mean - 1.0025).abs() < 1e-12);
    assert_eq!(round2(summary.mean), 1.0);
}

#[test]
fn empty_series_has_no_summary() {
    let series = daily_series("2024-01-01", &[]);
    assert!(StatisticsSummary::from_series(&series).is_none());
}
