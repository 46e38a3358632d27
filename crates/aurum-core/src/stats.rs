//! Descriptive statistics over a price series.
//!
//! Every figure is computed independently from the unrounded data; rounding
//! via [`round2`] is cosmetic and applied only when a number is reported.
//!
//! Conventions:
//! - quantiles use linear interpolation on the ascending-sorted data
//! - mode ties break to the smallest candidate value
//! - standard deviation is the sample deviation (n - 1), 0.0 for a single
//!   observation

use serde::{Deserialize, Serialize};

use crate::PriceSeries;

/// Fixed set of descriptive statistics for one price series.
///
/// Holds unrounded values; `iqr` always equals `q3 - q1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub mode: f64,
    pub std_dev: f64,
    pub iqr: f64,
}

impl StatisticsSummary {
    /// Computes the summary, or `None` for an empty series.
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        Self::from_prices(&series.prices())
    }

    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let mut sorted = prices.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);

        Some(Self {
            mean: mean(prices),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            q1,
            median: quantile(&sorted, 0.5),
            q3,
            mode: mode(&sorted),
            std_dev: sample_std_dev(prices),
            iqr: q3 - q1,
        })
    }
}

/// Rounds to 2 decimal places, half away from zero (`f64::round` semantics).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linearly interpolated quantile over ascending-sorted input.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Most frequent value; the ascending scan keeps the smallest on ties.
fn mode(sorted: &[f64]) -> f64 {
    let mut best_value = sorted[0];
    let mut best_count = 0usize;

    let mut index = 0;
    while index < sorted.len() {
        let value = sorted[index];
        let mut count = 1;
        while index + count < sorted.len() && sorted[index + count] == value {
            count += 1;
        }
        if count > best_count {
            best_count = count;
            best_value = value;
        }
        index += count;
    }

    best_value
}

/// Sample standard deviation (n - 1); 0.0 for a single observation.
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn empty_input_yields_no_summary() {
        assert!(StatisticsSummary::from_prices(&[]).is_none());
    }

    #[test]
    fn three_point_series_matches_known_figures() {
        let summary =
            StatisticsSummary::from_prices(&[100.0, 200.0, 300.0]).expect("non-empty input");

        assert!(close(summary.mean, 200.0));
        assert!(close(summary.min, 100.0));
        assert!(close(summary.max, 300.0));
        assert!(close(summary.q1, 150.0));
        assert!(close(summary.median, 200.0));
        assert!(close(summary.q3, 250.0));
        assert!(close(summary.iqr, 100.0));
        assert!(close(summary.std_dev, 100.0));
    }

    #[test]
    fn mode_picks_the_most_frequent_value() {
        let summary = StatisticsSummary::from_prices(&[5.0, 5.0, 7.0]).expect("non-empty input");
        assert!(close(summary.mode, 5.0));
    }

    #[test]
    fn mode_ties_break_to_the_smallest_value() {
        let summary =
            StatisticsSummary::from_prices(&[9.0, 3.0, 9.0, 3.0, 5.0]).expect("non-empty input");
        assert!(close(summary.mode, 3.0));
    }

    #[test]
    fn single_observation_degenerates_cleanly() {
        let summary = StatisticsSummary::from_prices(&[269.04]).expect("non-empty input");

        assert!(close(summary.mean, 269.04));
        assert!(close(summary.min, 269.04));
        assert!(close(summary.max, 269.04));
        assert!(close(summary.median, 269.04));
        assert!(close(summary.iqr, 0.0));
        assert!(close(summary.std_dev, 0.0));
    }

    #[test]
    fn quartiles_stay_within_the_extrema() {
        let prices = [268.17, 269.04, 270.55, 265.2, 272.0, 268.17, 271.3];
        let summary = StatisticsSummary::from_prices(&prices).expect("non-empty input");

        assert!(summary.min <= summary.q1);
        assert!(summary.q1 <= summary.median);
        assert!(summary.median <= summary.q3);
        assert!(summary.q3 <= summary.max);
        assert!(close(summary.iqr, summary.q3 - summary.q1));
    }

    #[test]
    fn order_of_input_does_not_change_the_summary() {
        let ascending = StatisticsSummary::from_prices(&[1.0, 2.0, 3.0, 4.0]).expect("non-empty");
        let shuffled = StatisticsSummary::from_prices(&[3.0, 1.0, 4.0, 2.0]).expect("non-empty");
        assert_eq!(ascending, shuffled);
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so the rule is pinned precisely.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(269.0449), 269.04);
        assert_eq!(round2(200.0), 200.0);
    }
}
