//! The monotone conjugation trend statistic.
//!
//! With `N` ranks aligned to ascending x, let `p = round(N / 3)`. The
//! statistic compares the rank sum of the last `p` positions (R1) with the
//! first `p` positions (R2):
//!
//! - `difference = round(R1 - R2)`
//! - `standard_error = round((N + 0.5) * sqrt(p / 6))`
//! - `conjugation_measure = round(difference / (p * (N - p)), 2)`

use tracing::debug;

use super::rounding::RoundingMode;
use super::types::StatisticReport;
use super::MIN_PAIRS;
use crate::errors::{ConjugationError, Result};

/// Partition size `round(n / 3)`.
pub fn partition_size(n: usize, rounding: RoundingMode) -> usize {
    rounding.round(n as f64 / 3.0) as usize
}

/// Compute the statistic from ranks ordered by ascending x.
pub fn compute_statistic(ranks: &[f64], rounding: RoundingMode) -> Result<StatisticReport> {
    let n = ranks.len();
    if n < MIN_PAIRS {
        return Err(ConjugationError::sample_size(n));
    }

    let p = partition_size(n, rounding);
    if p == 0 {
        return Err(ConjugationError::domain(format!(
            "partition size is zero for {n} pairs"
        )));
    }
    if 2 * p > n {
        return Err(ConjugationError::domain(format!(
            "partitions of size {p} overlap for {n} pairs"
        )));
    }
    let denominator = p * (n - p);
    if denominator == 0 {
        return Err(ConjugationError::domain(format!(
            "p * (N - p) is zero for p = {p}, N = {n}"
        )));
    }

    let trailing_rank_sum: f64 = ranks[n - p..].iter().sum();
    let leading_rank_sum: f64 = ranks[..p].iter().sum();

    let difference = rounding.round_to_int(trailing_rank_sum - leading_rank_sum);
    let standard_error = rounding.round_to_int((n as f64 + 0.5) * (p as f64 / 6.0).sqrt());
    let conjugation_measure = rounding.round_decimals(difference as f64 / denominator as f64, 2);

    debug!(
        n,
        p,
        trailing_rank_sum,
        leading_rank_sum,
        difference,
        standard_error,
        conjugation_measure,
        "computed conjugation statistic"
    );

    Ok(StatisticReport {
        n,
        partition_size: p,
        trailing_rank_sum,
        leading_rank_sum,
        difference,
        standard_error,
        conjugation_measure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(values: &[f64]) -> Vec<f64> {
        values.to_vec()
    }

    #[test]
    fn test_partition_size() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(partition_size(9, mode), 3);
        assert_eq!(partition_size(10, mode), 3);
        assert_eq!(partition_size(11, mode), 4);
        assert_eq!(partition_size(12, mode), 4);
        assert_eq!(partition_size(100, mode), 33);
    }

    #[test]
    fn test_worked_example() {
        let r = ranks(&[3.0, 7.0, 1.0, 9.0, 2.0, 8.0, 4.0, 6.0, 5.0]);
        let report = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        assert_eq!(report.partition_size, 3);
        assert_eq!(report.trailing_rank_sum, 15.0);
        assert_eq!(report.leading_rank_sum, 11.0);
        assert_eq!(report.summary(), (4, 7, 0.22));
    }

    #[test]
    fn test_perfect_increasing_trend() {
        let r: Vec<f64> = (1..=9).map(f64::from).collect();
        let report = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        // R1 = 7+8+9, R2 = 1+2+3
        assert_eq!(report.difference, 18);
        assert_eq!(report.conjugation_measure, 1.0);
    }

    #[test]
    fn test_perfect_decreasing_trend() {
        let r: Vec<f64> = (1..=9).rev().map(f64::from).collect();
        let report = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        assert_eq!(report.difference, -18);
        assert_eq!(report.conjugation_measure, -1.0);
    }

    #[test]
    fn test_half_difference_depends_on_rounding() {
        // R1 - R2 = 2.5
        let r = ranks(&[1.0, 2.0, 3.0, 6.0, 4.0, 5.0, 7.0, 1.5, 1.0]);
        let even = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        let away = compute_statistic(&r, RoundingMode::HalfAwayFromZero).unwrap();
        assert_eq!(even.trailing_rank_sum - even.leading_rank_sum, 3.5);
        assert_eq!(even.difference, 4);
        assert_eq!(away.difference, 4);

        let r = ranks(&[1.0, 2.0, 3.0, 6.0, 4.0, 5.0, 7.0, 1.5, 0.0]);
        let even = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        let away = compute_statistic(&r, RoundingMode::HalfAwayFromZero).unwrap();
        assert_eq!(even.trailing_rank_sum - even.leading_rank_sum, 2.5);
        assert_eq!(even.difference, 2);
        assert_eq!(away.difference, 3);
    }

    #[test]
    fn test_standard_error_grows_with_n() {
        let r: Vec<f64> = (1..=30).map(f64::from).collect();
        let report = compute_statistic(&r, RoundingMode::HalfEven).unwrap();
        // p = 10, (30.5) * sqrt(10 / 6) = 39.37...
        assert_eq!(report.partition_size, 10);
        assert_eq!(report.standard_error, 39);
    }

    #[test]
    fn test_too_few_ranks() {
        let r: Vec<f64> = (1..=8).map(f64::from).collect();
        let err = compute_statistic(&r, RoundingMode::HalfEven).unwrap_err();
        assert!(matches!(
            err,
            ConjugationError::SampleSize {
                found: 8,
                minimum: 9
            }
        ));
    }

    #[test]
    fn test_partitions_never_overlap_from_minimum_upward() {
        for n in MIN_PAIRS..500 {
            let p = partition_size(n, RoundingMode::HalfEven);
            assert!(p >= 1 && 2 * p <= n, "n = {n}, p = {p}");
        }
    }
}
