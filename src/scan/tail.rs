//! Tail scanners: locating the split with the largest extremal-quantile
//! deviation between the two sides.

use super::window::{best_split, scan_splits, validate_series, SplitScore};
use crate::error::{BreakoutError, Result};
use crate::utils::stats::{quantile, std_dev};
use statrs::distribution::{ContinuousCDF, Normal};

const DEGENERATE_SCALE: f64 = 1e-10;

/// EDM Tail: the split with the largest gap between the `quant`
/// empirical quantiles of its two sides.
///
/// The statistic is `|Q_right(quant) - Q_left(quant)| / (s * z)` where
/// `s` is the sample standard deviation of the whole series and `z` is
/// the standard normal quantile at `1 - alpha / 2`. `alpha` scales the
/// statistic rather than gating it: the best split is returned even
/// when insignificant, and a score above `1.0` means the quantile gap
/// exceeds the critical value at that level. Ties resolve to the
/// smallest index.
///
/// Returns `None` when no candidate split exists
/// (`2 * min_size > series.len()`).
pub fn edm_tail(
    series: &[f64],
    min_size: usize,
    alpha: f64,
    quant: f64,
) -> Result<Option<SplitScore>> {
    if min_size == 0 {
        return Err(BreakoutError::InvalidParameter(
            "min_size must be at least 1".to_string(),
        ));
    }
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(BreakoutError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    if !quant.is_finite() || quant <= 0.0 || quant >= 1.0 {
        return Err(BreakoutError::InvalidParameter(format!(
            "quant must be in (0, 1), got {quant}"
        )));
    }
    validate_series(series)?;

    let normal = Normal::new(0.0, 1.0).unwrap();
    let crit = normal.inverse_cdf(1.0 - alpha / 2.0);
    let denom = std_dev(series) * crit;

    // Zero-variance series: every candidate is degenerate and scores 0,
    // the leftmost is still reported as best.
    let scores = if denom.is_finite() && denom > DEGENERATE_SCALE {
        scan_splits(series, min_size, |s, i| {
            (quantile(&s[i..], quant) - quantile(&s[..i], quant)).abs() / denom
        })
    } else {
        scan_splits(series, min_size, |_, _| 0.0)
    };

    Ok(best_split(&scores))
}

/// EDM X: simplified tail scanner whose quantile is derived from the
/// significance level (`quant = 1 - alpha`).
///
/// Small `alpha` probes deeper into the tail. Selection and tie-break
/// behavior are identical to [`edm_tail`].
pub fn edm_x(series: &[f64], min_size: usize, alpha: f64) -> Result<Option<SplitScore>> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(BreakoutError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    edm_tail(series, min_size, alpha, 1.0 - alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spike_series() -> Vec<f64> {
        vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0]
    }

    #[test]
    fn tail_isolates_the_final_extreme() {
        let best = edm_tail(&spike_series(), 1, 0.05, 0.95).unwrap().unwrap();
        assert_eq!(best.index, 8);
        assert!(best.score > 0.0);
    }

    #[test]
    fn tail_best_score_dominates_other_candidates() {
        let series = spike_series();
        let best = edm_tail(&series, 1, 0.05, 0.95).unwrap().unwrap();
        // Recompute the statistic by hand at a non-best split
        let normal = Normal::new(0.0, 1.0).unwrap();
        let denom = std_dev(&series) * normal.inverse_cdf(1.0 - 0.05 / 2.0);
        let at_4 = (quantile(&series[4..], 0.95) - quantile(&series[..4], 0.95)).abs() / denom;
        assert!(best.score > at_4);
    }

    #[test]
    fn x_matches_tail_with_derived_quantile() {
        let series = spike_series();
        let x = edm_x(&series, 1, 0.05).unwrap().unwrap();
        let tail = edm_tail(&series, 1, 0.05, 0.95).unwrap().unwrap();
        assert_eq!(x.index, tail.index);
        assert_relative_eq!(x.score, tail.score, epsilon = 1e-12);
        assert_eq!(x.index, 8);
    }

    #[test]
    fn tail_tie_resolves_to_lowest_index() {
        // Median gap is 10 at every candidate split
        let series = vec![0.0, 0.0, 10.0, 10.0];
        let best = edm_tail(&series, 1, 0.05, 0.5).unwrap().unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn tail_short_series_is_none() {
        assert!(edm_tail(&[1.0, 2.0, 3.0], 2, 0.05, 0.9).unwrap().is_none());
        assert!(edm_tail(&[], 1, 0.05, 0.9).unwrap().is_none());
        assert!(edm_x(&[5.0], 1, 0.05).unwrap().is_none());
    }

    #[test]
    fn tail_constant_series_scores_zero() {
        let series = vec![5.0; 10];
        let best = edm_tail(&series, 2, 0.05, 0.9).unwrap().unwrap();
        assert_eq!(best.index, 2);
        assert_relative_eq!(best.score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn tail_smaller_alpha_shrinks_the_statistic() {
        let series = spike_series();
        let loose = edm_tail(&series, 1, 0.10, 0.95).unwrap().unwrap();
        let strict = edm_tail(&series, 1, 0.01, 0.95).unwrap().unwrap();
        assert_eq!(loose.index, strict.index);
        assert!(strict.score < loose.score);
    }

    #[test]
    fn tail_invalid_parameters() {
        let series = spike_series();
        assert!(edm_tail(&series, 0, 0.05, 0.9).is_err());
        assert!(edm_tail(&series, 1, 0.0, 0.9).is_err());
        assert!(edm_tail(&series, 1, 1.0, 0.9).is_err());
        assert!(edm_tail(&series, 1, 0.05, 0.0).is_err());
        assert!(edm_tail(&series, 1, 0.05, 1.0).is_err());
        assert!(edm_tail(&[1.0, f64::NAN], 1, 0.05, 0.9).is_err());
        assert!(edm_x(&series, 1, -0.1).is_err());
        assert!(edm_x(&series, 0, 0.05).is_err());
    }

    #[test]
    fn tail_minimal_valid_series() {
        // min_size = 1, N = 2: exactly one candidate
        let best = edm_tail(&[0.0, 10.0], 1, 0.05, 0.5).unwrap().unwrap();
        assert_eq!(best.index, 1);
        assert!(best.score > 0.0);
    }

    #[test]
    fn tail_is_deterministic() {
        let series: Vec<f64> = (0..50).map(|i| ((i * 31) % 17) as f64).collect();
        let a = edm_tail(&series, 5, 0.05, 0.9).unwrap();
        let b = edm_tail(&series, 5, 0.05, 0.9).unwrap();
        assert_eq!(a, b);
    }
}
