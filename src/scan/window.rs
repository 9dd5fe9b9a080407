//! Shared scan skeleton: candidate split enumeration, statistic
//! evaluation, and best-split selection.

use crate::error::{BreakoutError, Result};
use std::ops::RangeInclusive;

/// A candidate split location and its scan statistic.
///
/// The split at `index` partitions a series into `series[..index]` and
/// `series[index..]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitScore {
    /// 0-based split index.
    pub index: usize,
    /// Scan statistic at this split (higher means stronger evidence).
    pub score: f64,
}

/// All candidate split indices for a series of length `n`.
///
/// A candidate leaves at least `min_size` observations on each side,
/// so the range is `min_size ..= n - min_size`. Empty when
/// `2 * min_size > n`.
pub fn candidate_splits(n: usize, min_size: usize) -> RangeInclusive<usize> {
    if min_size == 0 || n < 2 * min_size {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }
    min_size..=n - min_size
}

/// Evaluate a statistic at every candidate split, in ascending index
/// order.
///
/// A non-finite statistic is recorded as `0.0`: a degenerate candidate
/// is skipped, never fatal to the scan.
pub fn scan_splits<F>(series: &[f64], min_size: usize, score: F) -> Vec<SplitScore>
where
    F: Fn(&[f64], usize) -> f64,
{
    candidate_splits(series.len(), min_size)
        .map(|index| {
            let s = score(series, index);
            SplitScore {
                index,
                score: if s.is_finite() { s } else { 0.0 },
            }
        })
        .collect()
}

/// The highest-scoring candidate; ties resolve to the smallest index.
pub fn best_split(scores: &[SplitScore]) -> Option<SplitScore> {
    let mut best: Option<SplitScore> = None;
    for candidate in scores {
        let better = match best {
            None => true,
            Some(current) => candidate.score > current.score,
        };
        if better {
            best = Some(*candidate);
        }
    }
    best
}

/// Reject series containing NaN observations.
pub fn validate_series(series: &[f64]) -> Result<()> {
    if series.iter().any(|v| v.is_nan()) {
        return Err(BreakoutError::MissingValues);
    }
    Ok(())
}
