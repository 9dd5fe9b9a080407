//! Segment scanners: detection of polynomial trend breaks with an
//! absolute penalty (Multi) or a rank threshold (Percent).

use super::window::{scan_splits, validate_series, SplitScore};
use crate::error::{BreakoutError, Result};
use crate::utils::polyfit::polyfit_rss;
use crate::utils::stats::median;

const DEGENERATE_RSS: f64 = 1e-10;

/// Configuration shared by the segment scanners.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Minimum observations on each side of a candidate split.
    pub min_size: usize,
    /// Polynomial trend order fitted to each side (0 = mean shift,
    /// 1 = linear trend).
    pub degree: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            min_size: 30,
            degree: 0,
        }
    }
}

impl SegmentConfig {
    /// Set the minimum segment size.
    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the polynomial trend degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(BreakoutError::InvalidParameter(
                "min_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Proportional residual reduction from fitting each side separately.
///
/// `gain = (RSS_total - RSS_left - RSS_right) / RSS_total`, clamped to
/// `[0, 1]`, where each RSS is the residual of a degree-`degree`
/// least-squares polynomial fit. A series with no residual variation
/// around its own fit scores `0.0` at every split.
pub fn split_gain(series: &[f64], split: usize, degree: usize) -> f64 {
    let total = polyfit_rss(series, degree);
    if total < DEGENERATE_RSS {
        return 0.0;
    }
    let left = polyfit_rss(&series[..split], degree);
    let right = polyfit_rss(&series[split..], degree);
    ((total - left - right) / total).clamp(0.0, 1.0)
}

/// Score every candidate split under the segment-gain statistic.
///
/// Returns the full (index, score) list in ascending index order; empty
/// when no candidate split exists.
pub fn segment_scores(series: &[f64], config: &SegmentConfig) -> Result<Vec<SplitScore>> {
    config.validate()?;
    validate_series(series)?;
    let degree = config.degree;
    Ok(scan_splits(series, config.min_size, |s, i| {
        split_gain(s, i, degree)
    }))
}

/// EDM Multi: flag every split whose trend-break gain exceeds `beta`.
///
/// `beta` is an absolute penalty on the gain statistic; larger values
/// are stricter and never flag more splits. Flagged indices are
/// returned in ascending order and may be empty.
pub fn edm_multi(series: &[f64], min_size: usize, beta: f64, degree: usize) -> Result<Vec<usize>> {
    if !beta.is_finite() || beta <= 0.0 {
        return Err(BreakoutError::InvalidParameter(format!(
            "beta must be positive and finite, got {beta}"
        )));
    }
    let config = SegmentConfig::default().min_size(min_size).degree(degree);
    let scores = segment_scores(series, &config)?;
    Ok(scores
        .iter()
        .filter(|s| s.score > beta)
        .map(|s| s.index)
        .collect())
}

/// EDM Percent: flag the top `percent`% of candidate splits by gain.
///
/// With `m` candidates the cutoff is the `ceil(m * percent / 100)`-th
/// largest gain; every candidate at or above it is flagged, so ties at
/// the cutoff may flag a few more. Zero-gain splits are never flagged.
/// This rank-based threshold trades absolute calibration for a relative
/// one, which suits series whose noise scale is unknown.
pub fn edm_percent(
    series: &[f64],
    min_size: usize,
    percent: f64,
    degree: usize,
) -> Result<Vec<usize>> {
    if !percent.is_finite() || percent <= 0.0 || percent > 100.0 {
        return Err(BreakoutError::InvalidParameter(format!(
            "percent must be in (0, 100], got {percent}"
        )));
    }
    let config = SegmentConfig::default().min_size(min_size).degree(degree);
    let scores = segment_scores(series, &config)?;
    if scores.is_empty() {
        return Ok(Vec::new());
    }

    let m = scores.len();
    let k = ((m as f64 * percent / 100.0).ceil() as usize).clamp(1, m);
    let mut gains: Vec<f64> = scores.iter().map(|s| s.score).collect();
    gains.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let cutoff = gains[k - 1];

    Ok(scores
        .iter()
        .filter(|s| s.score >= cutoff && s.score > 0.0)
        .map(|s| s.index)
        .collect())
}

/// Piecewise-median trend from detected breakout locations.
///
/// Each segment between consecutive breakouts, plus the leading and
/// trailing segments, is replaced by its median. This is the
/// de-trending step used when breakout detection feeds downstream
/// anomaly detection. `breakouts` must be ascending, as returned by
/// [`edm_multi`] and [`edm_percent`].
pub fn breakout_medians(series: &[f64], breakouts: &[usize]) -> Vec<f64> {
    let n = series.len();
    let mut trend = Vec::with_capacity(n);
    let mut prev = 0;
    for &loc in breakouts.iter().chain(std::iter::once(&n)) {
        let loc = loc.min(n);
        if loc > prev {
            let med = median(&series[prev..loc]);
            trend.extend(std::iter::repeat(med).take(loc - prev));
            prev = loc;
        }
    }
    trend
}
