//! Breakout scan statistics.
//!
//! Four scanner variants over one shared candidate-split skeleton.
//! Every candidate split leaves at least `min_size` observations on
//! each side; each variant supplies its own statistic and selection
//! policy:
//!
//! - [`edm_multi`]: polynomial trend-break gain, flag everything above
//!   an absolute penalty `beta`
//! - [`edm_percent`]: same statistic, flag the top `percent`% by rank
//! - [`edm_tail`]: extremal-quantile gap, single best split
//! - [`edm_x`]: tail scanner with the quantile derived from `alpha`
//!
//! # Example
//!
//! ```
//! use edm_breakout::scan::edm_multi;
//!
//! // Level shift at index 20
//! let mut series = vec![0.0; 20];
//! series.extend(vec![10.0; 20]);
//!
//! let flags = edm_multi(&series, 5, 0.95, 0).unwrap();
//! assert_eq!(flags, vec![20]);
//! ```

pub mod segment;
pub mod tail;
pub mod window;

pub use segment::{
    breakout_medians, edm_multi, edm_percent, segment_scores, split_gain, SegmentConfig,
};
pub use tail::{edm_tail, edm_x};
pub use window::{best_split, candidate_splits, scan_splits, validate_series, SplitScore};
