//! # edm-breakout
//!
//! Breakout (change-point) detection for real-valued series in the
//! style of the EDM family: four scanner variants over one shared
//! candidate-split skeleton.
//!
//! - [`edm_multi`] / [`edm_percent`] flag every split where a
//!   degree-parameterized polynomial trend breaks, thresholded by an
//!   absolute penalty or by rank.
//! - [`edm_tail`] / [`edm_x`] locate the single split with the largest
//!   extremal-quantile deviation.
//!
//! All operations are pure functions over an immutable `&[f64]` series
//! with 0-based indices, deterministic, and safe to call concurrently.
//! A series too short to contain any valid split yields an empty
//! result rather than an error.
//!
//! # Example
//!
//! ```
//! use edm_breakout::{edm_multi, edm_tail};
//!
//! let mut series = vec![1.0; 8];
//! series.push(100.0);
//!
//! // No sustained level shift, but a strong tail deviation at the end.
//! assert!(edm_multi(&series, 3, 0.95, 0).unwrap().is_empty());
//! let best = edm_tail(&series, 1, 0.05, 0.95).unwrap().unwrap();
//! assert_eq!(best.index, 8);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod scan;
pub mod utils;

pub use error::{BreakoutError, Result};
pub use scan::{edm_multi, edm_percent, edm_tail, edm_x, SplitScore};

pub mod prelude {
    pub use crate::error::{BreakoutError, Result};
    pub use crate::scan::{
        breakout_medians, edm_multi, edm_percent, edm_tail, edm_x, SegmentConfig, SplitScore,
    };
}
