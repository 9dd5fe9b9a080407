//! Numeric utilities shared by the scanners.

pub mod polyfit;
pub mod stats;

pub use polyfit::polyfit_rss;
pub use stats::{mean, median, quantile, std_dev, variance};
