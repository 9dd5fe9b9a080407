//! Error types for the edm-breakout library.

use thiserror::Error;

/// Result type alias for breakout detection operations.
pub type Result<T> = std::result::Result<T, BreakoutError>;

/// Errors that can occur during breakout detection.
///
/// Parameter validation happens once at entry and fails fast; numeric
/// degeneracies inside a scan (zero-variance segments and the like) are
/// handled locally by zero-scoring the offending candidate and never
/// surface as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakoutError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// NaN observations detected in the input series.
    #[error("missing values detected in data")]
    MissingValues,
}
