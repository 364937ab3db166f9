//! Error types for input validation.
//!
//! This module provides [`InvalidInput`], the error type for every form of
//! malformed or out-of-range user input. Each variant names the offending
//! field and carries the rejected value so the caller can correct it.

use thiserror::Error;

/// A rejected input parameter.
///
/// All validation is eager: an `InvalidInput` is produced before any diagram
/// is computed or any file is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// A geometric parameter that must be strictly positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// An aspect-ratio string that does not parse as `W:H`.
    #[error("invalid aspect ratio {input:?}: {reason}")]
    MalformedAspectRatio { input: String, reason: String },

    /// A distance-series string that does not parse as `LOW-HIGH`.
    #[error("invalid distance series {input:?}: {reason}")]
    MalformedSeries { input: String, reason: String },

    /// A distance series whose lower bound exceeds its upper bound.
    #[error("invalid distance series: low bound {low} exceeds high bound {high}")]
    ReversedSeries { low: i64, high: i64 },

    /// Both `distance` and `distance_series` were supplied.
    #[error("distance and distance_series are mutually exclusive; provide only one")]
    DistanceConflict,

    /// Neither `distance` nor `distance_series` was supplied.
    #[error("either distance or distance_series is required")]
    DistanceMissing,

    /// A configured color string that does not parse as `#rrggbb`.
    #[error("invalid color for {field}: {input:?} is not a #rrggbb value")]
    InvalidColor { field: &'static str, input: String },
}

/// Checks that a named scalar parameter is strictly positive.
///
/// Returns the value unchanged on success so checks can be chained inline.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput::NonPositive { field, value })
    }
}
