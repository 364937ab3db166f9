//! Distance-series parsing and expansion.
//!
//! A distance series is an inclusive integer range of lens-to-surface
//! distances, written `LOW-HIGH` (e.g. `18-20`). Each distance in the range
//! becomes one rendered diagram.

use std::str::FromStr;

use crate::error::InvalidInput;

/// An inclusive, ascending range of integer distances in feet.
///
/// # Examples
///
/// ```
/// # use throwplan_core::DistanceSeries;
/// let series: DistanceSeries = "5-8".parse().unwrap();
/// let distances: Vec<i64> = series.distances().collect();
/// assert_eq!(distances, vec![5, 6, 7, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceSeries {
    low: i64,
    high: i64,
}

impl DistanceSeries {
    /// Creates a series from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ReversedSeries`] if `low > high`. An empty
    /// series is never produced silently.
    pub fn new(low: i64, high: i64) -> Result<Self, InvalidInput> {
        if low > high {
            return Err(InvalidInput::ReversedSeries { low, high });
        }
        Ok(Self { low, high })
    }

    /// Returns the inclusive lower bound
    pub fn low(self) -> i64 {
        self.low
    }

    /// Returns the inclusive upper bound
    pub fn high(self) -> i64 {
        self.high
    }

    /// Returns the distances in ascending order, step 1, both bounds
    /// included. The iterator is a pure function of the series and can be
    /// taken as many times as needed.
    pub fn distances(self) -> impl Iterator<Item = i64> {
        self.low..=self.high
    }
}

impl FromStr for DistanceSeries {
    type Err = InvalidInput;

    /// Parses a `LOW-HIGH` string: two integers separated by a single
    /// hyphen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| InvalidInput::MalformedSeries {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (low, high) = trimmed
            .split_once('-')
            .ok_or_else(|| malformed("expected LOW-HIGH"))?;

        let low: i64 = low
            .trim()
            .parse()
            .map_err(|_| malformed("low bound is not an integer"))?;
        let high: i64 = high
            .trim()
            .parse()
            .map_err(|_| malformed("high bound is not an integer"))?;

        Self::new(low, high)
    }
}
