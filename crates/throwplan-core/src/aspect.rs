//! Aspect-ratio parsing and representation.
//!
//! An aspect ratio is the width-to-height proportion of the projected image,
//! written `W:H` (e.g. `16:9`). Any positive numeric pair is accepted; there
//! is no fixed preset list.

use std::{fmt, str::FromStr};

use crate::{
    error::{InvalidInput, ensure_positive},
    format::format_number,
};

/// The width-to-height proportion of the projected image.
///
/// # Examples
///
/// ```
/// # use throwplan_core::AspectRatio;
/// let ar: AspectRatio = "16:10".parse().unwrap();
/// assert_eq!(ar.width(), 16.0);
/// assert_eq!(ar.height(), 10.0);
/// assert_eq!(ar.height_over_width(), 0.625);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Creates an aspect ratio from positive width and height terms.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositive`] if either term is not
    /// strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidInput> {
        let width = ensure_positive("aspect_ratio width", width)?;
        let height = ensure_positive("aspect_ratio height", height)?;
        Ok(Self { width, height })
    }

    /// Returns the width term of the ratio
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height term of the ratio
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns height divided by width, the factor mapping an image width
    /// to its height.
    pub fn height_over_width(self) -> f64 {
        self.height / self.width
    }
}

impl FromStr for AspectRatio {
    type Err = InvalidInput;

    /// Parses a `W:H` string. Whitespace is stripped before parsing, so
    /// `"16: 9"` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| InvalidInput::MalformedAspectRatio {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut parts = cleaned.split(':');

        let (w, h) = match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => (w, h),
            _ => return Err(malformed("expected exactly one ':' separator")),
        };

        let width: f64 = w
            .parse()
            .map_err(|_| malformed("width term is not a number"))?;
        let height: f64 = h
            .parse()
            .map_err(|_| malformed("height term is not a number"))?;

        Self::new(width, height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            format_number(self.width),
            format_number(self.height)
        )
    }
}
