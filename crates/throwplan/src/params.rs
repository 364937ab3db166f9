//! Validated input parameters for a generation run.
//!
//! [`InputParameters`] is the funnel between a boundary layer (CLI flags, a
//! form, a test harness) and the library: it is constructed fresh per
//! invocation, validated eagerly, and passed by value. No ambient state.

use std::path::{Path, PathBuf};

use throwplan_core::{
    AspectRatio, DistanceSeries,
    error::{InvalidInput, ensure_positive},
    geometry::Size,
};

/// Either a single lens-to-surface distance or an inclusive series of them.
///
/// Exactly one of the two boundary inputs must be present; the constructor
/// enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSpec {
    Single(i64),
    Series(DistanceSeries),
}

impl DistanceSpec {
    /// Builds a distance specification from the two optional boundary
    /// inputs, enforcing mutual exclusivity and positivity.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::DistanceConflict`] if both inputs are present
    /// - [`InvalidInput::DistanceMissing`] if neither is
    /// - [`InvalidInput::MalformedSeries`] / [`InvalidInput::ReversedSeries`]
    ///   for a bad series string
    /// - [`InvalidInput::NonPositive`] for a non-positive distance
    pub fn from_options(distance: Option<i64>, series: Option<&str>) -> Result<Self, InvalidInput> {
        match (distance, series) {
            (Some(_), Some(_)) => Err(InvalidInput::DistanceConflict),
            (None, None) => Err(InvalidInput::DistanceMissing),
            (Some(d), None) => {
                ensure_positive("distance", d as f64)?;
                Ok(Self::Single(d))
            }
            (None, Some(s)) => {
                let series: DistanceSeries = s.parse()?;
                ensure_positive("distance_series low bound", series.low() as f64)?;
                Ok(Self::Series(series))
            }
        }
    }

    /// Returns the distances to render, in ascending order.
    pub fn distances(self) -> Vec<i64> {
        match self {
            Self::Single(d) => vec![d],
            Self::Series(series) => series.distances().collect(),
        }
    }
}

/// The complete validated input for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    surface: Size,
    throw_ratio: f64,
    distances: DistanceSpec,
    aspect_ratio: AspectRatio,
    output_dir: PathBuf,
}

impl InputParameters {
    /// Creates validated input parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositive`] naming the offending field if
    /// the surface dimensions or throw ratio are not strictly positive. The
    /// distance specification and aspect ratio are validated by their own
    /// constructors.
    pub fn new(
        surface_width: f64,
        surface_height: f64,
        throw_ratio: f64,
        distances: DistanceSpec,
        aspect_ratio: AspectRatio,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, InvalidInput> {
        let surface_width = ensure_positive("surface_width", surface_width)?;
        let surface_height = ensure_positive("surface_height", surface_height)?;
        let throw_ratio = ensure_positive("throw_ratio", throw_ratio)?;

        Ok(Self {
            surface: Size::new(surface_width, surface_height),
            throw_ratio,
            distances,
            aspect_ratio,
            output_dir: output_dir.into(),
        })
    }

    /// Returns the surface dimensions in feet
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Returns the projector's throw ratio
    pub fn throw_ratio(&self) -> f64 {
        self.throw_ratio
    }

    /// Returns the distance specification
    pub fn distances(&self) -> DistanceSpec {
        self.distances
    }

    /// Returns the projected image's aspect ratio
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Returns the directory output images are written under
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect() -> AspectRatio {
        "16:9".parse().unwrap()
    }

    #[test]
    fn test_exactly_one_distance_input() {
        assert_eq!(
            DistanceSpec::from_options(Some(20), None).unwrap(),
            DistanceSpec::Single(20)
        );

        let spec = DistanceSpec::from_options(None, Some("18-20")).unwrap();
        assert_eq!(spec.distances(), vec![18, 19, 20]);

        assert_eq!(
            DistanceSpec::from_options(Some(20), Some("18-20")).unwrap_err(),
            InvalidInput::DistanceConflict
        );
        assert_eq!(
            DistanceSpec::from_options(None, None).unwrap_err(),
            InvalidInput::DistanceMissing
        );
    }

    #[test]
    fn test_distance_must_be_positive() {
        assert!(DistanceSpec::from_options(Some(0), None).is_err());
        assert!(DistanceSpec::from_options(None, Some("0-3")).is_err());
    }

    #[test]
    fn test_series_errors_pass_through() {
        assert!(matches!(
            DistanceSpec::from_options(None, Some("8-5")).unwrap_err(),
            InvalidInput::ReversedSeries { low: 8, high: 5 }
        ));
        assert!(matches!(
            DistanceSpec::from_options(None, Some("18:20")).unwrap_err(),
            InvalidInput::MalformedSeries { .. }
        ));
    }

    #[test]
    fn test_surface_validation() {
        let spec = DistanceSpec::Single(20);

        let err =
            InputParameters::new(0.0, 16.0, 0.8, spec, aspect(), "/tmp/out").unwrap_err();
        assert!(err.to_string().contains("surface_width"));

        let err =
            InputParameters::new(31.0, 16.0, -0.8, spec, aspect(), "/tmp/out").unwrap_err();
        assert!(err.to_string().contains("throw_ratio"));

        let params =
            InputParameters::new(31.0, 16.0, 0.8, spec, aspect(), "/tmp/out").unwrap();
        assert_eq!(params.surface().width(), 31.0);
        assert_eq!(params.output_dir(), Path::new("/tmp/out"));
    }
}
