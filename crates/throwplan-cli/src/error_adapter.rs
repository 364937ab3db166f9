//! Error adapter for converting ThrowplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Input
//! errors carry no source spans (there is no source file in this domain),
//! so the adapter contributes stable error codes and per-variant help text.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use throwplan::{InvalidInput, ThrowplanError};

/// Adapter wrapping a [`ThrowplanError`] for miette rendering.
pub struct Reportable<'a>(pub &'a ThrowplanError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ThrowplanError::InvalidInput(_) => "throwplan::invalid_input",
            ThrowplanError::Io(_) => "throwplan::io",
            ThrowplanError::Render { .. } => "throwplan::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            ThrowplanError::InvalidInput(invalid) => match invalid {
                InvalidInput::MalformedAspectRatio { .. } => {
                    "aspect ratio is written as W:H, e.g. --aspect-ratio 16:9"
                }
                InvalidInput::MalformedSeries { .. } | InvalidInput::ReversedSeries { .. } => {
                    "a distance series is written as LOW-HIGH with LOW <= HIGH, e.g. --distance-series 18-20"
                }
                InvalidInput::DistanceConflict | InvalidInput::DistanceMissing => {
                    "provide exactly one of --distance or --distance-series"
                }
                InvalidInput::NonPositive { .. } => return None,
                InvalidInput::InvalidColor { .. } => {
                    "colors are written as #rrggbb, e.g. \"#0000ff\""
                }
            },
            ThrowplanError::Io(_) | ThrowplanError::Render { .. } => return None,
        };
        Some(Box::new(help))
    }
}
