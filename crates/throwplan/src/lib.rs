//! Throwplan - projector throw-distance diagram generation.
//!
//! Given a surface size, a throw ratio, one or more lens-to-surface
//! distances, and an aspect ratio, Throwplan computes the projected image's
//! geometry relative to the surface and renders an annotated PNG per
//! distance: the surface as a solid outer rectangle, the image as a dashed
//! inner rectangle centered on it, and four arrowed dimension call-outs.
//!
//! # Examples
//!
//! ```rust,no_run
//! use throwplan::{AppConfig, DistanceSpec, InputParameters, generate};
//!
//! let params = InputParameters::new(
//!     31.0,                                              // surface width, ft
//!     16.0,                                              // surface height, ft
//!     0.8,                                               // throw ratio
//!     DistanceSpec::from_options(Some(20), None).unwrap(),
//!     "16:10".parse().unwrap(),
//!     "drawings",
//! )
//! .unwrap();
//!
//! let written = generate(&params, &AppConfig::default()).unwrap();
//! assert!(written[0].ends_with("20ft.png"));
//! ```

pub mod config;
pub mod render;

mod error;
mod generate;
mod params;

pub use throwplan_core::{
    AspectRatio, Diagram, DistanceSeries, InvalidInput, compute_diagram, diagram, format, geometry,
    series,
};

pub use config::AppConfig;
pub use error::ThrowplanError;
pub use generate::generate;
pub use params::{DistanceSpec, InputParameters};
