//! Throwplan Core Types and Definitions
//!
//! This crate provides the foundational types for computing projector
//! throw-distance diagrams. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Layout**: The layout engine turning throw parameters into a
//!   positioned diagram ([`layout`] module)
//! - **Diagram**: The positioned drawing description consumed by renderers
//!   ([`diagram`] module)
//! - **Parsing**: Aspect-ratio and distance-series parsing ([`aspect`] and
//!   [`series`] modules)
//! - **Formatting**: Numeric label formatting ([`format`] module)

pub mod aspect;
pub mod diagram;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod series;

pub use aspect::AspectRatio;
pub use diagram::Diagram;
pub use error::InvalidInput;
pub use layout::compute_diagram;
pub use series::DistanceSeries;
