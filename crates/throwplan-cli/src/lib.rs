//! CLI logic for the Throwplan diagram tool.
//!
//! This module contains the core CLI logic for the Throwplan diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use throwplan::{DistanceSpec, InputParameters, ThrowplanError, generate};

/// Run the Throwplan CLI application
///
/// This function validates the command-line parameters and renders one
/// annotated throw-distance diagram per requested distance under the output
/// directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ThrowplanError` for:
/// - Invalid input (aspect ratio, distance series, non-positive dimensions,
///   both or neither distance flag)
/// - Configuration loading errors
/// - Output directory or image write failures
pub fn run(args: &Args) -> Result<(), ThrowplanError> {
    info!(
        surface_width = args.surface_width,
        surface_height = args.surface_height,
        throw_ratio = args.throw_ratio,
        distance:? = args.distance,
        distance_series:? = args.distance_series,
        aspect_ratio = args.aspect_ratio,
        output_dir = args.output_dir.display().to_string();
        "Generating throw-distance drawings"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Validate all inputs before anything is written
    let distances = DistanceSpec::from_options(args.distance, args.distance_series.as_deref())?;
    let aspect_ratio = args.aspect_ratio.parse()?;
    let params = InputParameters::new(
        args.surface_width,
        args.surface_height,
        args.throw_ratio,
        distances,
        aspect_ratio,
        args.output_dir.clone(),
    )?;

    let written = generate(&params, &app_config)?;

    info!(count = written.len(); "Drawings exported successfully");

    Ok(())
}
