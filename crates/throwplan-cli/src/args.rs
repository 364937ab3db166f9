//! Command-line argument definitions for the Throwplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Exactly one of `--distance` / `--distance-series` must be
//! supplied; that rule is enforced during parameter validation rather than
//! by clap, so the error carries the same field-level detail as every other
//! input error.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the throw-distance diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate throw distance drawings in feet.", long_about = None)]
pub struct Args {
    /// Width (ft) of the surface
    #[arg(long)]
    pub surface_width: f64,

    /// Height (ft) of the surface
    #[arg(long)]
    pub surface_height: f64,

    /// Throw ratio of projector/lens
    #[arg(long)]
    pub throw_ratio: f64,

    /// Distance (ft) from surface to lens
    #[arg(long)]
    pub distance: Option<i64>,

    /// Distance (ft) series from surface to lens, as LOW-HIGH
    #[arg(long)]
    pub distance_series: Option<String>,

    /// Aspect ratio of projector, as W:H
    #[arg(long)]
    pub aspect_ratio: String,

    /// Output directory for generated drawings (created if absent)
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
