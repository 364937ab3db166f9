//! Batch driver: one rendered image per requested distance.

use std::{fs, path::PathBuf};

use log::{debug, info};

use throwplan_core::{compute_diagram, format::format_number};

use crate::{config::AppConfig, error::ThrowplanError, params::InputParameters, render};

/// Generates one PNG per distance under the configured output directory.
///
/// The output directory is created if absent before anything is rendered.
/// Distances are processed in ascending order; each file is named
/// `{distance}ft.png` with the distance formatted like every other label.
/// The first failure aborts the remaining batch; files already written are
/// left intact.
///
/// Returns the paths written, in order.
///
/// # Errors
///
/// - [`ThrowplanError::InvalidInput`] from the layout engine or
///   configuration, before any file is touched for that distance
/// - [`ThrowplanError::Io`] if the output directory cannot be created
/// - [`ThrowplanError::Render`] if the backend fails to draw or write
///
/// # Examples
///
/// ```rust,no_run
/// use throwplan::{AppConfig, InputParameters, DistanceSpec, generate};
///
/// let params = InputParameters::new(
///     31.0,
///     16.0,
///     0.8,
///     DistanceSpec::from_options(None, Some("18-20")).unwrap(),
///     "16:10".parse().unwrap(),
///     "out",
/// )
/// .unwrap();
///
/// let written = generate(&params, &AppConfig::default()).unwrap();
/// assert_eq!(written.len(), 3);
/// ```
pub fn generate(
    params: &InputParameters,
    config: &AppConfig,
) -> Result<Vec<PathBuf>, ThrowplanError> {
    let distances = params.distances().distances();

    info!(
        output_dir = params.output_dir().display().to_string(),
        count = distances.len();
        "Generating throw-distance diagrams"
    );

    // Idempotent; runs once before the batch so directory problems surface
    // before any rendering starts.
    fs::create_dir_all(params.output_dir())?;

    let mut written = Vec::with_capacity(distances.len());
    for distance in distances {
        let diagram = compute_diagram(
            params.surface(),
            params.throw_ratio(),
            distance as f64,
            params.aspect_ratio(),
        )?;
        debug!(distance, title = diagram.title(); "Diagram computed");

        let file_name = format!("{}ft.png", format_number(distance as f64));
        let path = params.output_dir().join(file_name);

        render::render_png(&diagram, &path, config)?;
        info!(path = path.display().to_string(); "Image written");

        written.push(path);
    }

    Ok(written)
}
