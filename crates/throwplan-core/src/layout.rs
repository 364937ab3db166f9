//! The layout engine: throw parameters in, positioned diagram out.
//!
//! [`compute_diagram`] is a pure function. It performs no I/O, holds no
//! state, and either validates every parameter up front or computes the
//! complete diagram; there is no partial result.
//!
//! # Geometry
//!
//! The projected image width follows directly from the throw ratio:
//! `inner_width = distance / throw_ratio`. Its height follows from the
//! aspect ratio, and the image is centered on the surface. The image may be
//! larger than the surface; the resulting negative corner coordinates are
//! meaningful output, not an error.

use log::debug;

use crate::{
    aspect::AspectRatio,
    diagram::{Diagram, DimensionKind, DimensionLine, LabelSide},
    error::{InvalidInput, ensure_positive},
    format::{format_feet, format_number},
    geometry::{Bounds, Point, Size},
};

/// Vertical offset of the surface-width call-out above the surface's top
/// edge, in feet.
const OUTER_WIDTH_OFFSET: f64 = 0.6;

/// Horizontal offset of the surface-height call-out left of the surface, in
/// feet.
const OUTER_HEIGHT_OFFSET: f64 = 0.7;

/// Inset of the image-width call-out below the image's top edge, in feet.
const INNER_WIDTH_INSET: f64 = 1.0;

/// Inset of the image-height call-out right of the image's left edge, in
/// feet.
const INNER_HEIGHT_INSET: f64 = 1.0;

/// View margin left of and below the surface, in feet.
const VIEW_MARGIN_LOW: f64 = 1.0;

/// View margin right of and above the surface, in feet.
const VIEW_MARGIN_HIGH: f64 = 2.0;

/// Computes one positioned throw-distance diagram.
///
/// # Arguments
///
/// * `surface` - Width and height of the projection surface, in feet
/// * `throw_ratio` - Throw ratio of the projector/lens
/// * `distance` - Lens-to-surface distance, in feet
/// * `aspect` - Aspect ratio of the projected image
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositive`] naming the offending field if any
/// parameter is not strictly positive. The aspect ratio's terms are already
/// guaranteed positive by construction.
///
/// # Examples
///
/// ```
/// # use throwplan_core::{compute_diagram, AspectRatio};
/// # use throwplan_core::geometry::Size;
/// let aspect: AspectRatio = "16:10".parse().unwrap();
/// let diagram = compute_diagram(Size::new(31.0, 16.0), 0.8, 20.0, aspect).unwrap();
///
/// assert_eq!(diagram.inner().width(), 25.0);
/// assert_eq!(diagram.inner().height(), 15.625);
/// assert_eq!(diagram.inner().min_x(), 3.0);
/// assert_eq!(diagram.inner().min_y(), 0.1875);
/// ```
pub fn compute_diagram(
    surface: Size,
    throw_ratio: f64,
    distance: f64,
    aspect: AspectRatio,
) -> Result<Diagram, InvalidInput> {
    let surface_width = ensure_positive("surface_width", surface.width())?;
    let surface_height = ensure_positive("surface_height", surface.height())?;
    let throw_ratio = ensure_positive("throw_ratio", throw_ratio)?;
    let distance = ensure_positive("distance", distance)?;

    let inner_width = distance / throw_ratio;
    let inner_height = inner_width * aspect.height_over_width();

    // Centered within the surface; negative corners mean the image
    // overshoots the surface and are kept as-is.
    let inner_x = (surface_width - inner_width) / 2.0;
    let inner_y = (surface_height - inner_height) / 2.0;

    debug!(
        distance,
        inner_width,
        inner_height,
        inner_x,
        inner_y;
        "Computed image geometry"
    );

    let outer = Bounds::new_from_bottom_left(
        Point::new(0.0, 0.0),
        Size::new(surface_width, surface_height),
    );
    let inner = Bounds::new_from_bottom_left(
        Point::new(inner_x, inner_y),
        Size::new(inner_width, inner_height),
    );

    let dimensions = vec![
        // Surface width, above the surface
        DimensionLine::horizontal(
            surface_height + OUTER_WIDTH_OFFSET,
            0.0,
            surface_width,
            format_feet(surface_width),
            DimensionKind::Surface,
            LabelSide::Before,
        ),
        // Surface height, left of the surface
        DimensionLine::vertical(
            -OUTER_HEIGHT_OFFSET,
            0.0,
            surface_height,
            format_feet(surface_height),
            DimensionKind::Surface,
            LabelSide::Before,
        ),
        // Image width, just below the image's top edge
        DimensionLine::horizontal(
            inner_y + inner_height - INNER_WIDTH_INSET,
            inner_x,
            inner_x + inner_width,
            format_feet(inner_width),
            DimensionKind::Image,
            LabelSide::After,
        ),
        // Image height, just right of the image's left edge
        DimensionLine::vertical(
            inner_x + INNER_HEIGHT_INSET,
            inner_y,
            inner_y + inner_height,
            format_feet(inner_height),
            DimensionKind::Image,
            LabelSide::After,
        ),
    ];

    let title = format!(
        "Throw Distance = {} ft | Aspect Ratio = {}",
        format_number(distance),
        aspect
    );

    let view = Bounds::new(
        Point::new(-VIEW_MARGIN_LOW, -VIEW_MARGIN_LOW),
        Point::new(
            surface_width + VIEW_MARGIN_HIGH,
            surface_height + VIEW_MARGIN_HIGH,
        ),
    );

    Ok(Diagram::new(outer, inner, dimensions, title, view))
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn params_strategy() -> impl Strategy<Value = (Size, f64, f64, AspectRatio)> {
        (
            1.0f64..200.0,
            1.0f64..200.0,
            0.1f64..10.0,
            1.0f64..500.0,
            1.0f64..50.0,
            1.0f64..50.0,
        )
            .prop_map(|(w, h, tr, d, ar_w, ar_h)| {
                (
                    Size::new(w, h),
                    tr,
                    d,
                    AspectRatio::new(ar_w, ar_h).unwrap(),
                )
            })
    }

    /// The image width must equal distance / throw_ratio and the image's
    /// proportions must match the aspect ratio.
    fn check_image_size(
        surface: Size,
        throw_ratio: f64,
        distance: f64,
        aspect: AspectRatio,
    ) -> Result<(), TestCaseError> {
        let diagram = compute_diagram(surface, throw_ratio, distance, aspect).unwrap();
        let inner = diagram.inner();

        prop_assert!(approx_eq!(
            f64,
            inner.width(),
            distance / throw_ratio,
            epsilon = 1e-9
        ));
        prop_assert!(approx_eq!(
            f64,
            inner.height() / inner.width(),
            aspect.height() / aspect.width(),
            epsilon = 1e-9
        ));
        Ok(())
    }

    /// The image must be centered on the surface, including when it
    /// overshoots it.
    fn check_image_is_centered(
        surface: Size,
        throw_ratio: f64,
        distance: f64,
        aspect: AspectRatio,
    ) -> Result<(), TestCaseError> {
        let diagram = compute_diagram(surface, throw_ratio, distance, aspect).unwrap();
        let inner = diagram.inner();

        prop_assert!(approx_eq!(
            f64,
            inner.min_x() + inner.width() / 2.0,
            surface.width() / 2.0,
            epsilon = 1e-9
        ));
        prop_assert!(approx_eq!(
            f64,
            inner.min_y() + inner.height() / 2.0,
            surface.height() / 2.0,
            epsilon = 1e-9
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn image_size_follows_throw_ratio((surface, tr, d, ar) in params_strategy()) {
            check_image_size(surface, tr, d, ar)?;
        }

        #[test]
        fn image_is_centered((surface, tr, d, ar) in params_strategy()) {
            check_image_is_centered(surface, tr, d, ar)?;
        }
    }
}
