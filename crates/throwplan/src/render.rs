//! Raster rendering adapter for throw-distance diagrams.
//!
//! This module maps a positioned [`Diagram`] onto a plotters
//! [`BitMapBackend`] and writes it as a PNG. The bitmap is sized from the
//! diagram's view bounds at the configured feet-to-pixel scale, so the
//! drawing keeps a strict 1:1 unit aspect whatever the surface proportions.
//! No axes, ticks, or mesh are drawn.

use std::path::Path;

use log::trace;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use throwplan_core::{
    diagram::{Diagram, DimensionKind, DimensionLine, LabelSide, Orientation},
    geometry::Bounds,
};

use crate::{
    config::{AppConfig, RenderConfig},
    error::ThrowplanError,
};

/// Arrowhead length along the dimension line, in feet.
const ARROW_LENGTH: f64 = 0.35;

/// Arrowhead half-width across the dimension line, in feet.
const ARROW_HALF_WIDTH: f64 = 0.12;

/// Gap between a dimension line and its label, in feet.
const LABEL_OFFSET: f64 = 0.2;

/// Dash length for the image rectangle outline, in pixels.
const DASH_SIZE: i32 = 12;

/// Gap between dashes, in pixels.
const DASH_SPACING: i32 = 8;

/// Outline stroke width for both rectangles, in pixels.
const RECT_STROKE: u32 = 3;

/// Stroke width for dimension lines, in pixels.
const DIM_STROKE: u32 = 2;

type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Computes the bitmap dimensions for a diagram view under the given render
/// configuration.
///
/// The plotting region is `view × scale` pixels; a title band sits above it
/// and a uniform margin surrounds everything.
pub fn bitmap_size(view: Bounds, render: &RenderConfig) -> (u32, u32) {
    let scale = f64::from(render.scale());
    let plot_w = (view.width() * scale).round() as u32;
    let plot_h = (view.height() * scale).round() as u32;
    let margin = render.margin();
    let title_band = render.title_size() + 2 * margin;

    (plot_w + 2 * margin, plot_h + title_band + margin)
}

/// Renders one diagram to a PNG file.
///
/// # Errors
///
/// Returns [`ThrowplanError::Render`] carrying the output path if the
/// backend fails (unwritable file, font lookup failure), or
/// [`ThrowplanError::InvalidInput`] if a configured color does not parse.
/// On failure the output file is not guaranteed to exist.
pub fn render_png(diagram: &Diagram, path: &Path, config: &AppConfig) -> Result<(), ThrowplanError> {
    let render = config.render();
    let style = config.style();

    let background = style.background_color()?;
    let surface_color = style.surface_color()?;
    let image_color = style.image_color()?;

    let view = diagram.view();
    let (img_w, img_h) = bitmap_size(view, render);
    let margin = render.margin();
    let title_band = render.title_size() + 2 * margin;
    let plot_w = img_w - 2 * margin;
    let plot_h = img_h - title_band - margin;

    trace!(
        path = path.display().to_string(),
        img_w,
        img_h;
        "Rendering diagram bitmap"
    );

    let to_render_err = |err: &dyn std::fmt::Display| {
        ThrowplanError::new_render_error(path.display().to_string(), err)
    };

    let root = BitMapBackend::new(path, (img_w, img_h)).into_drawing_area();
    root.fill(&background).map_err(|e| to_render_err(&e))?;

    // Title, centered in the band above the plotting region
    let title_style = ("sans-serif", render.title_size() as i32)
        .into_font()
        .color(&surface_color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        diagram.title().to_string(),
        ((img_w / 2) as i32, margin as i32),
        title_style,
    ))
    .map_err(|e| to_render_err(&e))?;

    // Fixed 1:1 mapping from feet to pixels; logical y is reversed so the
    // diagram's y-up coordinates land the right way up on the bitmap.
    let plot = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
        view.min_x()..view.max_x(),
        view.max_y()..view.min_y(),
        (
            margin as i32..(margin + plot_w) as i32,
            title_band as i32..(title_band + plot_h) as i32,
        ),
    ));

    // Surface rectangle, solid outline
    let outer = diagram.outer();
    plot.draw(&Rectangle::new(
        [
            (outer.min_x(), outer.min_y()),
            (outer.max_x(), outer.max_y()),
        ],
        surface_color.stroke_width(RECT_STROKE),
    ))
    .map_err(|e| to_render_err(&e))?;

    // Image rectangle, dashed outline
    let inner_outline: Vec<(f64, f64)> = diagram
        .inner()
        .outline()
        .iter()
        .map(|p| (p.x(), p.y()))
        .collect();
    plot.draw(&DashedPathElement::new(
        inner_outline,
        DASH_SIZE,
        DASH_SPACING,
        image_color.stroke_width(RECT_STROKE),
    ))
    .map_err(|e| to_render_err(&e))?;

    for dim in diagram.dimensions() {
        let color = match dim.kind() {
            DimensionKind::Surface => surface_color,
            DimensionKind::Image => image_color,
        };
        draw_dimension(&plot, dim, color, render.label_size() as i32)
            .map_err(|e| to_render_err(&e))?;
    }

    root.present().map_err(|e| to_render_err(&e))?;

    Ok(())
}

/// Draws one dimension call-out: the segment, an arrowhead at each end, and
/// the label on its configured side (rotated for vertical lines).
fn draw_dimension(
    plot: &PlotArea<'_>,
    dim: &DimensionLine,
    color: RGBColor,
    label_px: i32,
) -> Result<(), String> {
    let start = (dim.start().x(), dim.start().y());
    let end = (dim.end().x(), dim.end().y());

    plot.draw(&PathElement::new(
        vec![start, end],
        color.stroke_width(DIM_STROKE),
    ))
    .map_err(|e| e.to_string())?;

    for head in arrow_heads(start, end) {
        plot.draw(&Polygon::new(head, color.filled()))
            .map_err(|e| e.to_string())?;
    }

    let anchor = dim.label_anchor();
    let (pos, point, transform) = match (dim.orientation(), dim.label_side()) {
        (Orientation::Horizontal, LabelSide::Before) => (
            Pos::new(HPos::Center, VPos::Bottom),
            (anchor.x(), anchor.y() + LABEL_OFFSET),
            FontTransform::None,
        ),
        (Orientation::Horizontal, LabelSide::After) => (
            Pos::new(HPos::Center, VPos::Top),
            (anchor.x(), anchor.y() - LABEL_OFFSET),
            FontTransform::None,
        ),
        (Orientation::Vertical, LabelSide::Before) => (
            Pos::new(HPos::Center, VPos::Center),
            (anchor.x() - LABEL_OFFSET, anchor.y()),
            FontTransform::Rotate270,
        ),
        (Orientation::Vertical, LabelSide::After) => (
            Pos::new(HPos::Center, VPos::Center),
            (anchor.x() + LABEL_OFFSET, anchor.y()),
            FontTransform::Rotate270,
        ),
    };

    let label_style = ("sans-serif", label_px)
        .into_font()
        .transform(transform)
        .color(&color)
        .pos(pos);
    plot.draw(&Text::new(dim.label().to_string(), point, label_style))
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Computes the two filled arrowhead triangles for a segment, one pointing
/// outward at each end.
fn arrow_heads(start: (f64, f64), end: (f64, f64)) -> [Vec<(f64, f64)>; 2] {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = dx.hypot(dy);
    let (ux, uy) = if len > 0.0 {
        (dx / len, dy / len)
    } else {
        (1.0, 0.0)
    };
    // Perpendicular unit vector
    let (px, py) = (-uy, ux);

    let head = |tip: (f64, f64), ox: f64, oy: f64| {
        vec![
            tip,
            (
                tip.0 + ox * ARROW_LENGTH + px * ARROW_HALF_WIDTH,
                tip.1 + oy * ARROW_LENGTH + py * ARROW_HALF_WIDTH,
            ),
            (
                tip.0 + ox * ARROW_LENGTH - px * ARROW_HALF_WIDTH,
                tip.1 + oy * ARROW_LENGTH - py * ARROW_HALF_WIDTH,
            ),
        ]
    };

    // At the start the head points back along the segment; at the end,
    // forward.
    [head(start, ux, uy), head(end, -ux, -uy)]
}
