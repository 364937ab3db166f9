//! Positioned drawing description for a throw-distance diagram.
//!
//! The types in this module describe *what* a renderer should draw and
//! *where*, in diagram coordinates (feet). They carry no styling and perform
//! no drawing themselves; a rendering adapter maps them onto an actual
//! backend.
//!
//! # Overview
//!
//! - [`Diagram`] - One fully positioned diagram for a single distance
//! - [`DimensionLine`] - A double-arrowed measurement call-out with its label
//! - [`DimensionKind`] - Whether a call-out measures the surface or the image
//! - [`Orientation`] - Whether a dimension line runs horizontally or vertically
//! - [`LabelSide`] - Which side of the line the label text sits on

use crate::geometry::{Bounds, Point};

/// The rectangle a dimension call-out measures.
///
/// Renderers style surface call-outs like the outer rectangle and image
/// call-outs like the inner one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// Measures the projection surface (outer rectangle).
    Surface,
    /// Measures the projected image (inner rectangle).
    Image,
}

/// The axis a dimension line runs along.
///
/// Vertical dimension labels are rendered rotated so they read along the
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Which side of a dimension line its label is placed on.
///
/// For horizontal lines the meaningful values are `Before` (above) and
/// `After` (below); for vertical lines, `Before` (left) and `After` (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    /// Above a horizontal line, or left of a vertical line.
    Before,
    /// Below a horizontal line, or right of a vertical line.
    After,
}

/// A measurement call-out: a straight segment with arrowheads at both ends
/// and a text label at the segment's midpoint, offset to one side.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    start: Point,
    end: Point,
    label: String,
    kind: DimensionKind,
    orientation: Orientation,
    label_side: LabelSide,
}

impl DimensionLine {
    /// Creates a horizontal dimension line at height `y` spanning `x0..x1`.
    pub fn horizontal(
        y: f64,
        x0: f64,
        x1: f64,
        label: String,
        kind: DimensionKind,
        label_side: LabelSide,
    ) -> Self {
        Self {
            start: Point::new(x0, y),
            end: Point::new(x1, y),
            label,
            kind,
            orientation: Orientation::Horizontal,
            label_side,
        }
    }

    /// Creates a vertical dimension line at `x` spanning `y0..y1`.
    pub fn vertical(
        x: f64,
        y0: f64,
        y1: f64,
        label: String,
        kind: DimensionKind,
        label_side: LabelSide,
    ) -> Self {
        Self {
            start: Point::new(x, y0),
            end: Point::new(x, y1),
            label,
            kind,
            orientation: Orientation::Vertical,
            label_side,
        }
    }

    /// Returns the segment's start point
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the segment's end point
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the label text, unit suffix included
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns which rectangle this call-out measures
    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Returns the line's orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns which side of the line the label sits on
    pub fn label_side(&self) -> LabelSide {
        self.label_side
    }

    /// Returns the midpoint of the segment, where the label anchors.
    pub fn label_anchor(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// One fully positioned throw-distance diagram.
///
/// Immutable once constructed by
/// [`compute_diagram`](crate::layout::compute_diagram); consumed by a
/// renderer and then discarded. The inner rectangle is allowed to exceed the
/// outer one; an oversized projected image is a valid result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    outer: Bounds,
    inner: Bounds,
    dimensions: Vec<DimensionLine>,
    title: String,
    view: Bounds,
}

impl Diagram {
    pub(crate) fn new(
        outer: Bounds,
        inner: Bounds,
        dimensions: Vec<DimensionLine>,
        title: String,
        view: Bounds,
    ) -> Self {
        Self {
            outer,
            inner,
            dimensions,
            title,
            view,
        }
    }

    /// Returns the surface rectangle, anchored at the origin
    pub fn outer(&self) -> Bounds {
        self.outer
    }

    /// Returns the projected-image rectangle, centered within the surface
    pub fn inner(&self) -> Bounds {
        self.inner
    }

    /// Returns the four dimension call-outs
    pub fn dimensions(&self) -> &[DimensionLine] {
        &self.dimensions
    }

    /// Returns the diagram title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the view bounds the renderer should map to its canvas.
    ///
    /// Rendering concern only, not part of the diagram's semantics. The
    /// renderer must keep a 1:1 unit aspect within these bounds.
    pub fn view(&self) -> Bounds {
        self.view
    }
}
