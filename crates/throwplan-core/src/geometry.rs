//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Throwplan for calculating positions, sizes, and bounding boxes of diagram
//! elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Throwplan measures everything in feet, with the surface's bottom-left
//! corner at the origin:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner of the surface at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//!
//! Coordinates may be negative: an inner rectangle larger than the surface
//! extends below and to the left of the origin.

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f64` coordinates in feet. The coordinate system has origin at
/// the surface's bottom-left with Y increasing upward (see
/// [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use throwplan_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// A rectangular region defined by its minimum and maximum coordinates.
///
/// With the y-up coordinate system, `min` is the bottom-left corner and
/// `max` the top-right corner.
///
/// # Examples
///
/// ```
/// # use throwplan_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_bottom_left(Point::new(3.0, 0.1875), Size::new(25.0, 15.625));
/// assert_eq!(bounds.max_x(), 28.0);
/// assert_eq!(bounds.center().x(), 15.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds from explicit minimum and maximum corner points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from a bottom-left corner point and a size
    pub fn new_from_bottom_left(bottom_left: Point, size: Size) -> Self {
        Self {
            min: bottom_left,
            max: Point::new(
                bottom_left.x() + size.width(),
                bottom_left.y() + size.height(),
            ),
        }
    }

    /// Returns the minimum x-coordinate (left edge)
    pub fn min_x(self) -> f64 {
        self.min.x()
    }

    /// Returns the minimum y-coordinate (bottom edge)
    pub fn min_y(self) -> f64 {
        self.min.y()
    }

    /// Returns the maximum x-coordinate (right edge)
    pub fn max_x(self) -> f64 {
        self.max.x()
    }

    /// Returns the maximum y-coordinate (top edge)
    pub fn max_y(self) -> f64 {
        self.max.y()
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Returns the size of the bounds
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Returns the four corner points in closed-outline order.
    ///
    /// The first corner is repeated at the end so the sequence traces a
    /// complete rectangle outline when drawn as a path.
    pub fn outline(self) -> [Point; 5] {
        let bl = self.min;
        let br = Point::new(self.max.x(), self.min.y());
        let tr = self.max;
        let tl = Point::new(self.min.x(), self.max.y());
        [bl, br, tr, tl, bl]
    }
}
