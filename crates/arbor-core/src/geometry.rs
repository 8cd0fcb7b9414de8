//! Geometric primitives for layout space.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Bounds`] - An axis-aligned box enclosing a set of points
//!
//! # Coordinate System
//!
//! Arbor uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates are abstract units. Only the relative gaps configured on the
//! layout engine carry meaning; the renderer picks the pixel scale.

use serde::{Deserialize, Serialize};

/// A 2D point in layout space.
///
/// # Examples
///
/// ```
/// # use arbor_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// let moved = p.add_point(Point::new(5.0, -5.0));
///
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
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

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Axis-aligned bounding box defined by minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates zero-sized bounds at the given point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the smallest bounds enclosing all `points`, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arbor_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::enclosing([Point::new(-1.0, 4.0), Point::new(3.0, 2.0)]).unwrap();
    ///
    /// assert_eq!(bounds.min_point(), Point::new(-1.0, 2.0));
    /// assert_eq!(bounds.max_point(), Point::new(3.0, 4.0));
    /// assert!(Bounds::enclosing(std::iter::empty()).is_none());
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points
            .into_iter()
            .map(Self::from_point)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the bottom-right corner
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Merges two bounds into the smallest bounds enclosing both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
