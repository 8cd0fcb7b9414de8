//! Layout direction.
//!
//! A layout works on two abstract axes. The *primary* axis carries tree
//! depth (one step of `level_gap` per level) and the *secondary* axis
//! spreads siblings apart. [`Direction`] maps those onto `x`/`y`.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which way the tree grows.
///
/// The names match external configuration strings (kebab-case).
///
/// # Variants
///
/// - `TopToBottom` - Depth grows along `y`, siblings spread along `x` (default)
/// - `LeftToRight` - Depth grows along `x`, siblings spread along `y`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl Direction {
    /// Builds a point from primary (depth) and secondary (spread) coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_core::{direction::Direction, geometry::Point};
    ///
    /// assert_eq!(Direction::TopToBottom.point(150.0, -50.0), Point::new(-50.0, 150.0));
    /// assert_eq!(Direction::LeftToRight.point(150.0, -50.0), Point::new(150.0, -50.0));
    /// ```
    pub fn point(self, primary: f64, secondary: f64) -> Point {
        match self {
            Self::TopToBottom => Point::new(secondary, primary),
            Self::LeftToRight => Point::new(primary, secondary),
        }
    }

    /// Returns the primary (depth) coordinate of `point`.
    pub fn primary(self, point: Point) -> f64 {
        match self {
            Self::TopToBottom => point.y(),
            Self::LeftToRight => point.x(),
        }
    }

    /// Returns the secondary (spread) coordinate of `point`.
    pub fn secondary(self, point: Point) -> f64 {
        match self {
            Self::TopToBottom => point.x(),
            Self::LeftToRight => point.y(),
        }
    }

    /// Returns `point` with its primary coordinate replaced.
    pub fn with_primary(self, point: Point, primary: f64) -> Point {
        match self {
            Self::TopToBottom => point.with_y(primary),
            Self::LeftToRight => point.with_x(primary),
        }
    }

    /// Returns `point` with its secondary coordinate replaced.
    pub fn with_secondary(self, point: Point, secondary: f64) -> Point {
        match self {
            Self::TopToBottom => point.with_x(secondary),
            Self::LeftToRight => point.with_y(secondary),
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-to-bottom" => Ok(Self::TopToBottom),
            "left-to-right" => Ok(Self::LeftToRight),
            _ => Err("Unsupported layout direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TopToBottom => "top-to-bottom",
            Direction::LeftToRight => "left-to-right",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
