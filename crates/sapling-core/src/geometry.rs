//! Geometric primitives for tree layout and positioning.
//!
//! This module provides the geometric types used throughout Sapling for
//! node coordinates and the extents of a laid-out tree.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Sapling uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward, siblings are ordered left to right
//! - **Y-axis**: Increases downward, deeper levels have larger y
//!
//! Coordinates are abstract units; the caller scales them for drawing.

use serde::Deserialize;

/// A 2D point representing a position in layout coordinate space.
///
/// # Examples
///
/// ```
/// # use sapling_core::geometry::Point;
/// let point = Point::new(10.0, 20.0);
/// assert_eq!(point.x(), 10.0);
/// assert_eq!(point.y(), 20.0);
/// assert!(point.is_finite());
/// assert!(!Point::new(f32::NAN, 0.0).is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both coordinates are finite (neither NaN nor infinite)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Deserializes from a table with `min_x`, `min_y`, `max_x` and `max_y` keys,
/// which is how drawable extents are configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit minimum and maximum coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates zero-sized bounds located at a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Checks whether the point lies inside the bounds, edges included
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Grows the bounds just enough to contain the point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sapling_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_point(Point::new(0.0, 0.0))
    ///     .include(Point::new(3.0, -1.0))
    ///     .include(Point::new(-2.0, 4.0));
    ///
    /// assert_eq!(bounds.min_x(), -2.0);
    /// assert_eq!(bounds.min_y(), -1.0);
    /// assert_eq!(bounds.width(), 5.0);
    /// assert_eq!(bounds.height(), 5.0);
    /// ```
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Bounds grown from a set of points should contain every one of them.
    fn check_include_contains_all(points: Vec<Point>) -> Result<(), TestCaseError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let bounds = rest
            .iter()
            .fold(Bounds::from_point(*first), |bounds, point| {
                bounds.include(*point)
            });

        for point in &points {
            prop_assert!(bounds.contains(*point));
        }
        prop_assert!(bounds.width() >= 0.0);
        prop_assert!(bounds.height() >= 0.0);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn include_contains_all(points in prop::collection::vec(point_strategy(), 1..20)) {
            check_include_contains_all(points)?;
        }
    }
}
