//! Drawable-extents checks applied to every computed coordinate.
//!
//! The final layout pass asks an [`ExtentsCheck`] whether each coordinate can
//! be represented by the caller's drawing surface. The default [`Extents`]
//! policy accepts any finite coordinate, optionally restricted to a
//! [`Bounds`] rectangle. Callers with other constraints (for example integer
//! device coordinates) can implement the trait or pass a closure.

use sapling_core::geometry::{Bounds, Point};

/// Decides whether a computed coordinate is drawable.
pub trait ExtentsCheck {
    /// Returns true if `point` lies within the drawable extents
    fn accepts(&self, point: Point) -> bool;
}

impl<F> ExtentsCheck for F
where
    F: Fn(Point) -> bool,
{
    fn accepts(&self, point: Point) -> bool {
        self(point)
    }
}

/// Default extents policy: finite coordinates, optionally inside a rectangle.
///
/// # Examples
///
/// ```
/// # use sapling::{Extents, ExtentsCheck};
/// # use sapling::geometry::{Bounds, Point};
/// let any = Extents::unbounded();
/// assert!(any.accepts(Point::new(1.0e20, -3.0)));
/// assert!(!any.accepts(Point::new(f32::NAN, 0.0)));
///
/// let screen = Extents::within(Bounds::new(0.0, 0.0, 640.0, 480.0));
/// assert!(screen.accepts(Point::new(320.0, 240.0)));
/// assert!(!screen.accepts(Point::new(-1.0, 240.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extents {
    bounds: Option<Bounds>,
}

impl Extents {
    /// Accepts every finite coordinate
    pub fn unbounded() -> Self {
        Self { bounds: None }
    }

    /// Accepts finite coordinates inside `bounds`, edges included
    pub fn within(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
        }
    }

    /// Returns the restricting rectangle, if any
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

impl From<Option<Bounds>> for Extents {
    fn from(bounds: Option<Bounds>) -> Self {
        Self { bounds }
    }
}

impl ExtentsCheck for Extents {
    fn accepts(&self, point: Point) -> bool {
        point.is_finite() && self.bounds.is_none_or(|bounds| bounds.contains(point))
    }
}
