//! Implementation of circle shape.

use core::f64::consts::PI;
use core::ops::{Add, Sub};

use crate::{Point, Size, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// In a progress-circle scene this doubles as the disc descriptor: the
/// background and inner fills are both discs, drawn natively by the SVG
/// backend rather than flattened to curves.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The area of the circle.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// The perimeter of the circle.
    #[inline]
    pub fn circumference(&self) -> f64 {
        (2.0 * PI * self.radius).abs()
    }

    /// The smallest square that encloses the circle.
    #[inline]
    pub fn bounding_square(&self) -> Size {
        Size::square(2.0 * self.radius.abs())
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn area_and_circumference() {
        let c = Circle::new((5.0, 5.0), 5.0);
        assert_approx_eq(c.area(), 25.0 * PI);
        assert_approx_eq(c.circumference(), 10.0 * PI);

        // Negative radii describe the same point set.
        let c_neg = Circle::new((5.0, 5.0), -5.0);
        assert_approx_eq(c_neg.area(), 25.0 * PI);
        assert_approx_eq(c_neg.circumference(), 10.0 * PI);
    }

    #[test]
    fn bounding_square() {
        let c = Circle::new((60.0, 60.0), 60.0);
        assert_eq!(c.bounding_square(), Size::square(120.0));

        let translated = c + Vec2::new(10.0, -10.0);
        assert_eq!(translated.center, Point::new(70.0, 50.0));
        assert_eq!(translated.bounding_square(), Size::square(120.0));
    }
}
