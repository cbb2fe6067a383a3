use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::point::Point;
use crate::NativeFloat;

/// Concrete 2D point used by the editor. Immutable value type;
/// dragging replaces a point wholesale rather than mutating coordinates.
#[derive(Debug, Copy, Clone, Default)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Clone + Float,
{
    /// Creates a new Point2<T>, which requires that
    /// T implements Add, Sub, Mul, and Clone
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T> PartialEq for Point2<T>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        (self.x == other.x) && (self.y == other.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T, U> Mul<U> for Point2<T>
where
    // The multiplication is done by multiplying T * U => T, this
    // trait bound for T specifies the requirement as the mul operator is
    // translated to using the first operand as self and the second as rhs.
    T: Mul<U, Output = T> + Copy,
    U: Clone,
{
    type Output = Point2<T>;

    fn mul(self, rhs: U) -> Point2<T> {
        Point2 {
            x: self.x * rhs.clone(),
            y: self.y * rhs,
        }
    }
}

impl Point for Point2<NativeFloat> {
    fn x(&self) -> NativeFloat {
        self.x
    }

    fn y(&self) -> NativeFloat {
        self.y
    }

    /// Returns the distance between self and other
    fn distance(&self, other: Self) -> NativeFloat {
        (((self.x - other.x) * (self.x - other.x)) + ((self.y - other.y) * (self.y - other.y)))
            .sqrt()
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    fn abs(&self) -> NativeFloat {
        ((self.x * self.x) + (self.y * self.y)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypotenuse 5
    #[test]
    fn distance_pythagorean() {
        let p = Point2::new(0f64, 0f64);
        let q = Point2::new(3f64, 4f64);
        assert!((p.distance(q) - 5.0).abs() < EPSILON);
        assert!((q.abs() - 5.0).abs() < EPSILON);
    }

    /// The underlying metric must not depend on argument order
    #[test]
    fn distance_symmetry() {
        let p = Point2::new(-1.5f64, 2.25f64);
        let q = Point2::new(7.125f64, -3f64);
        // bit-identical, not just approximately equal
        assert_eq!(p.distance(q), q.distance(p));
    }

    #[test]
    fn operators() {
        let p = Point2::new(1f64, 2f64);
        let q = Point2::new(3f64, 5f64);
        assert_eq!(p + q, Point2::new(4f64, 7f64));
        assert_eq!(q - p, Point2::new(2f64, 3f64));
        assert_eq!(p * 2.0, Point2::new(2f64, 4f64));
    }
}
