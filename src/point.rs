use core::ops::{Add, Mul, Sub};

use crate::NativeFloat;

/// Trait defined over 2D points living on the editor canvas.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<NativeFloat, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    /// Returns the horizontal canvas coordinate of the Point
    fn x(&self) -> NativeFloat;

    /// Returns the vertical canvas coordinate of the Point
    fn y(&self) -> NativeFloat;

    /// Returns the euclidean distance between the two Points self and other
    fn distance(&self, other: Self) -> NativeFloat;

    /// Returns the L2 Norm of the Point interpreted as a Vector
    fn abs(&self) -> NativeFloat;
}
