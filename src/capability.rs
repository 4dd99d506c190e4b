//! Capabilities beyond the arithmetic shared by all vectors.
//!
//! The generic contract lives directly on [`Vector`](crate::vector::Vector).
//! The traits here cover operations that only exist for particular dimensions
//! (cross products, rotations, swizzles) along with rounding, so generic code
//! can ask for exactly the capability it needs.

use crate::vector::{Double2, Double3};

/// Vectors with a cross product (3D).
pub trait Cross {
    /// Computes the right-handed cross product of this vector with another.
    fn cross(&self, other: &Self) -> Self;
}

/// Vectors that can be rotated in their own plane (2D).
pub trait Rotate2D {
    /// Rotates the vector counterclockwise by the given angle in radians. The
    /// rotation is always carried out in `f64`.
    fn rotate(&self, angle: f64) -> Double2;
}

/// Vectors that can be rotated about the coordinate axes (3D).
///
/// All rotations are counterclockwise when looking down the axis toward the
/// origin, and are always carried out in `f64`.
pub trait AxisRotation3D {
    /// Rotates the vector about the x-axis by the given angle in radians.
    fn rotate_x(&self, angle: f64) -> Double3;

    /// Rotates the vector about the y-axis by the given angle in radians.
    fn rotate_y(&self, angle: f64) -> Double3;

    /// Rotates the vector about the z-axis by the given angle in radians.
    fn rotate_z(&self, angle: f64) -> Double3;
}

/// Swizzles of 2D vectors.
pub trait Swizzle2 {
    /// Creates a vector with the x- and y-components swapped.
    fn yx(&self) -> Self;
}

/// Swizzles of 3D vectors.
pub trait Swizzle3 {
    /// Creates a vector with the components in reverse order.
    fn zyx(&self) -> Self;
}

/// Componentwise rounding.
///
/// Flooring and ceiling always produce integer vectors. For integer vectors
/// all three operations return the vector unchanged.
pub trait Rounding {
    type Rounded;

    /// Rounds each component down to the nearest integer.
    fn floor(&self) -> Self::Rounded;

    /// Rounds each component up to the nearest integer.
    fn ceil(&self) -> Self::Rounded;

    /// Computes `x - floor(x)` for each component `x`.
    fn fract(&self) -> Self;
}
