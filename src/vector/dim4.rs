//! Operations specific to 4-dimensional vectors.

use super::Vector;
use crate::{
    error::{Result, VectorError},
    num::Scalar,
};

impl<S: Scalar> Vector<S, 4> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(S::ZERO, S::ONE, S::ZERO, S::ZERO);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(S::ZERO, S::ZERO, S::ONE, S::ZERO);

    /// The w-axis unit vector.
    pub const UNIT_W: Self = Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub const fn x(&self) -> S {
        self.components[0]
    }

    #[inline]
    pub const fn y(&self) -> S {
        self.components[1]
    }

    #[inline]
    pub const fn z(&self) -> S {
        self.components[2]
    }

    #[inline]
    pub const fn w(&self) -> S {
        self.components[3]
    }

    /// Computes the unsigned angle in radians between this vector and another
    /// as `acos(a . b / (|a| |b|))`. There is no canonical orientation in 4D,
    /// so unlike the 2D and 3D angles this one carries no sign information.
    /// The cosine is clamped to `[-1, 1]`, so rounding never turns parallel
    /// vectors into NaN.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidOperation`] if either vector has zero
    /// length.
    pub fn angle(&self, other: &Self) -> Result<f64> {
        let a = self.to_f64_components();
        let b = other.to_f64_components();

        let length_product = self.length() * other.length();
        if length_product == 0.0 {
            return Err(VectorError::invalid_operation(
                "compute the angle involving a zero-length vector",
            ));
        }

        let dot: f64 = a.iter().zip(&b).map(|(a, b)| a * b).sum();
        Ok((dot / length_product).clamp(-1.0, 1.0).acos())
    }
}
