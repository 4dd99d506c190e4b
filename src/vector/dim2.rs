//! Operations specific to 2-dimensional vectors.

use super::{Double2, Vector};
use crate::{
    capability::{Rotate2D, Swizzle2},
    num::Scalar,
};

impl<S: Scalar> Vector<S, 2> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(S::ONE, S::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(S::ZERO, S::ONE);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self::from_array([x, y])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> S {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> S {
        self.components[1]
    }

    /// Computes the signed angle in radians from this vector to another, in
    /// the range `[-pi, pi]`. Positive angles are counterclockwise.
    ///
    /// The angle is obtained as `atan2(a x b, a . b)`, where `a x b` is the
    /// scalar 2D cross product, so the sign of the rotation is preserved.
    /// Computed in `f64` regardless of the kind.
    pub fn angle(&self, other: &Self) -> f64 {
        let [x1, y1] = self.to_f64_components();
        let [x2, y2] = other.to_f64_components();
        let dot = x1 * x2 + y1 * y2;
        let cross = x1 * y2 - y1 * x2;
        cross.atan2(dot)
    }
}

impl<S: Scalar> Rotate2D for Vector<S, 2> {
    fn rotate(&self, angle: f64) -> Double2 {
        let [x, y] = self.to_f64_components();
        let (sin, cos) = angle.sin_cos();
        Double2::new(x * cos - y * sin, x * sin + y * cos)
    }
}

impl<S: Scalar> Swizzle2 for Vector<S, 2> {
    #[inline]
    fn yx(&self) -> Self {
        Self::new(self.y(), self.x())
    }
}
