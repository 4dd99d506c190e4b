//! Operations specific to 3-dimensional vectors.

use super::{Double3, Vector};
use crate::{
    capability::{AxisRotation3D, Cross, Swizzle3},
    num::Scalar,
};

impl<S: Scalar> Vector<S, 3> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(S::ONE, S::ZERO, S::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(S::ZERO, S::ONE, S::ZERO);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(S::ZERO, S::ZERO, S::ONE);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self::from_array([x, y, z])
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

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> S {
        self.components[2]
    }

    /// Computes the unsigned angle in radians between this vector and another,
    /// in the range `[0, pi]`.
    ///
    /// Uses `atan2(|a x b|, a . b)`, which stays accurate for nearly parallel
    /// and nearly antiparallel vectors where `acos` loses precision. Computed
    /// in `f64` regardless of the kind.
    pub fn angle(&self, other: &Self) -> f64 {
        let a = self.to_double();
        let b = other.to_double();
        a.cross(&b).length().atan2(a.dot(&b))
    }
}

impl<S: Scalar> Cross for Vector<S, 3> {
    fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = other.components;
        Self::new(
            S::sub(S::mul(ay, bz), S::mul(az, by)),
            S::sub(S::mul(az, bx), S::mul(ax, bz)),
            S::sub(S::mul(ax, by), S::mul(ay, bx)),
        )
    }
}

impl<S: Scalar> AxisRotation3D for Vector<S, 3> {
    fn rotate_x(&self, angle: f64) -> Double3 {
        let [x, y, z] = self.to_f64_components();
        let (sin, cos) = angle.sin_cos();
        Double3::new(x, y * cos - z * sin, y * sin + z * cos)
    }

    fn rotate_y(&self, angle: f64) -> Double3 {
        let [x, y, z] = self.to_f64_components();
        let (sin, cos) = angle.sin_cos();
        Double3::new(x * cos + z * sin, y, -x * sin + z * cos)
    }

    fn rotate_z(&self, angle: f64) -> Double3 {
        let [x, y, z] = self.to_f64_components();
        let (sin, cos) = angle.sin_cos();
        Double3::new(x * cos - y * sin, x * sin + y * cos, z)
    }
}

impl<S: Scalar> Swizzle3 for Vector<S, 3> {
    #[inline]
    fn zyx(&self) -> Self {
        Self::new(self.z(), self.y(), self.x())
    }
}
