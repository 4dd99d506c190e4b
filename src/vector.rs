//! Vectors.

mod dim2;
mod dim3;
mod dim4;

use crate::{
    capability::Rounding,
    error::{Result, VectorError, VectorType},
    num::Scalar,
};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    hash::{Hash, Hasher},
    ops::Index,
};

/// An immutable vector with `N` components of scalar kind `S`.
///
/// Vectors are plain values: every operation produces a new vector and
/// nothing is ever modified in place. Binary operations require both operands
/// to have the same kind and dimension, which the type parameters enforce.
///
/// Two vectors are equal when all their components are structurally equal.
/// For the floating point kinds this means bitwise equality after folding all
/// NaNs together, so `NaN == NaN` and `0.0 != -0.0`. Use the [`approx`]
/// traits for tolerance-based comparison.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "Vec<S>",
        try_from = "Vec<S>",
        bound(
            serialize = "S: Scalar + serde::Serialize",
            deserialize = "S: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy)]
pub struct Vector<S, const N: usize> {
    components: [S; N],
}

/// A 2-dimensional vector of `i32`s.
pub type Int2 = Vector<i32, 2>;
/// A 3-dimensional vector of `i32`s.
pub type Int3 = Vector<i32, 3>;
/// A 4-dimensional vector of `i32`s.
pub type Int4 = Vector<i32, 4>;

/// A 2-dimensional vector of `f32`s.
pub type Float2 = Vector<f32, 2>;
/// A 3-dimensional vector of `f32`s.
pub type Float3 = Vector<f32, 3>;
/// A 4-dimensional vector of `f32`s.
pub type Float4 = Vector<f32, 4>;

/// A 2-dimensional vector of `f64`s.
pub type Double2 = Vector<f64, 2>;
/// A 3-dimensional vector of `f64`s.
pub type Double3 = Vector<f64, 3>;
/// A 4-dimensional vector of `f64`s.
pub type Double4 = Vector<f64, 4>;

const COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

impl<S: Scalar, const N: usize> Vector<S, N> {
    /// The number of components.
    pub const DIMENSION: usize = N;

    /// The vector with all components zero.
    pub const ZERO: Self = Self::same(S::ZERO);

    /// The vector with all components one.
    pub const ONE: Self = Self::same(S::ONE);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_array(components: [S; N]) -> Self {
        Self { components }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: S) -> Self {
        Self::from_array([value; N])
    }

    /// The components of the vector, in x, y, z, w order.
    #[inline]
    pub const fn components(&self) -> &[S; N] {
        &self.components
    }

    /// The kind and dimension of this vector type.
    #[inline]
    pub const fn vector_type() -> VectorType {
        VectorType::of::<S, N>()
    }

    /// Adds each component of another vector to the corresponding component
    /// of this vector.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_mapped(other, S::add)
    }

    /// Subtracts each component of another vector from the corresponding
    /// component of this vector.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_mapped(other, S::sub)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        self.zip_mapped(other, S::mul)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if any component of `other` is
    /// zero, even when the remaining components are not.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        if other.has_zero_component() {
            return Err(VectorError::division_by_zero(other));
        }
        Ok(self.zip_mapped(other, S::div))
    }

    /// Raises each component to the power of the corresponding component in
    /// another vector.
    #[inline]
    pub fn pow(&self, other: &Self) -> Self {
        self.zip_mapped(other, S::pow)
    }

    /// Adds the given scalar to every component.
    #[inline]
    pub fn add_scalar(&self, scalar: S) -> Self {
        self.mapped(|component| S::add(component, scalar))
    }

    /// Subtracts the given scalar from every component.
    #[inline]
    pub fn subtract_scalar(&self, scalar: S) -> Self {
        self.mapped(|component| S::sub(component, scalar))
    }

    /// Multiplies every component by the given scalar.
    #[inline]
    pub fn multiply_scalar(&self, scalar: S) -> Self {
        self.mapped(|component| S::mul(component, scalar))
    }

    /// Divides every component by the given scalar.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
    pub fn divide_scalar(&self, scalar: S) -> Result<Self> {
        if S::is_zero(scalar) {
            return Err(VectorError::division_by_zero(scalar));
        }
        Ok(self.mapped(|component| S::div(component, scalar)))
    }

    /// Raises every component to the power of the given scalar.
    #[inline]
    pub fn pow_scalar(&self, scalar: S) -> Self {
        self.mapped(|component| S::pow(component, scalar))
    }

    /// Negates every component.
    #[inline]
    pub fn negate(&self) -> Self {
        self.mapped(S::neg)
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn abs(&self) -> Self {
        self.mapped(S::abs)
    }

    /// Computes the unit vector pointing in the same direction as this one.
    /// The result is always a vector of `f64`s, whatever the kind of this
    /// vector.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidOperation`] if the length of the vector is
    /// exactly zero.
    pub fn normalize(&self) -> Result<Vector<f64, N>> {
        let length = self.length();
        if length == 0.0 {
            return Err(VectorError::invalid_operation(
                "normalize a zero-length vector",
            ));
        }
        Ok(Vector::from_array(
            self.to_f64_components().map(|component| component / length),
        ))
    }

    /// Computes the dot product of this vector with another, using the
    /// arithmetic of the scalar kind.
    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.components
            .iter()
            .zip(&other.components)
            .fold(S::ZERO, |sum, (&a, &b)| S::add(sum, S::mul(a, b)))
    }

    /// Computes the length (Euclidean norm) of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector. The sum is
    /// accumulated in `f64`, so integer vectors never overflow.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.to_f64_components()
            .iter()
            .map(|component| component * component)
            .sum()
    }

    /// Computes the Euclidean distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Computes the square of the Euclidean distance between this vector and
    /// another. The differences are taken in `f64`.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.to_f64_components()
            .iter()
            .zip(other.to_f64_components())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(S) -> S) -> Self {
        Self::from_array(self.components.map(f))
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components in this and another vector.
    #[inline]
    pub fn zip_mapped(&self, other: &Self, mut f: impl FnMut(S, S) -> S) -> Self {
        Self::from_array(array::from_fn(|i| {
            f(self.components[i], other.components[i])
        }))
    }

    #[inline]
    pub(crate) fn to_f64_components(&self) -> [f64; N] {
        self.components.map(S::to_f64)
    }

    fn has_zero_component(&self) -> bool {
        self.components.iter().any(|&component| S::is_zero(component))
    }
}

impl<S: Scalar, const N: usize> Rounding for Vector<S, N> {
    type Rounded = Vector<i32, N>;

    #[inline]
    fn floor(&self) -> Vector<i32, N> {
        Vector::from_array(self.components.map(S::floor_to_int))
    }

    #[inline]
    fn ceil(&self) -> Vector<i32, N> {
        Vector::from_array(self.components.map(S::ceil_to_int))
    }

    #[inline]
    fn fract(&self) -> Self {
        self.mapped(S::fract)
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<S: Scalar, const N: usize> PartialEq for Vector<S, N> {
    fn eq(&self, other: &Self) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(&a, &b)| S::canonical_bits(a) == S::canonical_bits(b))
    }
}

impl<S: Scalar, const N: usize> Eq for Vector<S, N> {}

impl<S: Scalar, const N: usize> Hash for Vector<S, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &component in &self.components {
            S::canonical_bits(component).hash(state);
        }
    }
}

// SAFETY: `Vector` is a transparent wrapper around an array of `Pod` scalars
unsafe impl<S: Scalar, const N: usize> Zeroable for Vector<S, N> {}
unsafe impl<S: Scalar, const N: usize> Pod for Vector<S, N> {}

#[cfg(feature = "arbitrary")]
impl<'a, S, const N: usize> arbitrary::Arbitrary<'a> for Vector<S, N>
where
    S: Scalar + arbitrary::Arbitrary<'a>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from_array(<[S; N] as arbitrary::Arbitrary<'a>>::arbitrary(u)?))
    }
}

impl<S: Scalar, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl_binop!(Add, add, [S: Scalar, const N: usize], Vector<S, N>, Vector<S, N>, Vector<S, N>, |a, b| {
    a.zip_mapped(b, S::add)
});

impl_binop!(Sub, sub, [S: Scalar, const N: usize], Vector<S, N>, Vector<S, N>, Vector<S, N>, |a, b| {
    a.zip_mapped(b, S::sub)
});

impl_binop!(Mul, mul, [S: Scalar, const N: usize], Vector<S, N>, Vector<S, N>, Vector<S, N>, |a, b| {
    a.zip_mapped(b, S::mul)
});

impl_binop!(Add, add, [S: Scalar, const N: usize], Vector<S, N>, S, Vector<S, N>, |a, b| {
    a.add_scalar(*b)
});

impl_binop!(Sub, sub, [S: Scalar, const N: usize], Vector<S, N>, S, Vector<S, N>, |a, b| {
    a.subtract_scalar(*b)
});

impl_binop!(Mul, mul, [S: Scalar, const N: usize], Vector<S, N>, S, Vector<S, N>, |a, b| {
    a.multiply_scalar(*b)
});

impl_binop!(Mul, mul, [const N: usize], i32, Vector<i32, N>, Vector<i32, N>, |a, b| {
    b.multiply_scalar(*a)
});

impl_binop!(Mul, mul, [const N: usize], f32, Vector<f32, N>, Vector<f32, N>, |a, b| {
    b.multiply_scalar(*a)
});

impl_binop!(Mul, mul, [const N: usize], f64, Vector<f64, N>, Vector<f64, N>, |a, b| {
    b.multiply_scalar(*a)
});

impl_unary_op!(Neg, neg, [S: Scalar, const N: usize], Vector<S, N>, Vector<S, N>, |val| {
    val.negate()
});

impl_approx_eq_for_float_vector!(f32);
impl_approx_eq_for_float_vector!(f64);

impl<S: Scalar, const N: usize> fmt::Display for Vector<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::vector_type())?;
        for (i, &component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            S::fmt_component(component, f)?;
        }
        f.write_str(")")
    }
}

impl<S: Scalar, const N: usize> fmt::Debug for Vector<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::vector_type().to_string();
        let mut debug = f.debug_struct(&name);
        for (field, component) in COMPONENT_NAMES.iter().zip(&self.components) {
            debug.field(field, component);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const EPSILON: f64 = 1e-12;

    // === Arithmetic ===

    #[test]
    fn adding_and_subtracting_int_vectors_works() {
        let a = Int3::new(1, -2, 3);
        let b = Int3::new(4, 5, -6);
        assert_eq!(a.add(&b), Int3::new(5, 3, -3));
        assert_eq!(a.subtract(&b), Int3::new(-3, -7, 9));
        assert_eq!(a + b, Int3::new(5, 3, -3));
        assert_eq!(&a - &b, Int3::new(-3, -7, 9));
    }

    #[test]
    fn multiplying_vectors_is_componentwise() {
        let a = Double2::new(1.5, -2.0);
        let b = Double2::new(2.0, 3.0);
        assert_eq!(a.multiply(&b), Double2::new(3.0, -6.0));
        assert_eq!(a * b, Double2::new(3.0, -6.0));
    }

    #[test]
    fn int_arithmetic_wraps_on_overflow() {
        let a = Int2::new(i32::MAX, i32::MIN);
        assert_eq!(a.add_scalar(1), Int2::new(i32::MIN, i32::MIN + 1));
        assert_eq!(a.negate(), Int2::new(-i32::MAX, i32::MIN));
    }

    #[test]
    fn dividing_int_vectors_truncates() {
        let a = Int2::new(7, -7);
        assert_eq!(a.divide(&Int2::new(2, 2)).unwrap(), Int2::new(3, -3));
        assert_eq!(a.divide_scalar(3).unwrap(), Int2::new(2, -2));
    }

    #[test]
    fn dividing_by_vector_with_any_zero_component_fails() {
        let result = Int2::new(4, 6).divide(&Int2::new(2, 0));
        assert!(matches!(result, Err(VectorError::DivisionByZero { .. })));

        let result = Int2::new(1, 2).divide(&Int2::new(0, 1));
        assert!(matches!(result, Err(VectorError::DivisionByZero { .. })));

        let result = Float4::new(1.0, 2.0, 3.0, 4.0).divide(&Float4::new(1.0, 1.0, -0.0, 1.0));
        assert!(matches!(result, Err(VectorError::DivisionByZero { .. })));
    }

    #[test]
    fn division_by_zero_error_names_divisor() {
        let error = Int2::new(4, 6).divide(&Int2::new(2, 0)).unwrap_err();
        assert_eq!(
            error,
            VectorError::DivisionByZero {
                divisor: "Int2(2, 0)".to_string()
            }
        );
    }

    #[test]
    fn dividing_by_zero_scalar_fails() {
        assert!(matches!(
            Double3::new(1.0, 2.0, 3.0).divide_scalar(0.0),
            Err(VectorError::DivisionByZero { .. })
        ));
        assert!(matches!(
            Int4::ONE.divide_scalar(0),
            Err(VectorError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn dividing_float_vectors_works() {
        let a = Float3::new(1.0, 4.0, -9.0);
        let quotient = a.divide(&Float3::new(2.0, 8.0, 3.0)).unwrap();
        assert_eq!(quotient, Float3::new(0.5, 0.5, -3.0));
    }

    #[test]
    fn raising_int_vector_to_power_truncates() {
        let a = Int3::new(2, 3, 2);
        assert_eq!(a.pow(&Int3::new(3, 2, -1)), Int3::new(8, 9, 0));
        assert_eq!(a.pow_scalar(2), Int3::new(4, 9, 4));
    }

    #[test]
    fn raising_float_vector_to_power_works() {
        let a = Double2::new(4.0, 9.0);
        assert_abs_diff_eq!(a.pow_scalar(0.5), Double2::new(2.0, 3.0), epsilon = EPSILON);
        assert_abs_diff_eq!(
            a.pow(&Double2::new(1.0, 0.0)),
            Double2::new(4.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn scalar_arithmetic_broadcasts_to_all_components() {
        let a = Float2::new(1.0, 2.0);
        assert_eq!(a.add_scalar(1.0), Float2::new(2.0, 3.0));
        assert_eq!(a.subtract_scalar(1.0), Float2::new(0.0, 1.0));
        assert_eq!(a.multiply_scalar(3.0), Float2::new(3.0, 6.0));
        assert_eq!(a.divide_scalar(2.0).unwrap(), Float2::new(0.5, 1.0));
        assert_eq!(a + 1.0, Float2::new(2.0, 3.0));
        assert_eq!(&a - 1.0, Float2::new(0.0, 1.0));
        assert_eq!(a * 3.0, Float2::new(3.0, 6.0));
        assert_eq!(3.0 * a, Float2::new(3.0, 6.0));
        assert_eq!(2 * Int2::new(1, 2), Int2::new(2, 4));
        assert_eq!(2.0 * &Double2::new(1.0, 2.0), Double2::new(2.0, 4.0));
    }

    #[test]
    fn negating_and_taking_abs_work() {
        let a = Int4::new(-1, 2, -3, 4);
        assert_eq!(a.negate(), Int4::new(1, -2, 3, -4));
        assert_eq!(-a, Int4::new(1, -2, 3, -4));
        assert_eq!(-&a, Int4::new(1, -2, 3, -4));
        assert_eq!(a.abs(), Int4::new(1, 2, 3, 4));
    }

    // === Norms ===

    #[test]
    fn computing_int_vector_length_works() {
        let v = Int2::new(3, 4);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn int_vector_length_does_not_overflow() {
        let v = Int2::new(i32::MAX, i32::MAX);
        let expected = f64::from(i32::MAX) * std::f64::consts::SQRT_2;
        assert_relative_eq!(v.length(), expected, max_relative = 1e-12);
    }

    #[test]
    fn computing_distance_works() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 6.0, 3.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.distance_squared(&b), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn int_distance_does_not_overflow() {
        let a = Int2::new(i32::MAX, 0);
        let b = Int2::new(i32::MIN, 0);
        assert_relative_eq!(
            a.distance(&b),
            f64::from(i32::MAX) - f64::from(i32::MIN),
            max_relative = 1e-12
        );
    }

    #[test]
    fn dot_product_uses_scalar_arithmetic() {
        assert_eq!(Int3::new(1, 2, 3).dot(&Int3::new(4, 5, 6)), 32);
        assert_eq!(Float2::new(0.5, 2.0).dot(&Float2::new(4.0, 0.25)), 2.5_f32);
        assert_eq!(
            Int2::new(i32::MAX, 0).dot(&Int2::new(2, 0)),
            i32::MAX.wrapping_mul(2)
        );
    }

    #[test]
    fn normalizing_double_vector_works() {
        let normalized = Double2::new(1.0, 1.0).normalize().unwrap();
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(normalized, Double2::new(expected, expected), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_int_and_float_vectors_gives_double_vectors() {
        let normalized: Double3 = Int3::new(0, 3, 4).normalize().unwrap();
        assert_abs_diff_eq!(normalized, Double3::new(0.0, 0.6, 0.8), epsilon = EPSILON);

        let normalized: Double4 = Float4::new(2.0, 0.0, 0.0, 0.0).normalize().unwrap();
        assert_eq!(normalized, Double4::UNIT_X);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert!(matches!(
            Int2::ZERO.normalize(),
            Err(VectorError::InvalidOperation { .. })
        ));
        assert!(matches!(
            Float3::ZERO.normalize(),
            Err(VectorError::InvalidOperation { .. })
        ));
        assert!(matches!(
            Double4::ZERO.normalize(),
            Err(VectorError::InvalidOperation { .. })
        ));
    }

    // === Rounding ===

    #[test]
    fn flooring_and_ceiling_float_vectors_gives_int_vectors() {
        let v = Double3::new(1.5, -1.5, 2.0);
        assert_eq!(v.floor(), Int3::new(1, -2, 2));
        assert_eq!(v.ceil(), Int3::new(2, -1, 2));

        let v = Float2::new(-0.25, 7.75);
        assert_eq!(v.floor(), Int2::new(-1, 7));
        assert_eq!(v.ceil(), Int2::new(0, 8));
    }

    #[test]
    fn fract_of_float_vector_works() {
        let v = Double2::new(1.25, -1.25);
        assert_abs_diff_eq!(v.fract(), Double2::new(0.25, 0.75), epsilon = EPSILON);
    }

    #[test]
    fn rounding_int_vector_is_identity() {
        let v = Int3::new(-4, 0, 9);
        assert_eq!(v.floor(), v);
        assert_eq!(v.ceil(), v);
        assert_eq!(v.fract(), v);
    }

    // === Equality, hashing and formatting ===

    #[test]
    fn float_vector_equality_is_structural() {
        let nan = Float2::new(f32::NAN, 1.0);
        assert_eq!(nan, nan);
        assert_ne!(Double2::new(0.0, 1.0), Double2::new(-0.0, 1.0));
    }

    #[test]
    fn equal_vectors_hash_equally() {
        let mut set = HashSet::new();
        set.insert(Double4::new(1.0, 2.0, 3.0, f64::NAN));
        set.insert(Double4::new(1.0, 2.0, 3.0, f64::NAN));
        set.insert(Double4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn vectors_display_with_kind_and_dimension() {
        assert_eq!(Int2::new(1, -2).to_string(), "Int2(1, -2)");
        assert_eq!(
            Float3::new(1.0, 0.5, 0.0).to_string(),
            "Float3(1.000000, 0.500000, 0.000000)"
        );
        assert_eq!(
            Double4::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "Double4(1.000000, 2.000000, 3.000000, 4.000000)"
        );
    }

    #[test]
    fn vectors_debug_format_with_named_components() {
        assert_eq!(format!("{:?}", Int3::new(1, 2, 3)), "Int3 { x: 1, y: 2, z: 3 }");
    }

    #[test]
    fn vector_indexing_works() {
        let v = Int4::new(1, 2, 3, 4);
        assert_eq!(v[0], 1);
        assert_eq!(v[3], 4);
    }

    #[test]
    #[should_panic]
    fn indexing_vector_out_of_bounds_panics() {
        let v = Int2::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn vectors_can_be_viewed_as_component_bytes() {
        let vectors = [Float2::new(1.0, 2.0), Float2::new(3.0, 4.0)];
        let components: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(components, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn default_vector_is_zero() {
        assert_eq!(Double3::default(), Double3::ZERO);
        assert_eq!(Int2::ONE, Int2::same(1));
    }

    // === Properties ===

    fn int_components() -> impl Strategy<Value = i32> {
        -100_000..100_000
    }

    fn float_components() -> impl Strategy<Value = f64> {
        -1e6..1e6
    }

    proptest! {
        #[test]
        fn adding_then_subtracting_int_vector_restores_original(
            a in prop::array::uniform3(any::<i32>()),
            b in prop::array::uniform3(any::<i32>()),
        ) {
            let a = Int3::from_array(a);
            let b = Int3::from_array(b);
            prop_assert_eq!(a.add(&b).subtract(&b), a);
        }
    }

    proptest! {
        #[test]
        fn adding_then_subtracting_double_vector_restores_original(
            a in prop::array::uniform4(float_components()),
            b in prop::array::uniform4(float_components()),
        ) {
            let a = Double4::from_array(a);
            let b = Double4::from_array(b);
            prop_assert!(approx::abs_diff_eq!(a.add(&b).subtract(&b), a, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn adding_then_subtracting_float_vector_restores_original(
            a in prop::array::uniform3(-1e3_f32..1e3),
            b in prop::array::uniform3(-1e3_f32..1e3),
        ) {
            let a = Float3::from_array(a);
            let b = Float3::from_array(b);
            prop_assert!(approx::abs_diff_eq!(a.add(&b).subtract(&b), a, epsilon = 1e-3));
            prop_assert!(approx::abs_diff_eq!(a + b - b, a, epsilon = 1e-3));
        }
    }

    proptest! {
        #[test]
        fn double_negation_is_identity(
            a in prop::array::uniform2(any::<i32>()),
            b in prop::array::uniform3(float_components()),
        ) {
            let a = Int2::from_array(a);
            let b = Double3::from_array(b);
            prop_assert_eq!(a.negate().negate(), a);
            prop_assert_eq!(b.negate().negate(), b);
        }
    }

    proptest! {
        #[test]
        fn normalized_vector_has_unit_length(
            a in prop::array::uniform3(int_components()),
        ) {
            let a = Int3::from_array(a);
            if a.length() == 0.0 {
                prop_assert!(a.normalize().is_err());
            } else {
                let length = a.normalize().unwrap().length();
                prop_assert!(approx::abs_diff_eq!(length, 1.0, epsilon = 1e-12));
            }
        }
    }

    proptest! {
        #[test]
        fn division_fails_exactly_when_a_divisor_component_is_zero(
            a in prop::array::uniform2(-3..3),
            b in prop::array::uniform2(-3..3),
        ) {
            let a = Int2::from_array(a);
            let b = Int2::from_array(b);
            let has_zero = b.components().contains(&0);
            prop_assert_eq!(a.divide(&b).is_err(), has_zero);
        }
    }
}
