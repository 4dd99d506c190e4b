//! Vectors whose kind and dimension are only known at run time.
//!
//! [`DynVector`] wraps any of the nine concrete vector types and forwards
//! operations to it. Operand types that the static API rules out at compile
//! time are rejected here with [`VectorError::TypeMismatch`] before any
//! arithmetic is performed.

use crate::{
    capability::Cross,
    error::{Result, VectorError, VectorType},
    num::{Scalar, ScalarKind},
    vector::{Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4, Vector},
};
use std::fmt;

/// A single scalar of any kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue {
    Int(i32),
    Float(f32),
    Double(f64),
}

/// A vector of any kind and dimension.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DynVector {
    Int2(Int2),
    Int3(Int3),
    Int4(Int4),
    Float2(Float2),
    Float3(Float3),
    Float4(Float4),
    Double2(Double2),
    Double3(Double3),
    Double4(Double4),
}

/// Evaluates the body with the wrapped vector bound to `$v`, whatever its
/// type.
macro_rules! with_vector {
    ($value:expr, |$v:ident| $body:expr) => {
        match $value {
            DynVector::Int2($v) => $body,
            DynVector::Int3($v) => $body,
            DynVector::Int4($v) => $body,
            DynVector::Float2($v) => $body,
            DynVector::Float3($v) => $body,
            DynVector::Float4($v) => $body,
            DynVector::Double2($v) => $body,
            DynVector::Double3($v) => $body,
            DynVector::Double4($v) => $body,
        }
    };
}

/// Evaluates the body if both operands wrap the same vector type, and fails
/// with a type mismatch otherwise.
macro_rules! with_same_type {
    ($lhs:expr, $rhs:expr, |$a:ident, $b:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (DynVector::Int2($a), DynVector::Int2($b)) => $body,
            (DynVector::Int3($a), DynVector::Int3($b)) => $body,
            (DynVector::Int4($a), DynVector::Int4($b)) => $body,
            (DynVector::Float2($a), DynVector::Float2($b)) => $body,
            (DynVector::Float3($a), DynVector::Float3($b)) => $body,
            (DynVector::Float4($a), DynVector::Float4($b)) => $body,
            (DynVector::Double2($a), DynVector::Double2($b)) => $body,
            (DynVector::Double3($a), DynVector::Double3($b)) => $body,
            (DynVector::Double4($a), DynVector::Double4($b)) => $body,
            (lhs, rhs) => Err(VectorError::type_mismatch(
                lhs.vector_type(),
                rhs.vector_type(),
            )),
        }
    };
}

/// Evaluates the body if the scalar has the same kind as the vector, and
/// fails with a type mismatch between the two kinds otherwise.
macro_rules! with_same_kind_scalar {
    ($vector:expr, $scalar:expr, |$v:ident, $s:ident| $body:expr) => {
        match ($vector, $scalar) {
            (DynVector::Int2($v), ScalarValue::Int($s)) => $body,
            (DynVector::Int3($v), ScalarValue::Int($s)) => $body,
            (DynVector::Int4($v), ScalarValue::Int($s)) => $body,
            (DynVector::Float2($v), ScalarValue::Float($s)) => $body,
            (DynVector::Float3($v), ScalarValue::Float($s)) => $body,
            (DynVector::Float4($v), ScalarValue::Float($s)) => $body,
            (DynVector::Double2($v), ScalarValue::Double($s)) => $body,
            (DynVector::Double3($v), ScalarValue::Double($s)) => $body,
            (DynVector::Double4($v), ScalarValue::Double($s)) => $body,
            (vector, scalar) => Err(VectorError::type_mismatch(
                VectorType::new(vector.kind(), 1),
                VectorType::new(scalar.kind(), 1),
            )),
        }
    };
}

impl ScalarValue {
    /// The kind of the scalar.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int32,
            Self::Float(_) => ScalarKind::Float32,
            Self::Double(_) => ScalarKind::Float64,
        }
    }

    /// The value converted to `f64`.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Self::Int(value) => f64::from(value),
            Self::Float(value) => f64::from(value),
            Self::Double(value) => value,
        }
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for ScalarValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(value) => Scalar::fmt_component(value, f),
            Self::Float(value) => Scalar::fmt_component(value, f),
            Self::Double(value) => Scalar::fmt_component(value, f),
        }
    }
}

const fn type_of<S: Scalar, const N: usize>(_: &Vector<S, N>) -> VectorType {
    Vector::<S, N>::vector_type()
}

impl DynVector {
    /// The kind and dimension of the wrapped vector.
    pub fn vector_type(&self) -> VectorType {
        with_vector!(self, |v| type_of(v))
    }

    pub fn kind(&self) -> ScalarKind {
        self.vector_type().kind
    }

    pub fn dimension(&self) -> usize {
        self.vector_type().dimension
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        with_same_type!(self, other, |a, b| Ok(a.add(b).into()))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        with_same_type!(self, other, |a, b| Ok(a.subtract(b).into()))
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        with_same_type!(self, other, |a, b| Ok(a.multiply(b).into()))
    }

    /// # Errors
    /// Returns [`VectorError::TypeMismatch`] if the operands have different
    /// types and [`VectorError::DivisionByZero`] if any component of the
    /// divisor is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        with_same_type!(self, other, |a, b| a.divide(b).map(Into::into))
    }

    pub fn pow(&self, other: &Self) -> Result<Self> {
        with_same_type!(self, other, |a, b| Ok(a.pow(b).into()))
    }

    pub fn add_scalar(&self, scalar: ScalarValue) -> Result<Self> {
        with_same_kind_scalar!(self, scalar, |v, s| Ok(v.add_scalar(s).into()))
    }

    pub fn subtract_scalar(&self, scalar: ScalarValue) -> Result<Self> {
        with_same_kind_scalar!(self, scalar, |v, s| Ok(v.subtract_scalar(s).into()))
    }

    pub fn multiply_scalar(&self, scalar: ScalarValue) -> Result<Self> {
        with_same_kind_scalar!(self, scalar, |v, s| Ok(v.multiply_scalar(s).into()))
    }

    pub fn divide_scalar(&self, scalar: ScalarValue) -> Result<Self> {
        with_same_kind_scalar!(self, scalar, |v, s| v.divide_scalar(s).map(Into::into))
    }

    pub fn pow_scalar(&self, scalar: ScalarValue) -> Result<Self> {
        with_same_kind_scalar!(self, scalar, |v, s| Ok(v.pow_scalar(s).into()))
    }

    pub fn negate(&self) -> Self {
        with_vector!(self, |v| v.negate().into())
    }

    pub fn abs(&self) -> Self {
        with_vector!(self, |v| v.abs().into())
    }

    /// Normalizes the vector. The result always wraps a `Double` vector of
    /// the same dimension.
    pub fn normalize(&self) -> Result<Self> {
        with_vector!(self, |v| v.normalize().map(Into::into))
    }

    pub fn dot(&self, other: &Self) -> Result<ScalarValue> {
        with_same_type!(self, other, |a, b| Ok(a.dot(b).into()))
    }

    /// Computes the angle between two vectors of the same type. Signed for 2D
    /// vectors and unsigned otherwise.
    ///
    /// # Errors
    /// Returns [`VectorError::TypeMismatch`] if the operands have different
    /// types, and [`VectorError::InvalidOperation`] for 4D vectors when
    /// either has zero length.
    pub fn angle(&self, other: &Self) -> Result<f64> {
        match (self, other) {
            (Self::Int2(a), Self::Int2(b)) => Ok(a.angle(b)),
            (Self::Int3(a), Self::Int3(b)) => Ok(a.angle(b)),
            (Self::Int4(a), Self::Int4(b)) => a.angle(b),
            (Self::Float2(a), Self::Float2(b)) => Ok(a.angle(b)),
            (Self::Float3(a), Self::Float3(b)) => Ok(a.angle(b)),
            (Self::Float4(a), Self::Float4(b)) => a.angle(b),
            (Self::Double2(a), Self::Double2(b)) => Ok(a.angle(b)),
            (Self::Double3(a), Self::Double3(b)) => Ok(a.angle(b)),
            (Self::Double4(a), Self::Double4(b)) => a.angle(b),
            (lhs, rhs) => Err(VectorError::type_mismatch(
                lhs.vector_type(),
                rhs.vector_type(),
            )),
        }
    }

    pub fn length(&self) -> f64 {
        with_vector!(self, |v| v.length())
    }

    pub fn length_squared(&self) -> f64 {
        with_vector!(self, |v| v.length_squared())
    }

    pub fn distance(&self, other: &Self) -> Result<f64> {
        with_same_type!(self, other, |a, b| Ok(a.distance(b)))
    }

    pub fn distance_squared(&self, other: &Self) -> Result<f64> {
        with_same_type!(self, other, |a, b| Ok(a.distance_squared(b)))
    }

    /// Computes the cross product of two 3D vectors of the same kind.
    ///
    /// # Errors
    /// Returns [`VectorError::TypeMismatch`] if this vector is not 3D or the
    /// operands have different types.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Int3(a), Self::Int3(b)) => Ok(a.cross(b).into()),
            (Self::Float3(a), Self::Float3(b)) => Ok(a.cross(b).into()),
            (Self::Double3(a), Self::Double3(b)) => Ok(a.cross(b).into()),
            (Self::Int3(_) | Self::Float3(_) | Self::Double3(_), rhs) => Err(
                VectorError::type_mismatch(self.vector_type(), rhs.vector_type()),
            ),
            (lhs, _) => Err(VectorError::type_mismatch(
                VectorType::new(lhs.kind(), 3),
                lhs.vector_type(),
            )),
        }
    }

    /// The components of the vector, in x, y, z, w order.
    pub fn to_scalars(&self) -> Vec<ScalarValue> {
        with_vector!(self, |v| v
            .components()
            .iter()
            .map(|&component| ScalarValue::from(component))
            .collect())
    }
}

macro_rules! impl_dyn_vector_conversions {
    ($($variant:ident),*) => {$(
        impl From<$variant> for DynVector {
            fn from(vector: $variant) -> Self {
                Self::$variant(vector)
            }
        }

        impl TryFrom<DynVector> for $variant {
            type Error = VectorError;

            fn try_from(vector: DynVector) -> Result<Self> {
                match vector {
                    DynVector::$variant(vector) => Ok(vector),
                    other => Err(VectorError::type_mismatch(
                        Self::vector_type(),
                        other.vector_type(),
                    )),
                }
            }
        }
    )*};
}

impl_dyn_vector_conversions!(
    Int2, Int3, Int4, Float2, Float3, Float4, Double2, Double3, Double4
);

impl fmt::Display for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_vector!(self, |v| fmt::Display::fmt(v, f))
    }
}
