//! Scalar kinds and their arithmetic.

use bytemuck::Pod;
use num_traits::{self as nt, AsPrimitive};
use std::fmt;

/// The kinds of scalar a vector can be built from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int32,
    Float32,
    Float64,
}

/// A scalar type that can be used for vector components.
///
/// Each kind defines its own arithmetic. Integer arithmetic wraps on overflow,
/// while floating point arithmetic follows IEEE-754. Operations that are
/// inherently floating point (lengths, angles, trigonometry) always go through
/// [`f64`] using [`to_f64`](Self::to_f64).
///
/// The arithmetic functions take no receiver so that they never collide with
/// the methods of the [`std::ops`] traits.
pub trait Scalar:
    Copy + Default + PartialOrd + fmt::Debug + fmt::Display + Pod + Send + Sync + 'static
{
    const KIND: ScalarKind;
    const ZERO: Self;
    const ONE: Self;

    fn add(lhs: Self, rhs: Self) -> Self;

    fn sub(lhs: Self, rhs: Self) -> Self;

    fn mul(lhs: Self, rhs: Self) -> Self;

    /// Divides `lhs` by `rhs` without checking `rhs` for zero. Callers are
    /// responsible for rejecting zero divisors with [`is_zero`](Self::is_zero)
    /// first.
    fn div(lhs: Self, rhs: Self) -> Self;

    /// Raises `base` to the power of `exponent`. The computation is always
    /// performed in `f64` and narrowed back to the kind, so for integers the
    /// result is the truncated floating point power.
    fn pow(base: Self, exponent: Self) -> Self;

    fn neg(value: Self) -> Self;

    fn abs(value: Self) -> Self;

    /// Whether the value is exactly zero (negative zero included).
    fn is_zero(value: Self) -> bool;

    /// Widens the value to `f64`. Lossless for all kinds.
    fn to_f64(value: Self) -> f64;

    /// Narrows an `f64` to this kind. For integers this truncates toward zero,
    /// saturates at the bounds and maps NaN to zero.
    fn from_f64(value: f64) -> Self;

    /// The largest integer not greater than the value, as an `i32`.
    fn floor_to_int(value: Self) -> i32;

    /// The smallest integer not less than the value, as an `i32`.
    fn ceil_to_int(value: Self) -> i32;

    /// The fractional part `value - floor(value)`. Integers are returned
    /// unchanged.
    fn fract(value: Self) -> Self;

    /// A bit pattern that is equal for two values if and only if they are
    /// considered structurally equal. All NaNs share one pattern, while
    /// `0.0` and `-0.0` differ.
    fn canonical_bits(value: Self) -> u64;

    /// Writes the value the way it appears inside a displayed vector. Floats
    /// are written with six decimals, and non-finite floats as Rust prints
    /// them (`inf`, `-inf`, `NaN`).
    fn fmt_component(value: Self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ScalarKind {
    /// The name used for vectors of this kind (`Int`, `Float` or `Double`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int32 => "Int",
            Self::Float32 => "Float",
            Self::Float64 => "Double",
        }
    }

    /// Whether the kind is a floating point kind.
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Int32;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn add(lhs: Self, rhs: Self) -> Self {
        lhs.wrapping_add(rhs)
    }

    #[inline]
    fn sub(lhs: Self, rhs: Self) -> Self {
        lhs.wrapping_sub(rhs)
    }

    #[inline]
    fn mul(lhs: Self, rhs: Self) -> Self {
        lhs.wrapping_mul(rhs)
    }

    #[inline]
    fn div(lhs: Self, rhs: Self) -> Self {
        // `i32::MIN / -1` wraps back to `i32::MIN`
        lhs.wrapping_div(rhs)
    }

    #[inline]
    fn pow(base: Self, exponent: Self) -> Self {
        let power: f64 = f64::from(base).powf(f64::from(exponent));
        power.as_()
    }

    #[inline]
    fn neg(value: Self) -> Self {
        value.wrapping_neg()
    }

    #[inline]
    fn abs(value: Self) -> Self {
        value.wrapping_abs()
    }

    #[inline]
    fn is_zero(value: Self) -> bool {
        nt::Zero::is_zero(&value)
    }

    #[inline]
    fn to_f64(value: Self) -> f64 {
        value.as_()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value.as_()
    }

    #[inline]
    fn floor_to_int(value: Self) -> i32 {
        value
    }

    #[inline]
    fn ceil_to_int(value: Self) -> i32 {
        value
    }

    #[inline]
    fn fract(value: Self) -> Self {
        value
    }

    #[inline]
    fn canonical_bits(value: Self) -> u64 {
        u64::from(value as u32)
    }

    fn fmt_component(value: Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value}")
    }
}

macro_rules! impl_float_scalar {
    ($f:ty, $kind:ident) => {
        impl Scalar for $f {
            const KIND: ScalarKind = ScalarKind::$kind;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn add(lhs: Self, rhs: Self) -> Self {
                lhs + rhs
            }

            #[inline]
            fn sub(lhs: Self, rhs: Self) -> Self {
                lhs - rhs
            }

            #[inline]
            fn mul(lhs: Self, rhs: Self) -> Self {
                lhs * rhs
            }

            #[inline]
            fn div(lhs: Self, rhs: Self) -> Self {
                lhs / rhs
            }

            #[inline]
            fn pow(base: Self, exponent: Self) -> Self {
                let power: f64 = Self::to_f64(base).powf(Self::to_f64(exponent));
                power.as_()
            }

            #[inline]
            fn neg(value: Self) -> Self {
                -value
            }

            #[inline]
            fn abs(value: Self) -> Self {
                nt::Float::abs(value)
            }

            #[inline]
            fn is_zero(value: Self) -> bool {
                nt::Zero::is_zero(&value)
            }

            #[inline]
            fn to_f64(value: Self) -> f64 {
                value.as_()
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value.as_()
            }

            #[inline]
            fn floor_to_int(value: Self) -> i32 {
                nt::Float::floor(value).as_()
            }

            #[inline]
            fn ceil_to_int(value: Self) -> i32 {
                nt::Float::ceil(value).as_()
            }

            #[inline]
            fn fract(value: Self) -> Self {
                value - nt::Float::floor(value)
            }

            #[inline]
            fn canonical_bits(value: Self) -> u64 {
                if value.is_nan() {
                    u64::from(<$f>::NAN.to_bits())
                } else {
                    u64::from(value.to_bits())
                }
            }

            fn fmt_component(value: Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{value:.6}")
            }
        }
    };
}

impl_float_scalar!(f32, Float32);
impl_float_scalar!(f64, Float64);
