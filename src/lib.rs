//! Immutable 2D, 3D and 4D vectors over `i32`, `f32` and `f64` components.

#[macro_use]
mod macros;

pub mod capability;
pub mod convert;
pub mod direction;
pub mod dynamic;
pub mod error;
pub mod num;
pub mod vector;

pub use capability::{AxisRotation3D, Cross, Rotate2D, Rounding, Swizzle2, Swizzle3};
pub use direction::Direction;
pub use dynamic::{DynVector, ScalarValue};
pub use error::{Result, VectorError, VectorType};
pub use num::{Scalar, ScalarKind};
pub use vector::{
    Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4, Vector,
};
