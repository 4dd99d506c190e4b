//! Conversions between vector kinds and to and from plain sequences.

use crate::{
    error::{Result, VectorError},
    num::Scalar,
    vector::Vector,
};
use std::array;

impl<S: Scalar, const N: usize> Vector<S, N> {
    /// Returns the components as an array in x, y, z, w order.
    #[inline]
    pub const fn to_array(&self) -> [S; N] {
        *self.components()
    }

    /// Creates a vector from a slice of components in x, y, z, w order.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidArgument`] if the slice does not have
    /// exactly `N` elements.
    pub fn from_slice(components: &[S]) -> Result<Self> {
        if components.len() != N {
            return Err(VectorError::invalid_argument(N, components.len()));
        }
        Ok(Self::from_array(array::from_fn(|i| components[i])))
    }

    /// Converts each component to another scalar kind. Conversion to `i32`
    /// truncates toward zero and saturates at the bounds of `i32`.
    #[inline]
    pub fn cast<T: Scalar>(&self) -> Vector<T, N> {
        Vector::from_array(
            self.components()
                .map(|component| T::from_f64(S::to_f64(component))),
        )
    }

    /// Converts the vector to a vector of `i32`s, truncating each component
    /// toward zero.
    #[inline]
    pub fn to_int(&self) -> Vector<i32, N> {
        self.cast()
    }

    /// Converts the vector to a vector of `f32`s.
    #[inline]
    pub fn to_float(&self) -> Vector<f32, N> {
        self.cast()
    }

    /// Converts the vector to a vector of `f64`s. Always lossless.
    #[inline]
    pub fn to_double(&self) -> Vector<f64, N> {
        self.cast()
    }
}

impl<S: Scalar, const N: usize> From<[S; N]> for Vector<S, N> {
    #[inline]
    fn from(components: [S; N]) -> Self {
        Self::from_array(components)
    }
}

impl<S: Scalar, const N: usize> From<Vector<S, N>> for [S; N] {
    #[inline]
    fn from(vector: Vector<S, N>) -> Self {
        vector.to_array()
    }
}

impl<S: Scalar, const N: usize> From<Vector<S, N>> for Vec<S> {
    fn from(vector: Vector<S, N>) -> Self {
        vector.to_array().to_vec()
    }
}

impl<S: Scalar, const N: usize> TryFrom<&[S]> for Vector<S, N> {
    type Error = VectorError;

    fn try_from(components: &[S]) -> Result<Self> {
        Self::from_slice(components)
    }
}

impl<S: Scalar, const N: usize> TryFrom<Vec<S>> for Vector<S, N> {
    type Error = VectorError;

    fn try_from(components: Vec<S>) -> Result<Self> {
        Self::from_slice(&components)
    }
}

macro_rules! impl_kind_conversion {
    ($from:ty => $to:ty) => {
        impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
            #[inline]
            fn from(vector: Vector<$from, N>) -> Self {
                vector.cast()
            }
        }
    };
}

impl_kind_conversion!(i32 => f32);
impl_kind_conversion!(i32 => f64);
impl_kind_conversion!(f32 => i32);
impl_kind_conversion!(f32 => f64);
impl_kind_conversion!(f64 => i32);
impl_kind_conversion!(f64 => f32);


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::vector::{Double3, Int2};
    use serde::{
        Deserialize,
        de::value::{Error, SeqDeserializer},
    };

    fn deserialize_from<'de, T, S>(components: Vec<S>) -> Result<T, Error>
    where
        T: Deserialize<'de>,
        S: serde::de::IntoDeserializer<'de, Error>,
    {
        T::deserialize(SeqDeserializer::<_, Error>::new(components.into_iter()))
    }

    #[test]
    fn deserializing_vector_from_sequence_of_right_length_works() {
        let v: Double3 = deserialize_from(vec![1.0, -2.0, 0.5]).unwrap();
        assert_eq!(v, Double3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn serialized_components_deserialize_to_same_vector() {
        let v = Int2::new(7, -3);
        let restored: Int2 = deserialize_from(Vec::from(v)).unwrap();
        assert_eq!(restored, v);
    }

    #[test]
    fn deserializing_vector_from_sequence_of_wrong_length_fails() {
        let error = deserialize_from::<Int2, _>(vec![1, 2, 3]).unwrap_err();
        assert_eq!(error.to_string(), "Expected 2 components, found 3");

        assert!(deserialize_from::<Double3, f64>(Vec::new()).is_err());
    }
}
