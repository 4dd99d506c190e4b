//! Utility macros.

/// Implements a binary operator for all combinations of owned and borrowed
/// operands. The generic parameters of the impl are given in brackets.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($generics:tt)*], $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($generics:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] for vectors of
/// the given floating point kind by comparing components pairwise.
macro_rules! impl_approx_eq_for_float_vector {
    ($f:ty) => {
        impl<const N: usize> ::approx::AbsDiffEq for $crate::vector::Vector<$f, N> {
            type Epsilon = $f;

            fn default_epsilon() -> Self::Epsilon {
                <$f as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.components()
                    .iter()
                    .zip(other.components())
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<const N: usize> ::approx::RelativeEq for $crate::vector::Vector<$f, N> {
            fn default_max_relative() -> Self::Epsilon {
                <$f as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.components()
                    .iter()
                    .zip(other.components())
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}
