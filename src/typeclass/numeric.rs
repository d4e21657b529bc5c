//! Numeric contracts and their lifts into witnessed containers.
//!
//! A numeric witness names a set of arithmetic operations over some value
//! type. The same container lift ([`add`], [`difference`], [`product`],
//! [`divide`]) then works for any container witness and any numeric witness:
//! both operands present yields the combined value, otherwise the result is
//! absent (or empty).
//!
//! # Numeric Witnesses
//!
//! - [`TNum`]: arithmetic through the standard operator traits
//! - [`TString`]: concatenation as addition over `String`
//!
//! # Division
//!
//! [`Divisible`] follows the operator semantics of the value type, so an
//! integer division by zero panics just like `/` does. [`divide_checked`]
//! goes through [`CheckedDivisible`] instead and turns a failed division into
//! an absent result.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FVec, TNum, TString, add, divide_checked};
//!
//! assert_eq!(add(FMaybe, TNum, Maybe::some(3), Maybe::some(4)), Maybe::some(7));
//! assert_eq!(
//!     add(FMaybe, TString, Maybe::some("ab".to_string()), Maybe::some("cd".to_string())),
//!     Maybe::some("abcd".to_string())
//! );
//! assert_eq!(add(FVec, TNum, vec![1, 2], vec![10]), vec![11, 12]);
//! assert_eq!(divide_checked(FMaybe, TNum, Maybe::some(1_i32), Maybe::some(0)), Maybe::none());
//! ```

use std::ops::{Add, Div, Mul, Sub};

use super::applicative::apply2;
use super::monad::{Bind, Plus, Pure};

/// A numeric witness able to add two values.
pub trait Addition<T>: Copy {
    /// Returns `left + right`.
    fn add(self, left: T, right: T) -> T;
}

/// A numeric witness able to subtract two values.
pub trait Difference<T>: Copy {
    /// Returns `left - right`.
    fn difference(self, left: T, right: T) -> T;
}

/// A numeric witness able to multiply two values.
pub trait Product<T>: Copy {
    /// Returns `left * right`.
    fn product(self, left: T, right: T) -> T;
}

/// A numeric witness able to divide two values.
pub trait Divisible<T>: Copy {
    /// Returns `left / right`, with the value type's own division semantics.
    fn divide(self, left: T, right: T) -> T;
}

/// A numeric witness able to divide two values without panicking.
pub trait CheckedDivisible<T>: Copy {
    /// Returns `left / right`, or `None` if the division is undefined.
    fn checked_divide(self, left: T, right: T) -> Option<T>;
}

/// Numeric witness for any type implementing the standard operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TNum;

/// Numeric witness for `String`, where addition is concatenation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TString;

impl<T: Add<Output = T>> Addition<T> for TNum {
    #[inline]
    fn add(self, left: T, right: T) -> T {
        left + right
    }
}

impl<T: Sub<Output = T>> Difference<T> for TNum {
    #[inline]
    fn difference(self, left: T, right: T) -> T {
        left - right
    }
}

impl<T: Mul<Output = T>> Product<T> for TNum {
    #[inline]
    fn product(self, left: T, right: T) -> T {
        left * right
    }
}

impl<T: Div<Output = T>> Divisible<T> for TNum {
    #[inline]
    fn divide(self, left: T, right: T) -> T {
        left / right
    }
}

macro_rules! impl_checked_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl CheckedDivisible<$integer> for TNum {
                #[inline]
                fn checked_divide(self, left: $integer, right: $integer) -> Option<$integer> {
                    left.checked_div(right)
                }
            }
        )*
    };
}

impl_checked_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_checked_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl CheckedDivisible<$float> for TNum {
                #[inline]
                fn checked_divide(self, left: $float, right: $float) -> Option<$float> {
                    (right != 0.0).then(|| left / right)
                }
            }
        )*
    };
}

impl_checked_float!(f32, f64);

impl Addition<String> for TString {
    #[inline]
    fn add(self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

// =============================================================================
// Lifts
// =============================================================================

fn lift2<W, T, F>(witness: W, left: W::Of<T>, right: W::Of<T>, combine: F) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    T: Clone,
    W::Of<T>: Clone,
    F: FnMut(T, T) -> T,
{
    apply2::<W, W, W, W, F, T, T, T>(
        witness,
        witness,
        witness,
        witness,
        witness.pure(combine),
        left,
        right,
    )
}

/// Adds the values of two containers.
#[inline]
pub fn add<W, N, T>(witness: W, numeric: N, left: W::Of<T>, right: W::Of<T>) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    N: Addition<T>,
    T: Clone,
    W::Of<T>: Clone,
{
    lift2::<W, T, _>(witness, left, right, move |l, r| numeric.add(l, r))
}

/// Subtracts the values of `right` from those of `left`.
#[inline]
pub fn difference<W, N, T>(witness: W, numeric: N, left: W::Of<T>, right: W::Of<T>) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    N: Difference<T>,
    T: Clone,
    W::Of<T>: Clone,
{
    lift2::<W, T, _>(witness, left, right, move |l, r| numeric.difference(l, r))
}

/// Multiplies the values of two containers.
#[inline]
pub fn product<W, N, T>(witness: W, numeric: N, left: W::Of<T>, right: W::Of<T>) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    N: Product<T>,
    T: Clone,
    W::Of<T>: Clone,
{
    lift2::<W, T, _>(witness, left, right, move |l, r| numeric.product(l, r))
}

/// Divides the values of `left` by those of `right`.
///
/// # Panics
///
/// Panics wherever the value type's division panics, e.g. integer division
/// by zero. Use [`divide_checked`] to get an absent result instead.
#[inline]
pub fn divide<W, N, T>(witness: W, numeric: N, left: W::Of<T>, right: W::Of<T>) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    N: Divisible<T>,
    T: Clone,
    W::Of<T>: Clone,
{
    lift2::<W, T, _>(witness, left, right, move |l, r| numeric.divide(l, r))
}

/// Divides the values of `left` by those of `right`, dropping every undefined
/// quotient.
pub fn divide_checked<W, N, T>(witness: W, numeric: N, left: W::Of<T>, right: W::Of<T>) -> W::Of<T>
where
    W: Bind + Pure + Plus,
    N: CheckedDivisible<T>,
    T: Clone,
    W::Of<T>: Clone,
{
    witness.bind::<W, T, T, _>(left, witness, |l| {
        witness.bind::<W, T, T, _>(right.clone(), witness, |r| {
            numeric.checked_divide(l.clone(), r).map_or_else(
                || {
                    tracing::debug!("dropped undefined quotient");
                    witness.zero::<T>()
                },
                |quotient| witness.pure::<T>(quotient),
            )
        })
    })
}

static_assertions::const_assert_eq!(std::mem::size_of::<TNum>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<TString>(), 0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Maybe;
    use crate::typeclass::{FMaybe, FMaybeUnsafe, FVec};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(3), Maybe::some(4), Maybe::some(7))]
    #[case(Maybe::none(), Maybe::some(4), Maybe::none())]
    #[case(Maybe::some(3), Maybe::none(), Maybe::none())]
    fn add_maybe(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(add(FMaybe, TNum, left, right), expected);
    }

    #[rstest]
    fn arithmetic_over_floats() {
        assert_eq!(difference(FMaybe, TNum, Maybe::some(5.5), Maybe::some(0.5)), Maybe::some(5.0));
        assert_eq!(product(FMaybeUnsafe, TNum, Maybe::some(1.5), Maybe::some(2.0)), Maybe::some(3.0));
        assert_eq!(divide(FMaybe, TNum, Maybe::some(9.0), Maybe::some(2.0)), Maybe::some(4.5));
    }

    #[rstest]
    fn string_addition_concatenates() {
        let result = add(
            FMaybe,
            TString,
            Maybe::some("foo".to_string()),
            Maybe::some("bar".to_string()),
        );
        assert_eq!(result, Maybe::some("foobar".to_string()));
    }

    #[rstest]
    fn vec_product_is_cartesian() {
        assert_eq!(product(FVec, TNum, vec![1, 2], vec![3, 4]), vec![3, 4, 6, 8]);
    }

    #[rstest]
    #[case(Maybe::some(7), Maybe::some(2), Maybe::some(3))]
    #[case(Maybe::some(7), Maybe::some(0), Maybe::none())]
    #[case(Maybe::none(), Maybe::some(2), Maybe::none())]
    fn divide_checked_maybe(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(divide_checked(FMaybe, TNum, left, right), expected);
    }

    #[rstest]
    fn divide_checked_float_zero_is_absent() {
        assert_eq!(divide_checked(FMaybe, TNum, Maybe::some(1.0_f64), Maybe::some(0.0)), Maybe::none());
    }

    #[rstest]
    fn divide_checked_vec_drops_undefined() {
        assert_eq!(divide_checked(FVec, TNum, vec![8_i32, 6], vec![0, 2]), vec![4, 3]);
    }

    #[rstest]
    #[should_panic(expected = "divide by zero")]
    fn divide_by_integer_zero_panics() {
        let _ = divide(FMaybe, TNum, Maybe::some(1), Maybe::some(0));
    }
}
