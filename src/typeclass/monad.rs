//! Monad-like contracts - lifting, combining and binding across witnesses.
//!
//! Binding in this crate bridges two witnesses: the continuation of
//! [`Bind::bind`] produces a container of an *output* witness, which may differ
//! from the input witness. This is what lets the `apply` family in
//! [`applicative`](super::applicative) combine containers of any shapes.
//!
//! - [`Pure`]: lifts a value into a container (`return`)
//! - [`Plus`]: an empty container and an associative combination of two
//!   containers; the output witness of a bind must provide it so that zero
//!   or many continuation results can be merged
//! - [`Bind`]: sequencing with a continuation into an output witness
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! bind(w, pure(w, a), w, f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! bind(w, m, w, |a| pure(w, a)) == m
//! ```
//!
//! ## Plus Identity
//!
//! ```text
//! w.plus(w.zero(), m) == m == w.plus(m, w.zero())
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FVec, bind};
//!
//! // Binding a Vec into Maybe keeps the first present result.
//! let first_even = bind(FVec, vec![1, 3, 4, 6], FMaybe, |n| {
//!     if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() }
//! });
//! assert_eq!(first_even, Maybe::some(4));
//!
//! // Binding Maybe into Vec.
//! let expanded = bind(FMaybe, Maybe::some(2_usize), FVec, |n| vec![n; n]);
//! assert_eq!(expanded, vec![2, 2]);
//! ```

use super::higher::Kind;
use super::witness::{FMaybe, FMaybeUnsafe, FVec};
use crate::control::Maybe;

/// A witness that can lift a value into its container.
pub trait Pure: Kind {
    /// Lifts `value` into a container holding exactly that value.
    fn pure<A>(self, value: A) -> Self::Of<A>;
}

/// A witness whose containers form a monoid.
pub trait Plus: Kind {
    /// The empty container.
    fn zero<A>(self) -> Self::Of<A>;

    /// Combines two containers. Must be associative with [`zero`](Self::zero)
    /// as identity.
    fn plus<A>(self, left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A>;
}

/// A witness whose containers can be bound into the container of an output
/// witness.
pub trait Bind: Kind {
    /// Runs `function` on every value of `fa` and merges the results with
    /// `output`'s [`Plus`]. An empty `fa` yields `output.zero()` without
    /// invoking `function`.
    fn bind<O, A, B, F>(self, fa: Self::Of<A>, output: O, function: F) -> O::Of<B>
    where
        O: Plus,
        F: FnMut(A) -> O::Of<B>;
}

// =============================================================================
// Maybe
// =============================================================================

macro_rules! impl_maybe_monad {
    ($witness:ty) => {
        impl Pure for $witness {
            #[inline]
            fn pure<A>(self, value: A) -> Maybe<A> {
                Maybe::some(value)
            }
        }

        impl Plus for $witness {
            #[inline]
            fn zero<A>(self) -> Maybe<A> {
                Maybe::none()
            }

            /// Keeps the left value if present, otherwise the right one.
            #[inline]
            fn plus<A>(self, left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
                left.matches(Maybe::some, || right)
            }
        }

        impl Bind for $witness {
            #[inline]
            fn bind<O, A, B, F>(self, fa: Maybe<A>, output: O, function: F) -> O::Of<B>
            where
                O: Plus,
                F: FnMut(A) -> O::Of<B>,
            {
                fa.matches(function, || output.zero::<B>())
            }
        }
    };
}

impl_maybe_monad!(FMaybe);
impl_maybe_monad!(FMaybeUnsafe);

// =============================================================================
// Vec
// =============================================================================

impl Pure for FVec {
    #[inline]
    fn pure<A>(self, value: A) -> Vec<A> {
        vec![value]
    }
}

impl Plus for FVec {
    #[inline]
    fn zero<A>(self) -> Vec<A> {
        Vec::new()
    }

    #[inline]
    fn plus<A>(self, mut left: Vec<A>, right: Vec<A>) -> Vec<A> {
        left.extend(right);
        left
    }
}

impl Bind for FVec {
    fn bind<O, A, B, F>(self, fa: Vec<A>, output: O, mut function: F) -> O::Of<B>
    where
        O: Plus,
        F: FnMut(A) -> O::Of<B>,
    {
        fa.into_iter()
            .fold(output.zero::<B>(), |accumulator, element| {
                output.plus::<B>(accumulator, function(element))
            })
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Lifts `value` into the container named by `witness`.
#[inline]
pub fn pure<W: Pure, A>(witness: W, value: A) -> W::Of<A> {
    witness.pure(value)
}

/// Binds `fa` into the container named by `output`.
#[inline]
pub fn bind<W, O, A, B, F>(witness: W, fa: W::Of<A>, output: O, function: F) -> O::Of<B>
where
    W: Bind,
    O: Plus,
    F: FnMut(A) -> O::Of<B>,
{
    witness.bind::<O, A, B, F>(fa, output, function)
}

/// Sequences two containers, keeping the values of the second one once per
/// value of the first.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
/// use lambars_witness::typeclass::{FMaybe, FVec, action};
///
/// assert_eq!(action(FMaybe, FMaybe, Maybe::some(1), Maybe::some("b")), Maybe::some("b"));
/// assert_eq!(action(FMaybe, FMaybe, Maybe::<i32>::none(), Maybe::some("b")), Maybe::none());
/// assert_eq!(action(FVec, FVec, vec![1, 2], vec!['x']), vec!['x', 'x']);
/// ```
#[inline]
pub fn action<WA, WB, A, B>(first: WA, second: WB, fa: WA::Of<A>, fb: WB::Of<B>) -> WB::Of<B>
where
    WA: Bind,
    WB: Plus,
    WB::Of<B>: Clone,
{
    first.bind::<WB, A, B, _>(fa, second, |_| fb.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_left_identity() {
        let function = |n: i32| Maybe::some(n + 1);
        assert_eq!(bind(FMaybe, pure(FMaybe, 1), FMaybe, function), function(1));
    }

    #[rstest]
    fn maybe_bind_absent_skips_continuation() {
        let absent: Maybe<i32> = Maybe::none();
        let result: Maybe<i32> = bind(FMaybe, absent, FMaybe, |_| unreachable!("must not run"));
        assert_eq!(result, Maybe::none());
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(1))]
    #[case(Maybe::none(), Maybe::some(2), Maybe::some(2))]
    #[case(Maybe::some(1), Maybe::none(), Maybe::some(1))]
    #[case(Maybe::none(), Maybe::none(), Maybe::none())]
    fn maybe_plus_prefers_left(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(FMaybe.plus(left, right), expected);
    }

    #[rstest]
    fn vec_bind_concatenates() {
        assert_eq!(bind(FVec, vec![1, 2], FVec, |n| vec![n, n * 10]), vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn vec_bind_empty_skips_continuation() {
        let empty: Vec<i32> = Vec::new();
        let result: Vec<i32> = bind(FVec, empty, FVec, |_| unreachable!("must not run"));
        assert!(result.is_empty());
    }
}
