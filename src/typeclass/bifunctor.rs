//! BiFunctor type class - mapping both states of a container.
//!
//! `bimap` takes one handler for the "absent" branch and one for the
//! "present" branch. For an optional container exactly one of the two runs.
//!
//! # Handler Slots
//!
//! A witness declares the type its handlers return through
//! [`BiFunctor::Slot`]. The safe [`FMaybe`] witness uses `Slot<B> = B`, so a
//! handler cannot produce a null at all. The unsafe [`FMaybeUnsafe`] witness
//! uses `Slot<B> = Option<B>` and turns a `None` into an absent result.
//!
//! # Laws
//!
//! ## Exclusivity
//!
//! For an optional container, `bimap(w, fa, none, some)` invokes `none` iff
//! `fa` is absent and `some` iff `fa` is present.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FMaybeUnsafe, bimap};
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(bimap(FMaybe, absent.clone(), || -1, |x| x * 2), Maybe::some(-1));
//! assert_eq!(bimap(FMaybeUnsafe, absent, || None, |x| Some(x * 2)), Maybe::none());
//! ```

use super::higher::Kind;
use super::witness::{FMaybe, FMaybeUnsafe, FVec};
use crate::control::Maybe;

/// A witness whose container can have both of its states mapped.
pub trait BiFunctor: Kind {
    /// What a handler returns under this witness.
    type Slot<B>;

    /// Maps the absent state with `none` and every present value with `some`.
    fn bimap<A, B, N, S>(self, fa: Self::Of<A>, none: N, some: S) -> Self::Of<B>
    where
        N: FnOnce() -> Self::Slot<B>,
        S: FnMut(A) -> Self::Slot<B>;
}

impl BiFunctor for FMaybe {
    type Slot<B> = B;

    #[inline]
    fn bimap<A, B, N, S>(self, fa: Maybe<A>, none: N, some: S) -> Maybe<B>
    where
        N: FnOnce() -> B,
        S: FnMut(A) -> B,
    {
        fa.bimap(none, some)
    }
}

impl BiFunctor for FMaybeUnsafe {
    type Slot<B> = Option<B>;

    fn bimap<A, B, N, S>(self, fa: Maybe<A>, none: N, some: S) -> Maybe<B>
    where
        N: FnOnce() -> Option<B>,
        S: FnMut(A) -> Option<B>,
    {
        Maybe::optional(fa.matches(some, none))
    }
}

impl BiFunctor for FVec {
    type Slot<B> = B;

    /// An empty vector becomes a singleton from `none`; otherwise every
    /// element is mapped with `some`.
    fn bimap<A, B, N, S>(self, fa: Vec<A>, none: N, some: S) -> Vec<B>
    where
        N: FnOnce() -> B,
        S: FnMut(A) -> B,
    {
        if fa.is_empty() {
            vec![none()]
        } else {
            fa.into_iter().map(some).collect()
        }
    }
}

/// Maps both states of `fa` through the witness `witness`.
#[inline]
pub fn bimap<W, A, B, N, S>(witness: W, fa: W::Of<A>, none: N, some: S) -> W::Of<B>
where
    W: BiFunctor,
    N: FnOnce() -> W::Slot<B>,
    S: FnMut(A) -> W::Slot<B>,
{
    witness.bimap::<A, B, N, S>(fa, none, some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Maybe::some(3), 1, 0)]
    #[case(Maybe::none(), 0, 1)]
    fn maybe_bimap_invokes_exactly_one_handler(
        #[case] input: Maybe<i32>,
        #[case] expected_some: usize,
        #[case] expected_none: usize,
    ) {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);

        let _ = bimap(
            FMaybe,
            input,
            || {
                none_calls.set(none_calls.get() + 1);
                0
            },
            |x| {
                some_calls.set(some_calls.get() + 1);
                x
            },
        );

        assert_eq!(some_calls.get(), expected_some);
        assert_eq!(none_calls.get(), expected_none);
    }

    #[rstest]
    fn unsafe_bimap_null_from_some_handler_is_absent() {
        let result = bimap(FMaybeUnsafe, Maybe::some(3), || Some(0), |_| None::<i32>);
        assert_eq!(result, Maybe::none());
    }

    #[rstest]
    fn unsafe_bimap_value_from_none_handler_is_present() {
        let absent: Maybe<i32> = Maybe::none();
        assert_eq!(bimap(FMaybeUnsafe, absent, || Some(9), Some), Maybe::some(9));
    }

    #[rstest]
    fn vec_bimap_empty_becomes_singleton() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(bimap(FVec, empty, || 0, |x| x + 1), vec![0]);
        assert_eq!(bimap(FVec, vec![1, 2], || 0, |x| x + 1), vec![2, 3]);
    }
}
