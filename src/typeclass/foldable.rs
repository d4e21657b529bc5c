//! Foldable type class - reducing containers to a summary value.
//!
//! [`Foldable`] folds every value of a container into an accumulator, left to
//! right. [`BiFoldable`] additionally takes a step for the "absent" state, so
//! an empty container is no longer indistinguishable from an untouched seed.
//!
//! The quantifiers [`forall`], [`exists`], [`biforall`] and [`biexists`] and
//! the [`count`] helper are derived from the two folds and work for every
//! witness.
//!
//! # Laws
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fold(w, fa, s, f) == to_list(fa).into_iter().fold(s, f)
//! ```
//!
//! ## Bifold Exclusivity
//!
//! For an optional container, `bifold(w, fa, s, none, some)` runs `none` iff
//! `fa` is absent.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FVec, count, exists, fold};
//!
//! assert_eq!(fold(FMaybe, Maybe::some(10), 5, |s, x| s + x), 15);
//! assert_eq!(fold(FVec, vec![1, 2, 3], 0, |s, x| s + x), 6);
//! assert!(exists(FVec, vec![1, 2, 3], |x| x > 2));
//! assert_eq!(count(FMaybe, Maybe::<i32>::none()), 0);
//! ```

use super::higher::Kind;
use super::witness::{FMaybe, FMaybeUnsafe, FVec};
use crate::control::Maybe;

/// A witness whose container can be folded left to right.
pub trait Foldable: Kind {
    /// Folds every value of `fa` into `state` with `folder`.
    fn fold<A, S, F>(self, fa: Self::Of<A>, state: S, folder: F) -> S
    where
        F: FnMut(S, A) -> S;
}

/// A witness whose container can be folded with a dedicated step for its
/// absent (empty) state.
pub trait BiFoldable: Foldable {
    /// Folds `fa` into `state`; `none` runs instead of `some` when `fa` holds
    /// no value.
    fn bifold<A, S, N, F>(self, fa: Self::Of<A>, state: S, none: N, some: F) -> S
    where
        N: FnOnce(S) -> S,
        F: FnMut(S, A) -> S;
}

macro_rules! impl_maybe_foldable {
    ($witness:ty) => {
        impl Foldable for $witness {
            #[inline]
            fn fold<A, S, F>(self, fa: Maybe<A>, state: S, folder: F) -> S
            where
                F: FnMut(S, A) -> S,
            {
                fa.fold(state, folder)
            }
        }

        impl BiFoldable for $witness {
            #[inline]
            fn bifold<A, S, N, F>(self, fa: Maybe<A>, state: S, none: N, some: F) -> S
            where
                N: FnOnce(S) -> S,
                F: FnMut(S, A) -> S,
            {
                fa.bifold(state, none, some)
            }
        }
    };
}

impl_maybe_foldable!(FMaybe);
impl_maybe_foldable!(FMaybeUnsafe);

impl Foldable for FVec {
    #[inline]
    fn fold<A, S, F>(self, fa: Vec<A>, state: S, folder: F) -> S
    where
        F: FnMut(S, A) -> S,
    {
        fa.into_iter().fold(state, folder)
    }
}

impl BiFoldable for FVec {
    fn bifold<A, S, N, F>(self, fa: Vec<A>, state: S, none: N, some: F) -> S
    where
        N: FnOnce(S) -> S,
        F: FnMut(S, A) -> S,
    {
        if fa.is_empty() {
            none(state)
        } else {
            fa.into_iter().fold(state, some)
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Folds `fa` through the witness `witness`.
#[inline]
pub fn fold<W, A, S, F>(witness: W, fa: W::Of<A>, state: S, folder: F) -> S
where
    W: Foldable,
    F: FnMut(S, A) -> S,
{
    witness.fold::<A, S, F>(fa, state, folder)
}

/// Bifolds `fa` through the witness `witness`.
#[inline]
pub fn bifold<W, A, S, N, F>(witness: W, fa: W::Of<A>, state: S, none: N, some: F) -> S
where
    W: BiFoldable,
    N: FnOnce(S) -> S,
    F: FnMut(S, A) -> S,
{
    witness.bifold::<A, S, N, F>(fa, state, none, some)
}

/// Returns `true` if `predicate` holds for every value; vacuously `true` for
/// an absent or empty container.
pub fn forall<W, A, P>(witness: W, fa: W::Of<A>, mut predicate: P) -> bool
where
    W: Foldable,
    P: FnMut(A) -> bool,
{
    witness.fold::<A, bool, _>(fa, true, |holds, value| holds && predicate(value))
}

/// Returns `true` if `predicate` holds for at least one value.
pub fn exists<W, A, P>(witness: W, fa: W::Of<A>, mut predicate: P) -> bool
where
    W: Foldable,
    P: FnMut(A) -> bool,
{
    witness.fold::<A, bool, _>(fa, false, |found, value| found || predicate(value))
}

/// Like [`forall`], but an absent or empty container answers with `none`.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
/// use lambars_witness::typeclass::{FMaybe, biforall};
///
/// assert!(!biforall(FMaybe, Maybe::<i32>::none(), || false, |x| x > 0));
/// assert!(biforall(FMaybe, Maybe::some(3), || false, |x| x > 0));
/// ```
pub fn biforall<W, A, N, P>(witness: W, fa: W::Of<A>, none: N, mut some: P) -> bool
where
    W: BiFoldable,
    N: FnOnce() -> bool,
    P: FnMut(A) -> bool,
{
    witness.bifold::<A, bool, _, _>(fa, true, |_| none(), |holds, value| holds && some(value))
}

/// Like [`exists`], but an absent or empty container answers with `none`.
pub fn biexists<W, A, N, P>(witness: W, fa: W::Of<A>, none: N, mut some: P) -> bool
where
    W: BiFoldable,
    N: FnOnce() -> bool,
    P: FnMut(A) -> bool,
{
    witness.bifold::<A, bool, _, _>(fa, false, |_| none(), |found, value| found || some(value))
}

/// Counts the values held by `fa`.
#[inline]
pub fn count<W: Foldable, A>(witness: W, fa: W::Of<A>) -> usize {
    witness.fold::<A, usize, _>(fa, 0, |total, _| total + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(10), 15)]
    #[case(Maybe::none(), 5)]
    fn maybe_fold(#[case] input: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(fold(FMaybe, input, 5, |s, x| s + x), expected);
    }

    #[rstest]
    #[case(Maybe::some(2), 12)]
    #[case(Maybe::none(), -10)]
    fn maybe_bifold_runs_matching_step(#[case] input: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(bifold(FMaybe, input, 10, |s| -s, |s, x| s + x), expected);
    }

    #[rstest]
    fn vec_bifold_empty_uses_none_step() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(bifold(FVec, empty, 1, |s| s * 100, |s, x| s + x), 100);
        assert_eq!(bifold(FVec, vec![1, 2], 1, |s| s * 100, |s, x| s + x), 4);
    }

    #[rstest]
    #[case(Maybe::some(3), true, true)]
    #[case(Maybe::some(-3), false, false)]
    #[case(Maybe::none(), true, false)]
    fn maybe_quantifiers(
        #[case] input: Maybe<i32>,
        #[case] expected_forall: bool,
        #[case] expected_exists: bool,
    ) {
        assert_eq!(forall(FMaybe, input.clone(), |x| x > 0), expected_forall);
        assert_eq!(exists(FMaybe, input, |x| x > 0), expected_exists);
    }

    #[rstest]
    fn biquantifiers_on_absent_use_none_answer() {
        let absent: Maybe<i32> = Maybe::none();
        assert!(biexists(FMaybe, absent.clone(), || true, |_| false));
        assert!(!biforall(FMaybeUnsafe, absent, || false, |_| true));
    }

    #[rstest]
    fn vec_quantifiers() {
        assert!(forall(FVec, vec![2, 4], |x| x % 2 == 0));
        assert!(!forall(FVec, vec![2, 3], |x| x % 2 == 0));
        assert!(biexists(FVec, vec![1, 2], || false, |x| x == 2));
    }

    #[rstest]
    fn count_matches_contents() {
        assert_eq!(count(FMaybe, Maybe::some('a')), 1);
        assert_eq!(count(FVec, vec![(); 4]), 4);
    }
}
