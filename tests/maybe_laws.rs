//! Property-based tests for the laws `Maybe` and its witnesses must satisfy.
//!
//! ## Functor Laws
//!
//! 1. **Identity**: `map(w, fa, |x| x) == fa`
//! 2. **Composition**: `map(w, map(w, fa, f), g) == map(w, fa, |x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! 3. **Left Identity**: `bind(w, pure(w, a), w, f) == f(a)`
//! 4. **Right Identity**: `bind(w, m, w, |a| pure(w, a)) == m`
//!
//! ## Container Properties
//!
//! 5. **Filter Idempotence**: filtering twice equals filtering once
//! 6. **Count**: 0 for absent, 1 for present
//! 7. **Round Trip**: `Maybe::optional(o).into_option() == o`

use lambars_witness::control::Maybe;
use lambars_witness::typeclass::{FMaybe, FMaybeUnsafe, FVec, bind, count, fold, map, pure};
use proptest::prelude::*;
use rstest::rstest;

fn half(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() }
}

proptest! {
    #[test]
    fn prop_functor_identity(value in any::<Option<i32>>()) {
        let fa = Maybe::optional(value);
        prop_assert_eq!(map(FMaybe, fa.clone(), |x| x), fa);
    }

    #[test]
    fn prop_functor_composition(value in any::<Option<i32>>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(3);
        let fa = Maybe::optional(value);
        let left = map(FMaybe, map(FMaybe, fa.clone(), f), g);
        let right = map(FMaybe, fa, |x| g(f(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_unsafe_witness_maps_like_safe(value in any::<Option<i32>>()) {
        let fa = Maybe::optional(value);
        prop_assert_eq!(
            map(FMaybeUnsafe, fa.clone(), |x| x / 2),
            map(FMaybe, fa, |x| x / 2)
        );
    }

    #[test]
    fn prop_vec_functor_identity(values in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(map(FVec, values.clone(), |x| x), values);
    }

    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(bind(FMaybe, pure(FMaybe, value), FMaybe, half), half(value));
    }

    #[test]
    fn prop_right_identity(value in any::<Option<i32>>()) {
        let m = Maybe::optional(value);
        prop_assert_eq!(bind(FMaybe, m.clone(), FMaybe, |a| pure(FMaybe, a)), m);
    }

    #[test]
    fn prop_filter_idempotent(value in any::<Option<i32>>()) {
        let once = Maybe::optional(value).filter(|x| *x > 0);
        let twice = once.clone().filter(|x| *x > 0);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_count_is_zero_or_one(value in any::<Option<String>>()) {
        let expected = usize::from(value.is_some());
        let maybe = Maybe::optional(value);
        prop_assert_eq!(maybe.count(), expected);
        prop_assert_eq!(count(FMaybe, maybe), expected);
    }

    #[test]
    fn prop_round_trip(value in any::<Option<i64>>()) {
        prop_assert_eq!(Maybe::optional(value).into_option(), value);
    }

    #[test]
    fn prop_fold_matches_to_list(value in any::<Option<i32>>(), seed in any::<i32>()) {
        let maybe = Maybe::optional(value);
        let folded = fold(FMaybe, maybe.clone(), seed, i32::wrapping_add);
        let listed = maybe.to_list().into_iter().fold(seed, i32::wrapping_add);
        prop_assert_eq!(folded, listed);
    }

    #[test]
    fn prop_forall_is_not_exists_of_negation(value in any::<Option<i32>>()) {
        let maybe = Maybe::optional(value);
        prop_assert_eq!(maybe.forall(|x| *x >= 0), !maybe.exists(|x| *x < 0));
    }
}

#[rstest]
fn lazy_value_obeys_functor_identity() {
    let lazy = Maybe::lazy(|| Maybe::some(3), false);
    assert_eq!(map(FMaybe, lazy.clone(), |x| x), lazy);
}
