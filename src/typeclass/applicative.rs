//! Applicative dispatch - applying functions held in containers.
//!
//! Every function in this module is written only in terms of [`Bind`],
//! [`Pure`] and [`Plus`], so the same plumbing serves unary functions,
//! binary functions, partially applied binary functions and curried
//! functions, over any combination of witnessed containers.
//!
//! - [`apply`]: a container of unary functions applied to one container
//! - [`apply2`]: a container of binary functions applied to two containers
//! - [`apply_partial`]: a container of binary functions applied to the first
//!   argument only, yielding a container of unary functions
//! - [`apply_curried`]: a container of curried functions applied to two
//!   containers
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! apply(w, w, w, pure(w, |x| x), v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! apply(w, w, w, pure(w, f), pure(w, x)) == pure(w, f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, apply2};
//!
//! let add = Maybe::some(|a: i32, b: i32| a + b);
//! let sum = apply2(FMaybe, FMaybe, FMaybe, FMaybe, add, Maybe::some(3), Maybe::some(4));
//! assert_eq!(sum, Maybe::some(7));
//! ```

use super::monad::{Bind, Plus, Pure};

/// Applies every function in `ff` to every value in `fa`.
///
/// The result is absent/empty if either container is.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
/// use lambars_witness::typeclass::{FMaybe, FVec, apply};
///
/// let doubled = apply(FMaybe, FMaybe, FMaybe, Maybe::some(|x: i32| x * 2), Maybe::some(21));
/// assert_eq!(doubled, Maybe::some(42));
///
/// let increment: fn(i32) -> i32 = |x| x + 1;
/// let scale: fn(i32) -> i32 = |x| x * 10;
/// assert_eq!(apply(FVec, FVec, FVec, vec![increment, scale], vec![1, 2]), vec![2, 3, 10, 20]);
/// ```
pub fn apply<WF, WA, WB, F, A, B>(
    functions: WF,
    arguments: WA,
    output: WB,
    ff: WF::Of<F>,
    fa: WA::Of<A>,
) -> WB::Of<B>
where
    WF: Bind,
    WA: Bind,
    WB: Pure + Plus,
    F: FnMut(A) -> B,
    WA::Of<A>: Clone,
{
    functions.bind::<WB, F, B, _>(ff, output, |mut function| {
        arguments.bind::<WB, A, B, _>(fa.clone(), output, |argument| output.pure(function(argument)))
    })
}

/// Applies every binary function in `ff` to every pair of values drawn from
/// `fa` and `fb`.
pub fn apply2<WF, WA, WB, WC, F, A, B, C>(
    functions: WF,
    first: WA,
    second: WB,
    output: WC,
    ff: WF::Of<F>,
    fa: WA::Of<A>,
    fb: WB::Of<B>,
) -> WC::Of<C>
where
    WF: Bind,
    WA: Bind,
    WB: Bind,
    WC: Pure + Plus,
    F: FnMut(A, B) -> C,
    A: Clone,
    WA::Of<A>: Clone,
    WB::Of<B>: Clone,
{
    functions.bind::<WC, F, C, _>(ff, output, |mut function| {
        first.bind::<WC, A, C, _>(fa.clone(), output, |a| {
            second.bind::<WC, B, C, _>(fb.clone(), output, |b| output.pure(function(a.clone(), b)))
        })
    })
}

/// Applies the first argument of every binary function in `ff`, yielding
/// unary functions of the second argument.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
/// use lambars_witness::typeclass::{FMaybe, apply_partial};
///
/// let subtract = Maybe::some(|a: i32, b: i32| a - b);
/// let from_ten = apply_partial(FMaybe, FMaybe, FMaybe, subtract, Maybe::some(10));
/// assert_eq!(from_ten.matches(|f| f(3), || 0), 7);
/// ```
pub fn apply_partial<WF, WA, WB, F, A, B, C>(
    functions: WF,
    arguments: WA,
    output: WB,
    ff: WF::Of<F>,
    fa: WA::Of<A>,
) -> WB::Of<Box<dyn Fn(B) -> C>>
where
    WF: Bind,
    WA: Bind,
    WB: Pure + Plus,
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    WA::Of<A>: Clone,
{
    functions.bind::<WB, F, Box<dyn Fn(B) -> C>, _>(ff, output, |function| {
        arguments.bind::<WB, A, Box<dyn Fn(B) -> C>, _>(fa.clone(), output, |first| {
            let function = function.clone();
            let partial: Box<dyn Fn(B) -> C> =
                Box::new(move |second: B| function(first.clone(), second));
            output.pure(partial)
        })
    })
}

/// Applies two arguments to every curried function in `ff`.
///
/// `curried` names the intermediate container of unary functions produced by
/// the first application.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
/// use lambars_witness::typeclass::{FMaybe, apply_curried};
///
/// let multiply = Maybe::some(|a: i32| move |b: i32| a * b);
/// let result = apply_curried(
///     FMaybe, FMaybe, FMaybe, FMaybe, FMaybe,
///     multiply, Maybe::some(6), Maybe::some(7),
/// );
/// assert_eq!(result, Maybe::some(42));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn apply_curried<WF, WA, WG, WB, WC, F, G, A, B, C>(
    functions: WF,
    first: WA,
    curried: WG,
    second: WB,
    output: WC,
    ff: WF::Of<F>,
    fa: WA::Of<A>,
    fb: WB::Of<B>,
) -> WC::Of<C>
where
    WF: Bind,
    WA: Bind,
    WG: Bind + Pure + Plus,
    WB: Bind,
    WC: Pure + Plus,
    F: FnMut(A) -> G,
    G: FnMut(B) -> C,
    WA::Of<A>: Clone,
    WB::Of<B>: Clone,
{
    let partial = apply::<WF, WA, WG, F, A, G>(functions, first, curried, ff, fa);
    apply::<WG, WB, WC, G, B, C>(curried, second, output, partial, fb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Maybe;
    use crate::typeclass::{FMaybe, FVec, pure};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(3), Maybe::some(4), Maybe::some(7))]
    #[case(Maybe::none(), Maybe::some(4), Maybe::none())]
    #[case(Maybe::some(3), Maybe::none(), Maybe::none())]
    fn apply2_maybe_addition(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        let add = pure(FMaybe, |a: i32, b: i32| a + b);
        assert_eq!(apply2(FMaybe, FMaybe, FMaybe, FMaybe, add, left, right), expected);
    }

    #[rstest]
    fn apply_absent_function_is_absent() {
        let missing: Maybe<fn(i32) -> i32> = Maybe::none();
        assert_eq!(apply(FMaybe, FMaybe, FMaybe, missing, Maybe::some(1)), Maybe::none());
    }

    #[rstest]
    fn apply_identity_law() {
        let identity = pure(FMaybe, |x: i32| x);
        assert_eq!(apply(FMaybe, FMaybe, FMaybe, identity, Maybe::some(5)), Maybe::some(5));
    }

    #[rstest]
    fn apply2_vec_is_cartesian() {
        let add: fn(i32, i32) -> i32 = |a, b| a + b;
        let multiply: fn(i32, i32) -> i32 = |a, b| a * b;
        let functions = vec![add, multiply];
        let result = apply2(FVec, FVec, FVec, FVec, functions, vec![1, 2], vec![10, 20]);
        assert_eq!(result, vec![11, 21, 12, 22, 10, 20, 20, 40]);
    }

    #[rstest]
    fn apply_mixes_witnesses() {
        let function = Maybe::some(|x: i32| x + 1);
        let result = apply(FMaybe, FVec, FVec, function, vec![1, 2, 3]);
        assert_eq!(result, vec![2, 3, 4]);
    }

    #[rstest]
    fn apply_partial_vec_yields_one_function_per_pair() {
        let functions = vec![|a: i32, b: i32| a - b];
        let partials = apply_partial(FVec, FVec, FVec, functions, vec![10, 20]);
        let results: Vec<i32> = partials.iter().map(|partial| partial(1)).collect();
        assert_eq!(results, vec![9, 19]);
    }

    #[rstest]
    fn apply_curried_absent_argument_is_absent() {
        let multiply = Maybe::some(|a: i32| move |b: i32| a * b);
        let result = apply_curried(
            FMaybe,
            FMaybe,
            FMaybe,
            FMaybe,
            FMaybe,
            multiply,
            Maybe::some(6),
            Maybe::none(),
        );
        assert_eq!(result, Maybe::none());
    }
}
