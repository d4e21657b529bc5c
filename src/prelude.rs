//! Function-style access to [`Maybe`].
//!
//! Every function here forwards 1:1 to a [`Maybe`] method or to a
//! [`typeclass`](crate::typeclass) dispatch function with the [`FMaybe`]
//! witness, and adds no behaviour of its own.
//!
//! # Usage
//!
//! ```rust
//! use lambars_witness::prelude::*;
//!
//! let price = optional(Some(120));
//! let discounted = map(price, |p| p - 20);
//! assert_eq!(if_none_value(discounted, 0), 100);
//! ```

pub use crate::control::{Branch, Maybe, MaybeError, NullPolicy, Safe, Unsafe};
pub use crate::typeclass::{
    Addition, BiFoldable, BiFunctor, Bind, CheckedDivisible, Difference, Divisible, FMaybe, FMaybeUnsafe,
    FVec, Foldable, Functor, Kind, Plus, Product, Pure, TNum, TString,
};

use crate::typeclass;

// =============================================================================
// Construction
// =============================================================================

/// Forwards to [`Maybe::some`].
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// Forwards to [`Maybe::try_some`].
///
/// # Errors
///
/// Returns [`MaybeError::NullPayload`] if `value` is `None`.
#[inline]
pub fn try_some<T>(value: Option<T>) -> Result<Maybe<T>, MaybeError> {
    Maybe::try_some(value)
}

/// Forwards to [`Maybe::optional`].
#[inline]
pub fn optional<T>(value: Option<T>) -> Maybe<T> {
    Maybe::optional(value)
}

/// Forwards to [`Maybe::lazy`].
///
/// # Examples
///
/// ```rust
/// use lambars_witness::prelude::*;
///
/// let lazy = optional_lazy(|| some("ready"), true);
/// assert!(is_some(&lazy));
/// ```
#[inline]
pub fn optional_lazy<T, F>(producer: F, memo: bool) -> Maybe<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Maybe<T> + Send + Sync + 'static,
{
    Maybe::lazy(producer, memo)
}

/// Forwards to [`Maybe::is_some`].
#[inline]
pub fn is_some<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_some()
}

/// Forwards to [`Maybe::is_none`].
#[inline]
pub fn is_none<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_none()
}

// =============================================================================
// Extraction
// =============================================================================

/// Forwards to [`Maybe::if_some`].
#[inline]
pub fn if_some<T, S: FnOnce(T)>(maybe: Maybe<T>, some: S) {
    maybe.if_some(some);
}

/// Forwards to [`Maybe::if_none`].
#[inline]
pub fn if_none<T, N: FnOnce()>(maybe: Maybe<T>, none: N) {
    maybe.if_none(none);
}

/// Forwards to [`Maybe::if_none_with`].
#[inline]
pub fn if_none_with<T, N: FnOnce() -> T>(maybe: Maybe<T>, none: N) -> T {
    maybe.if_none_with(none)
}

/// Forwards to [`Maybe::if_none_value`].
#[inline]
pub fn if_none_value<T>(maybe: Maybe<T>, value: T) -> T {
    maybe.if_none_value(value)
}

/// Forwards to [`Maybe::if_none_safe`].
///
/// # Errors
///
/// Returns [`MaybeError::NullResult`] if the fallback returns `None`.
#[inline]
pub fn if_none_safe<T, N: FnOnce() -> Option<T>>(maybe: Maybe<T>, none: N) -> Result<T, MaybeError> {
    maybe.if_none_safe(none)
}

/// Forwards to [`Maybe::if_none_unsafe`].
#[inline]
pub fn if_none_unsafe<T, N: FnOnce() -> Option<T>>(maybe: Maybe<T>, none: N) -> Option<T> {
    maybe.if_none_unsafe(none)
}

/// Forwards to [`Maybe::matches`].
#[inline]
pub fn matches<T, R, S, N>(maybe: Maybe<T>, some: S, none: N) -> R
where
    S: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    maybe.matches(some, none)
}

/// Forwards to [`Maybe::match_safe`].
///
/// # Errors
///
/// Returns [`MaybeError::NullResult`] if the invoked handler returns `None`.
#[inline]
pub fn match_safe<T, R, S, N>(maybe: Maybe<T>, some: S, none: N) -> Result<R, MaybeError>
where
    S: FnOnce(T) -> Option<R>,
    N: FnOnce() -> Option<R>,
{
    maybe.match_safe(some, none)
}

/// Forwards to [`Maybe::match_unsafe`].
#[inline]
pub fn match_unsafe<T, R, S, N>(maybe: Maybe<T>, some: S, none: N) -> Option<R>
where
    S: FnOnce(T) -> Option<R>,
    N: FnOnce() -> Option<R>,
{
    maybe.match_unsafe(some, none)
}

/// Forwards to [`Maybe::match_unit`].
#[inline]
pub fn match_unit<T, S, N>(maybe: Maybe<T>, some: S, none: N)
where
    S: FnOnce(T),
    N: FnOnce(),
{
    maybe.match_unit(some, none);
}

// =============================================================================
// Transformations
// =============================================================================

/// Forwards to [`Maybe::map`].
#[inline]
pub fn map<T, B, F: FnOnce(T) -> B>(maybe: Maybe<T>, function: F) -> Maybe<B> {
    maybe.map(function)
}

/// Forwards to [`Maybe::bimap`].
#[inline]
pub fn bimap<T, B, N, S>(maybe: Maybe<T>, none: N, some: S) -> Maybe<B>
where
    N: FnOnce() -> B,
    S: FnOnce(T) -> B,
{
    maybe.bimap(none, some)
}

/// Forwards to [`Maybe::filter`].
#[inline]
pub fn filter<T, P: FnOnce(&T) -> bool>(maybe: Maybe<T>, predicate: P) -> Maybe<T> {
    maybe.filter(predicate)
}

/// Forwards to [`Maybe::bind`].
#[inline]
pub fn bind<T, B, F: FnOnce(T) -> Maybe<B>>(maybe: Maybe<T>, function: F) -> Maybe<B> {
    maybe.bind(function)
}

// =============================================================================
// Folding
// =============================================================================

/// Forwards to [`Maybe::fold`].
#[inline]
pub fn fold<T, S, F: FnOnce(S, T) -> S>(maybe: Maybe<T>, state: S, folder: F) -> S {
    maybe.fold(state, folder)
}

/// Forwards to [`Maybe::bifold`].
#[inline]
pub fn bifold<T, S, N, F>(maybe: Maybe<T>, state: S, none: N, some: F) -> S
where
    N: FnOnce(S) -> S,
    F: FnOnce(S, T) -> S,
{
    maybe.bifold(state, none, some)
}

/// Forwards to [`Maybe::forall`].
#[inline]
pub fn forall<T, P: FnOnce(&T) -> bool>(maybe: &Maybe<T>, predicate: P) -> bool {
    maybe.forall(predicate)
}

/// Forwards to [`Maybe::biforall`].
#[inline]
pub fn biforall<T, N, P>(maybe: &Maybe<T>, none: N, some: P) -> bool
where
    N: FnOnce() -> bool,
    P: FnOnce(&T) -> bool,
{
    maybe.biforall(none, some)
}

/// Forwards to [`Maybe::exists`].
#[inline]
pub fn exists<T, P: FnOnce(&T) -> bool>(maybe: &Maybe<T>, predicate: P) -> bool {
    maybe.exists(predicate)
}

/// Forwards to [`Maybe::biexists`].
#[inline]
pub fn biexists<T, N, P>(maybe: &Maybe<T>, none: N, some: P) -> bool
where
    N: FnOnce() -> bool,
    P: FnOnce(&T) -> bool,
{
    maybe.biexists(none, some)
}

/// Forwards to [`Maybe::count`].
#[inline]
pub fn count<T>(maybe: &Maybe<T>) -> usize {
    maybe.count()
}

// =============================================================================
// Conversion and Sequences
// =============================================================================

/// Forwards to [`Maybe::to_list`].
#[inline]
pub fn to_list<T>(maybe: Maybe<T>) -> Vec<T> {
    maybe.to_list()
}

/// Forwards to [`Maybe::to_array`].
#[inline]
pub fn to_array<T>(maybe: Maybe<T>) -> Box<[T]> {
    maybe.to_array()
}

/// Forwards to [`Maybe::par_map`].
#[inline]
pub fn par_map<T, B, C, F>(maybe: Maybe<T>, function: F) -> Maybe<Box<dyn Fn(B) -> C>>
where
    T: Clone + 'static,
    F: Fn(T, B) -> C + 'static,
    B: 'static,
    C: 'static,
{
    maybe.par_map(function)
}

/// Forwards to [`Maybe::par_map3`].
#[inline]
pub fn par_map3<T, B, C, D, F>(maybe: Maybe<T>, function: F) -> Maybe<Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>>
where
    T: Clone + 'static,
    F: Fn(T, B, C) -> D + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    maybe.par_map3(function)
}

/// Forwards to [`Maybe::somes`].
#[inline]
pub fn somes<T, I>(items: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Maybe::somes(items)
}

/// Forwards to [`Maybe::match_all`].
#[inline]
pub fn match_all<T, I, R, O, S, N>(items: I, some: S, none: N) -> Vec<R>
where
    I: IntoIterator<Item = Maybe<T>>,
    O: IntoIterator<Item = R>,
    S: FnMut(T) -> O,
    N: FnMut() -> O,
{
    Maybe::match_all(items, some, none)
}

// =============================================================================
// Apply Family
// =============================================================================

/// Forwards to [`typeclass::apply`] over [`FMaybe`].
#[inline]
pub fn apply<F, A, B>(function: Maybe<F>, argument: Maybe<A>) -> Maybe<B>
where
    F: FnMut(A) -> B,
    A: Clone,
{
    typeclass::apply(FMaybe, FMaybe, FMaybe, function, argument)
}

/// Forwards to [`typeclass::apply2`] over [`FMaybe`].
///
/// # Examples
///
/// ```rust
/// use lambars_witness::prelude::*;
///
/// let joined = apply2(some(|a: &str, b: &str| format!("{a}-{b}")), some("x"), some("y"));
/// assert_eq!(joined, some("x-y".to_string()));
/// ```
#[inline]
pub fn apply2<F, A, B, C>(function: Maybe<F>, first: Maybe<A>, second: Maybe<B>) -> Maybe<C>
where
    F: FnMut(A, B) -> C,
    A: Clone,
    B: Clone,
{
    typeclass::apply2(FMaybe, FMaybe, FMaybe, FMaybe, function, first, second)
}

/// Forwards to [`typeclass::apply_partial`] over [`FMaybe`].
#[inline]
pub fn apply_partial<F, A, B, C>(function: Maybe<F>, first: Maybe<A>) -> Maybe<Box<dyn Fn(B) -> C>>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    typeclass::apply_partial(FMaybe, FMaybe, FMaybe, function, first)
}

/// Forwards to [`typeclass::apply_curried`] over [`FMaybe`].
#[inline]
pub fn apply_curried<F, G, A, B, C>(function: Maybe<F>, first: Maybe<A>, second: Maybe<B>) -> Maybe<C>
where
    F: FnMut(A) -> G,
    G: FnMut(B) -> C,
    A: Clone,
    B: Clone,
{
    typeclass::apply_curried(FMaybe, FMaybe, FMaybe, FMaybe, FMaybe, function, first, second)
}

/// Forwards to [`typeclass::action`] over [`FMaybe`].
#[inline]
pub fn action<A, B: Clone>(first: Maybe<A>, second: Maybe<B>) -> Maybe<B> {
    typeclass::action(FMaybe, FMaybe, first, second)
}

// =============================================================================
// Numeric
// =============================================================================

/// Forwards to [`Maybe::add`].
#[inline]
pub fn add<T: Clone, N: Addition<T>>(numeric: N, left: Maybe<T>, right: Maybe<T>) -> Maybe<T> {
    left.add(numeric, right)
}

/// Forwards to [`Maybe::difference`].
#[inline]
pub fn difference<T: Clone, N: Difference<T>>(numeric: N, left: Maybe<T>, right: Maybe<T>) -> Maybe<T> {
    left.difference(numeric, right)
}

/// Forwards to [`Maybe::product`].
#[inline]
pub fn product<T: Clone, N: Product<T>>(numeric: N, left: Maybe<T>, right: Maybe<T>) -> Maybe<T> {
    left.product(numeric, right)
}

/// Forwards to [`Maybe::divide`].
///
/// # Panics
///
/// Panics wherever the value type's division panics.
#[inline]
pub fn divide<T: Clone, N: Divisible<T>>(numeric: N, left: Maybe<T>, right: Maybe<T>) -> Maybe<T> {
    left.divide(numeric, right)
}

/// Forwards to [`Maybe::divide_checked`].
#[inline]
pub fn divide_checked<T: Clone, N: CheckedDivisible<T>>(
    numeric: N,
    left: Maybe<T>,
    right: Maybe<T>,
) -> Maybe<T> {
    left.divide_checked(numeric, right)
}
