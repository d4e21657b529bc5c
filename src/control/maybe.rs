//! Maybe type - zero or one value, eagerly or lazily constructed.
//!
//! `Maybe<T>` is either absent (`None`) or present with a value (`Some`).
//! It is immutable: every transformation yields a new instance. A `Maybe`
//! can also be defined by a producer that runs on first observation, with or
//! without memoisation (see [`Maybe::lazy`]).
//!
//! # Null Discipline
//!
//! A present `Maybe` never wraps a null payload. In Rust a plain `T` cannot be
//! null, so [`Maybe::some`] is infallible; the paths that receive a nullable
//! `Option<T>` come in a rejecting flavour ([`Maybe::try_some`]) and an
//! accepting flavour ([`Maybe::optional`]).
//!
//! Handlers that may produce "no value" are observed through a
//! [`NullPolicy`]: [`Maybe::match_safe`] rejects a null result and
//! [`Maybe::match_unsafe`] propagates it.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//!
//! let result = Maybe::optional(Some(5))
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 5)
//!     .matches(|v| v, || -1);
//! assert_eq!(result, 10);
//!
//! let absent: Maybe<i32> = Maybe::optional(None);
//! assert_eq!(absent.matches(|v| v, || -1), -1);
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::error::{Branch, MaybeError};
use super::lazy::{Deferred, Memoized, Unmemoized};
use super::policy::{NullPolicy, Safe, Unsafe};
use crate::typeclass::{self, Addition, CheckedDivisible, Difference, Divisible, FMaybe, Product};

/// A container holding zero or one value.
///
/// See the [module documentation](self) for the null discipline and laziness.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::Maybe;
///
/// let present = Maybe::some(3);
/// assert!(present.is_some());
/// assert_eq!(present.count(), 1);
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.count(), 0);
/// ```
pub struct Maybe<T> {
    state: State<T>,
}

enum State<T> {
    None,
    Some(T),
    Lazy(Arc<dyn Deferred<T>>),
}

/// An observed state that is either borrowed from the instance or freshly
/// produced by an unmemoised (or not yet cached) lazy value.
enum Observed<'a, T> {
    Borrowed(Option<&'a T>),
    Owned(Option<T>),
}

impl<T> Observed<'_, T> {
    fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => value.as_ref(),
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Maybe<T> {
    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self { state: State::None }
    }

    /// Creates a present `Maybe` wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("x").into_option(), Some("x"));
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            state: State::Some(value),
        }
    }

    /// Creates a present `Maybe` from a nullable payload.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NullPayload`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::some(1)));
    /// assert_eq!(Maybe::<i32>::try_some(None), Err(MaybeError::NullPayload));
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, MaybeError> {
        value.map(Self::some).ok_or_else(|| {
            tracing::debug!("rejected null payload for a present Maybe");
            MaybeError::NullPayload
        })
    }

    /// Creates a `Maybe` from a nullable payload; a null becomes absent.
    #[inline]
    pub fn optional(value: Option<T>) -> Self {
        value.map_or_else(Self::none, Self::some)
    }

    /// Observes the state and converts it into a standard `Option`.
    ///
    /// Forces a lazy value.
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::None => None,
            State::Some(value) => Some(value),
            State::Lazy(deferred) => deferred.evaluate(),
        }
    }

    fn observe(&self) -> Observed<'_, T> {
        match &self.state {
            State::None => Observed::Borrowed(None),
            State::Some(value) => Observed::Borrowed(Some(value)),
            State::Lazy(deferred) => deferred
                .cached()
                .map_or_else(|| Observed::Owned(deferred.evaluate()), Observed::Borrowed),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Maybe<T> {
    /// Creates a lazy `Maybe` defined by `producer`.
    ///
    /// The producer runs on first observation. With `memo` set it runs at
    /// most once and every clone of the instance shares the cached state;
    /// without it the producer runs again on every observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let lazy = Maybe::lazy(
    ///     move || {
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///         Maybe::some(42)
    ///     },
    ///     true,
    /// );
    ///
    /// assert_eq!(calls.load(Ordering::SeqCst), 0);
    /// assert!(lazy.is_some());
    /// assert_eq!(lazy.clone().into_option(), Some(42));
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    pub fn lazy<F>(producer: F, memo: bool) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        let deferred: Arc<dyn Deferred<T>> = if memo {
            Arc::new(Memoized::new(producer))
        } else {
            Arc::new(Unmemoized::new(producer))
        };
        Self {
            state: State::Lazy(deferred),
        }
    }

    /// Creates a memoised lazy `Maybe`.
    #[inline]
    pub fn lazy_memo<F>(producer: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::lazy(producer, true)
    }

    /// Creates a lazy `Maybe` from a producer that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NullArgument`] if `producer` is `None`.
    pub fn try_lazy<F>(producer: Option<F>, memo: bool) -> Result<Self, MaybeError>
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        match producer {
            Some(producer) => Ok(Self::lazy(producer, memo)),
            None => {
                tracing::debug!("rejected null producer for a lazy Maybe");
                Err(MaybeError::NullArgument { name: "producer" })
            }
        }
    }
}

// =============================================================================
// State Queries
// =============================================================================

impl<T> Maybe<T> {
    /// Returns `true` if the value is present. Forces a lazy value.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.observe().as_ref().is_some()
    }

    /// Returns `true` if the value is absent. Forces a lazy value.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` unless this is a lazy value whose state is not cached.
    ///
    /// Unmemoised lazy values never report as evaluated.
    pub fn is_evaluated(&self) -> bool {
        match &self.state {
            State::None | State::Some(_) => true,
            State::Lazy(deferred) => deferred.cached().is_some(),
        }
    }

    /// Returns 0 when absent and 1 when present.
    #[inline]
    pub fn count(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Matching
// =============================================================================

impl<T> Maybe<T> {
    /// Runs `some` on a present value or `none` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).matches(|x| x + 1, || 0), 3);
    /// assert_eq!(Maybe::<i32>::none().matches(|x| x + 1, || 0), 0);
    /// ```
    pub fn matches<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.into_option() {
            Some(value) => some(value),
            None => none(),
        }
    }

    /// Runs whichever handler fits the state and settles a nullable result
    /// through `policy`.
    pub fn match_with<P, R, S, N>(self, policy: P, some: S, none: N) -> P::Output<R>
    where
        P: NullPolicy,
        S: FnOnce(T) -> Option<R>,
        N: FnOnce() -> Option<R>,
    {
        match self.into_option() {
            Some(value) => policy.settle(some(value), Branch::Some),
            None => policy.settle(none(), Branch::None),
        }
    }

    /// Matches with handlers that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NullResult`] if the invoked handler returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::{Branch, Maybe, MaybeError};
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(
    ///     absent.match_safe(Some, || None),
    ///     Err(MaybeError::NullResult { branch: Branch::None })
    /// );
    /// ```
    #[inline]
    pub fn match_safe<R, S, N>(self, some: S, none: N) -> Result<R, MaybeError>
    where
        S: FnOnce(T) -> Option<R>,
        N: FnOnce() -> Option<R>,
    {
        self.match_with(Safe, some, none)
    }

    /// Matches with handlers that may return null; the null is passed through.
    #[inline]
    pub fn match_unsafe<R, S, N>(self, some: S, none: N) -> Option<R>
    where
        S: FnOnce(T) -> Option<R>,
        N: FnOnce() -> Option<R>,
    {
        self.match_with(Unsafe, some, none)
    }

    /// Runs one of two side-effecting handlers.
    pub fn match_unit<S, N>(self, some: S, none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.matches(some, none);
    }

    /// Runs `some` on a present value; does nothing when absent.
    pub fn if_some<S: FnOnce(T)>(self, some: S) {
        if let Some(value) = self.into_option() {
            some(value);
        }
    }

    /// Runs `none` when absent; does nothing when present.
    pub fn if_none<N: FnOnce()>(self, none: N) {
        if self.into_option().is_none() {
            none();
        }
    }

    /// Returns the present value or the result of `none`.
    #[inline]
    pub fn if_none_with<N: FnOnce() -> T>(self, none: N) -> T {
        self.into_option().unwrap_or_else(none)
    }

    /// Returns the present value or `value`.
    #[inline]
    pub fn if_none_value(self, value: T) -> T {
        self.into_option().unwrap_or(value)
    }

    /// Returns the present value or the result of a fallback that must not be
    /// null.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NullResult`] if the fallback returns `None`.
    #[inline]
    pub fn if_none_safe<N: FnOnce() -> Option<T>>(self, none: N) -> Result<T, MaybeError> {
        self.match_safe(Some, none)
    }

    /// Returns the present value or the (possibly null) result of a fallback.
    #[inline]
    pub fn if_none_unsafe<N: FnOnce() -> Option<T>>(self, none: N) -> Option<T> {
        self.match_unsafe(Some, none)
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<T> Maybe<T> {
    /// Maps a present value; an absent value stays absent and `function` is
    /// never invoked.
    #[inline]
    pub fn map<B, F: FnOnce(T) -> B>(self, function: F) -> Maybe<B> {
        Maybe::optional(self.into_option().map(function))
    }

    /// Maps both states into a present value.
    ///
    /// Exactly one of the two handlers runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(absent.bimap(|| 0, |x| x * 2), Maybe::some(0));
    /// ```
    pub fn bimap<B, N, S>(self, none: N, some: S) -> Maybe<B>
    where
        N: FnOnce() -> B,
        S: FnOnce(T) -> B,
    {
        Maybe::some(self.matches(some, none))
    }

    /// Keeps a present value only if `predicate` holds.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        Self::optional(self.into_option().filter(predicate))
    }

    /// Chains a computation that itself yields a `Maybe`.
    #[inline]
    pub fn bind<B, F: FnOnce(T) -> Maybe<B>>(self, function: F) -> Maybe<B> {
        self.matches(function, Maybe::none)
    }
}

impl<T: Clone + 'static> Maybe<T> {
    /// Partially applies a binary function to the present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    ///
    /// let partial = Maybe::some(10).par_map(|a: i32, b: i32| a - b);
    /// assert_eq!(partial.matches(|f| f(3), || 0), 7);
    /// ```
    pub fn par_map<B, C, F>(self, function: F) -> Maybe<Box<dyn Fn(B) -> C>>
    where
        F: Fn(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.map(move |first| {
            let partial: Box<dyn Fn(B) -> C> = Box::new(move |second: B| function(first.clone(), second));
            partial
        })
    }

    /// Partially applies a ternary function to the present value, yielding a
    /// curried function of the remaining two arguments.
    pub fn par_map3<B, C, D, F>(self, function: F) -> Maybe<Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>>
    where
        F: Fn(T, B, C) -> D + 'static,
        B: Clone + 'static,
        C: 'static,
        D: 'static,
    {
        let function = Rc::new(function);
        self.map(move |first| {
            let curried: Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>> = Box::new(move |second: B| {
                let function = Rc::clone(&function);
                let first = first.clone();
                let partial: Box<dyn Fn(C) -> D> =
                    Box::new(move |third: C| function(first.clone(), second.clone(), third));
                partial
            });
            curried
        })
    }
}

// =============================================================================
// Folding
// =============================================================================

impl<T> Maybe<T> {
    /// Folds zero or one value into `state`.
    pub fn fold<S, F: FnOnce(S, T) -> S>(self, state: S, folder: F) -> S {
        match self.into_option() {
            Some(value) => folder(state, value),
            None => state,
        }
    }

    /// Folds with a step for each state; exactly one step runs.
    pub fn bifold<S, N, F>(self, state: S, none: N, some: F) -> S
    where
        N: FnOnce(S) -> S,
        F: FnOnce(S, T) -> S,
    {
        match self.into_option() {
            Some(value) => some(state, value),
            None => none(state),
        }
    }

    /// Returns `true` if absent or if `predicate` holds for the value.
    ///
    /// The predicate is never invoked on an absent value.
    pub fn forall<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        self.observe().as_ref().is_none_or(predicate)
    }

    /// Returns `true` if present and `predicate` holds for the value.
    pub fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        self.observe().as_ref().is_some_and(predicate)
    }

    /// Like [`forall`](Self::forall), with an explicit answer for the absent
    /// case.
    pub fn biforall<N, P>(&self, none: N, some: P) -> bool
    where
        N: FnOnce() -> bool,
        P: FnOnce(&T) -> bool,
    {
        self.observe().as_ref().map_or_else(none, some)
    }

    /// Like [`exists`](Self::exists), with an explicit answer for the absent
    /// case.
    pub fn biexists<N, P>(&self, none: N, some: P) -> bool
    where
        N: FnOnce() -> bool,
        P: FnOnce(&T) -> bool,
    {
        self.observe().as_ref().map_or_else(none, some)
    }
}

// =============================================================================
// Numeric Lifts
// =============================================================================

impl<T: Clone> Maybe<T> {
    /// Adds two present values; absent if either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    /// use lambars_witness::typeclass::TNum;
    ///
    /// assert_eq!(Maybe::some(3).add(TNum, Maybe::some(4)), Maybe::some(7));
    /// assert_eq!(Maybe::some(3).add(TNum, Maybe::none()), Maybe::none());
    /// ```
    #[inline]
    pub fn add<N: Addition<T>>(self, numeric: N, other: Self) -> Self {
        typeclass::add(FMaybe, numeric, self, other)
    }

    /// Subtracts `other` from this value.
    #[inline]
    pub fn difference<N: Difference<T>>(self, numeric: N, other: Self) -> Self {
        typeclass::difference(FMaybe, numeric, self, other)
    }

    /// Multiplies two present values.
    #[inline]
    pub fn product<N: Product<T>>(self, numeric: N, other: Self) -> Self {
        typeclass::product(FMaybe, numeric, self, other)
    }

    /// Divides this value by `other`.
    #[inline]
    pub fn divide<N: Divisible<T>>(self, numeric: N, other: Self) -> Self {
        typeclass::divide(FMaybe, numeric, self, other)
    }

    /// Divides this value by `other`; a failed division yields absent.
    #[inline]
    pub fn divide_checked<N: CheckedDivisible<T>>(self, numeric: N, other: Self) -> Self {
        typeclass::divide_checked(FMaybe, numeric, self, other)
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<T> Maybe<T> {
    /// Converts into a list of zero or one elements.
    #[inline]
    pub fn to_list(self) -> Vec<T> {
        self.into_option().into_iter().collect()
    }

    /// Converts into an array of zero or one elements.
    #[inline]
    pub fn to_array(self) -> Box<[T]> {
        self.to_list().into_boxed_slice()
    }

    /// Extracts all present values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_witness::control::Maybe;
    ///
    /// let items = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)];
    /// assert_eq!(Maybe::somes(items).collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn somes<I>(items: I) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().filter_map(Self::into_option)
    }

    /// Matches every element and concatenates the results.
    pub fn match_all<I, R, O, S, N>(items: I, mut some: S, mut none: N) -> Vec<R>
    where
        I: IntoIterator<Item = Self>,
        O: IntoIterator<Item = R>,
        S: FnMut(T) -> O,
        N: FnMut() -> O,
    {
        items
            .into_iter()
            .flat_map(|item| item.matches(&mut some, &mut none))
            .collect()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::None => State::None,
            State::Some(value) => State::Some(value.clone()),
            State::Lazy(deferred) => State::Lazy(Arc::clone(deferred)),
        };
        Self { state }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = match &self.state {
            State::None => Some(None),
            State::Some(value) => Some(Some(value)),
            State::Lazy(deferred) => deferred.cached(),
        };
        match cached {
            Some(Some(value)) => formatter.debug_tuple("Some").field(value).finish(),
            Some(None) => formatter.write_str("None"),
            None => formatter.write_str("Lazy(<unevaluated>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        let left = self.observe();
        let right = other.observe();
        left.as_ref() == right.as_ref()
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::optional(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> FromIterator<T> for Maybe<T> {
    /// Keeps the first element, if any.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::optional(iter.into_iter().next())
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Maybe<Rc<i32>>: Send, Sync);
