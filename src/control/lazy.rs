//! Deferred evaluation for lazily constructed [`Maybe`] values.
//!
//! A lazy `Maybe` holds a producer instead of a materialised state. The
//! producer runs on first observation. Two strategies exist:
//!
//! - [`Memoized`]: the producer runs at most once per slot and the result is
//!   shared by every clone of the instance.
//! - [`Unmemoized`]: the producer runs again on every observation, re-running
//!   its side effects.
//!
//! # State Machine
//!
//! ```text
//! Unevaluated --observe--> Evaluated(Some | None)   (memoised, terminal)
//! Unevaluated --observe--> Unevaluated              (not memoised)
//! ```
//!
//! # Thread Safety
//!
//! The memo slot is a [`OnceLock`]: concurrent first observers block until the
//! single evaluation publishes its result, so the producer never runs twice
//! for one slot. If the producer panics the slot stays empty and the next
//! observation evaluates again.

use std::sync::OnceLock;

use super::maybe::Maybe;

/// A deferred `Maybe` state, shared between clones of a lazy instance.
pub(crate) trait Deferred<T>: Send + Sync {
    /// Observes the deferred value, running the producer if required.
    fn evaluate(&self) -> Option<T>;

    /// Returns the memoised state without running the producer.
    ///
    /// `None` means nothing has been cached yet.
    #[allow(clippy::option_option)]
    fn cached(&self) -> Option<Option<&T>>;
}

/// Runs the producer once and caches the observed state.
pub(crate) struct Memoized<T, F> {
    producer: F,
    slot: OnceLock<Option<T>>,
}

impl<T, F> Memoized<T, F> {
    pub(crate) const fn new(producer: F) -> Self {
        Self {
            producer,
            slot: OnceLock::new(),
        }
    }
}

impl<T, F> Deferred<T> for Memoized<T, F>
where
    T: Clone + Send + Sync,
    F: Fn() -> Maybe<T> + Send + Sync,
{
    fn evaluate(&self) -> Option<T> {
        if let Some(state) = self.slot.get() {
            tracing::trace!("reusing memoised lazy Maybe");
            return state.clone();
        }
        self.slot
            .get_or_init(|| {
                tracing::trace!(memo = true, "evaluating lazy Maybe");
                (self.producer)().into_option()
            })
            .clone()
    }

    fn cached(&self) -> Option<Option<&T>> {
        self.slot.get().map(Option::as_ref)
    }
}

/// Runs the producer on every observation.
pub(crate) struct Unmemoized<F> {
    producer: F,
}

impl<F> Unmemoized<F> {
    pub(crate) const fn new(producer: F) -> Self {
        Self { producer }
    }
}

impl<T, F> Deferred<T> for Unmemoized<F>
where
    F: Fn() -> Maybe<T> + Send + Sync,
{
    fn evaluate(&self) -> Option<T> {
        tracing::trace!(memo = false, "evaluating lazy Maybe");
        (self.producer)().into_option()
    }

    fn cached(&self) -> Option<Option<&T>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>, value: i32) -> impl Fn() -> Maybe<i32> + use<> {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Maybe::some(value)
        }
    }

    #[rstest]
    fn memoized_runs_producer_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let deferred: Memoized<i32, _> = Memoized::new(counting(&counter, 7));

        assert_eq!(deferred.cached(), None);
        assert_eq!(deferred.evaluate(), Some(7));
        assert_eq!(deferred.evaluate(), Some(7));
        assert_eq!(deferred.cached(), Some(Some(&7)));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn memoized_caches_absent_result() {
        let counter = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&counter);
        let deferred: Memoized<i32, _> = Memoized::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
            Maybe::<i32>::none()
        });

        assert_eq!(deferred.evaluate(), None);
        assert_eq!(deferred.evaluate(), None);
        assert_eq!(deferred.cached(), Some(None));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn unmemoized_runs_producer_every_time() {
        let counter = Arc::new(AtomicUsize::new(0));
        let deferred = Unmemoized::new(counting(&counter, 1));

        for _ in 0..3 {
            assert_eq!(Deferred::<i32>::evaluate(&deferred), Some(1));
        }
        assert_eq!(Deferred::<i32>::cached(&deferred), None);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
