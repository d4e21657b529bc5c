//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` contract and the generic [`map`]
//! dispatch function. The witness passed as the first argument selects the
//! implementation at compile time; the container value is never inspected
//! for a type tag.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! map(w, fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(w, map(w, fa, f), g) == map(w, fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FVec, map};
//!
//! assert_eq!(map(FMaybe, Maybe::some(5), |n| n.to_string()), Maybe::some("5".to_string()));
//! assert_eq!(map(FVec, vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::Kind;
use super::witness::{FMaybe, FMaybeUnsafe, FVec};
use crate::control::MaybeError;

/// A witness whose container can have a function mapped over its contents.
///
/// The function is `FnMut` because multi-element containers call it once per
/// element. An implementation must not call it for an empty container.
pub trait Functor: Kind {
    /// Applies `function` to every value inside `fa`.
    fn map<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B;
}

impl Functor for FMaybe {
    #[inline]
    fn map<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(function)
    }
}

impl Functor for FMaybeUnsafe {
    #[inline]
    fn map<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(function)
    }
}

impl Functor for FVec {
    #[inline]
    fn map<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(function).collect()
    }
}

/// Maps `function` over `fa` through the witness `witness`.
#[inline]
pub fn map<W, A, B, F>(witness: W, fa: W::Of<A>, function: F) -> W::Of<B>
where
    W: Functor,
    F: FnMut(A) -> B,
{
    witness.map::<A, B, F>(fa, function)
}

/// Maps a transform that may be missing.
///
/// # Errors
///
/// Returns [`MaybeError::NullArgument`] if `function` is `None`. The
/// container is not observed in that case.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::{Maybe, MaybeError};
/// use lambars_witness::typeclass::{FMaybe, try_map};
///
/// let missing: Option<fn(i32) -> i32> = None;
/// assert_eq!(
///     try_map(FMaybe, Maybe::some(1), missing),
///     Err(MaybeError::NullArgument { name: "function" })
/// );
/// ```
pub fn try_map<W, A, B, F>(witness: W, fa: W::Of<A>, function: Option<F>) -> Result<W::Of<B>, MaybeError>
where
    W: Functor,
    F: FnMut(A) -> B,
{
    let Some(function) = function else {
        tracing::debug!("rejected null transform passed to map");
        return Err(MaybeError::NullArgument { name: "function" });
    };
    Ok(witness.map::<A, B, F>(fa, function))
}
