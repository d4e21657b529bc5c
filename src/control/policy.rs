//! Extraction policies for nullable handler results.
//!
//! A match handler that may legitimately produce "no value" returns
//! `Option<R>`. The policy decides what such a result settles into:
//!
//! - [`Safe`] rejects a null with [`MaybeError::NullResult`].
//! - [`Unsafe`] passes the null through as `None`.
//!
//! There is exactly one container implementation; only the policy varies.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::{Maybe, Safe, Unsafe};
//!
//! let absent: Maybe<i32> = Maybe::none();
//!
//! let strict = absent.clone().match_with(Safe, Some, || None::<i32>);
//! assert!(strict.is_err());
//!
//! let loose = absent.match_with(Unsafe, Some, || None::<i32>);
//! assert_eq!(loose, None);
//! ```

use std::fmt;

use super::error::{Branch, MaybeError};

/// A null-handling policy applied at the extraction boundary.
pub trait NullPolicy: Copy + Default + fmt::Debug {
    /// What a nullable handler result settles into under this policy.
    type Output<R>;

    /// Settles the result produced by the handler for `branch`.
    fn settle<R>(self, result: Option<R>, branch: Branch) -> Self::Output<R>;
}

/// Rejects null handler results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Safe;

/// Accepts null handler results and propagates them as `None`.
///
/// This is an explicit opt-in to looser null discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unsafe;

impl NullPolicy for Safe {
    type Output<R> = Result<R, MaybeError>;

    #[inline]
    fn settle<R>(self, result: Option<R>, branch: Branch) -> Result<R, MaybeError> {
        result.ok_or_else(|| {
            tracing::debug!(%branch, "safe handler returned null");
            MaybeError::NullResult { branch }
        })
    }
}

impl NullPolicy for Unsafe {
    type Output<R> = Option<R>;

    #[inline]
    fn settle<R>(self, result: Option<R>, _branch: Branch) -> Option<R> {
        result
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<Safe>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<Unsafe>(), 0);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn safe_passes_present_result() {
        assert_eq!(Safe.settle(Some(3), Branch::Some), Ok(3));
    }

    #[rstest]
    #[case(Branch::Some)]
    #[case(Branch::None)]
    fn safe_rejects_null_with_branch(#[case] branch: Branch) {
        assert_eq!(
            Safe.settle::<i32>(None, branch),
            Err(MaybeError::NullResult { branch })
        );
    }

    #[rstest]
    fn unsafe_propagates_null() {
        assert_eq!(Unsafe.settle::<i32>(None, Branch::None), None);
        assert_eq!(Unsafe.settle(Some("x"), Branch::Some), Some("x"));
    }
}
