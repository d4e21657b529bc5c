//! Error types for the null discipline of [`Maybe`](super::Maybe).
//!
//! Every failure in this crate is a contract violation on the caller's side:
//! a null payload handed to a rejecting constructor, a missing producer or
//! transform, or a safe handler that produced no value. None of them are
//! transient, so nothing here is retried.

use std::fmt;

/// The branch of a [`Maybe`](super::Maybe) whose handler was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The present branch.
    Some,
    /// The absent branch.
    None,
}

impl fmt::Display for Branch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => write!(formatter, "Some"),
            Self::None => write!(formatter, "None"),
        }
    }
}

/// A violation of the null discipline.
///
/// # Examples
///
/// ```rust
/// use lambars_witness::control::{Maybe, MaybeError};
///
/// let rejected = Maybe::<i32>::try_some(None);
/// assert_eq!(rejected, Err(MaybeError::NullPayload));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MaybeError {
    /// A present value was requested for a null payload.
    #[error("Maybe: value is null; use `Maybe::optional` to accept an absent payload")]
    NullPayload,

    /// A required producer or transform argument was null.
    #[error("Maybe: argument `{name}` is null")]
    NullArgument {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// A handler evaluated under the safe policy returned no value.
    #[error("Maybe: the {branch} handler returned null under the safe policy")]
    NullResult {
        /// The branch whose handler produced the null.
        branch: Branch,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Branch::Some, "Some")]
    #[case(Branch::None, "None")]
    fn branch_display(#[case] branch: Branch, #[case] expected: &str) {
        assert_eq!(branch.to_string(), expected);
    }

    #[rstest]
    fn null_argument_names_the_argument() {
        let error = MaybeError::NullArgument { name: "producer" };
        assert_eq!(error.to_string(), "Maybe: argument `producer` is null");
    }

    #[rstest]
    fn null_result_names_the_branch() {
        let error = MaybeError::NullResult {
            branch: Branch::None,
        };
        assert!(error.to_string().contains("None handler"));
    }
}
