//! The `Maybe` container and its null discipline.
//!
//! - [`Maybe`]: zero or one value, eager or lazily produced
//! - [`MaybeError`]: contract violations (null payloads, missing arguments,
//!   null handler results)
//! - [`NullPolicy`]: how a nullable handler result is settled, with the
//!   [`Safe`] (reject) and [`Unsafe`] (propagate) policies
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//!
//! let lazy = Maybe::lazy_memo(|| Maybe::some(6 * 7));
//! assert!(!lazy.is_evaluated());
//!
//! assert_eq!(lazy.clone().if_none_value(0), 42);
//! assert!(lazy.is_evaluated());
//! ```
//!
//! ## Null Policies
//!
//! ```rust
//! use lambars_witness::control::{Maybe, Safe, Unsafe};
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert!(absent.clone().match_with(Safe, Some, || None).is_err());
//! assert_eq!(absent.match_with(Unsafe, Some, || None), None);
//! ```

mod error;
mod lazy;
mod maybe;
mod policy;

pub use error::{Branch, MaybeError};
pub use maybe::Maybe;
pub use policy::{NullPolicy, Safe, Unsafe};
