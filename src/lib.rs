//! # lambars-witness
//!
//! Witness-based type class dispatch for Rust, with an optional-value
//! container built on top of it.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, BiFunctor, Bind, Foldable and numeric
//!   contracts, implemented by zero-sized witnesses and reached through
//!   generic dispatch functions
//! - **Maybe**: zero or one value, eager or lazily produced, with explicit
//!   safe and unsafe null handling
//! - **Prelude**: function-style forwarding over `Maybe`
//!
//! ## Example
//!
//! ```rust
//! use lambars_witness::prelude::*;
//!
//! let result = matches(filter(map(optional(Some(5)), |x| x * 2), |x| *x > 5), |v| v, || -1);
//! assert_eq!(result, 10);
//!
//! let sum = add(TNum, some(3), some(4));
//! assert_eq!(sum, some(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod control;
pub mod prelude;
pub mod typeclass;
