//! Witness-dispatched type classes.
//!
//! Rust has no native higher-kinded types, so each container type is named
//! by a zero-sized *witness* ([`FMaybe`], [`FMaybeUnsafe`], [`FVec`]) whose
//! [`Kind`] implementation maps an element type to the concrete container.
//! Every capability is a trait implemented by witnesses, and every operation
//! is a free function taking the witness as its first argument:
//!
//! - [`Functor`]: mapping over values ([`map`], [`try_map`])
//! - [`BiFunctor`]: mapping both the absent and the present state ([`bimap`])
//! - [`Pure`], [`Plus`], [`Bind`]: lifting, combining and binding
//!   ([`pure`], [`bind`], [`action`])
//! - The apply family, built on `Bind` ([`apply`], [`apply2`],
//!   [`apply_partial`], [`apply_curried`])
//! - [`Foldable`], [`BiFoldable`]: reduction ([`fold`], [`bifold`],
//!   [`forall`], [`exists`], [`biforall`], [`biexists`], [`count`])
//! - Numeric contracts with the [`TNum`] and [`TString`] witnesses, lifted
//!   over containers ([`add`], [`difference`], [`product`], [`divide`],
//!   [`divide_checked`])
//!
//! Implementations are selected at compile time from the witness type; no
//! runtime type inspection takes place.
//!
//! # Examples
//!
//! ```rust
//! use lambars_witness::control::Maybe;
//! use lambars_witness::typeclass::{FMaybe, FVec, Functor, TNum, add, map};
//!
//! fn double_all<W: Functor>(witness: W, values: W::Of<i32>) -> W::Of<i32> {
//!     map::<W, i32, i32, _>(witness, values, |n| n * 2)
//! }
//!
//! assert_eq!(double_all(FMaybe, Maybe::some(4)), Maybe::some(8));
//! assert_eq!(double_all(FVec, vec![1, 2]), vec![2, 4]);
//! assert_eq!(add(FMaybe, TNum, Maybe::some(3), Maybe::some(4)), Maybe::some(7));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod numeric;
mod witness;

pub use applicative::{apply, apply2, apply_curried, apply_partial};
pub use bifunctor::{BiFunctor, bimap};
pub use foldable::{BiFoldable, Foldable, biexists, bifold, biforall, count, exists, fold, forall};
pub use functor::{Functor, map, try_map};
pub use higher::Kind;
pub use monad::{Bind, Plus, Pure, action, bind, pure};
pub use numeric::{
    Addition, CheckedDivisible, Difference, Divisible, Product, TNum, TString, add, difference, divide,
    divide_checked, product,
};
pub use witness::{FMaybe, FMaybeUnsafe, FVec};
