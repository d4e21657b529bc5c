//! Higher-Kinded Type emulation through witnesses and Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Vec<_>` as type constructors
//! directly. Instead, a zero-sized *witness* type names the constructor and
//! exposes it as the generic associated type [`Kind::Of`]. Capability
//! contracts (`Functor`, `Bind`, ...) are traits over witnesses, and generic
//! algorithms take the witness as a value so that the compiler selects the
//! implementation at the call site.
//!
//! # Example
//!
//! ```rust
//! use lambars_witness::typeclass::{FVec, Kind};
//!
//! fn empty<W: Kind, B>(_witness: W) -> W::Of<B>
//! where
//!     W::Of<B>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Vec<String> = empty(FVec);
//! assert!(none.is_empty());
//! ```

/// A witness naming a container type constructor.
///
/// Implementors are stateless: two values of the same witness type are always
/// interchangeable, which is why `Copy + Default` is required.
///
/// # Laws
///
/// `W::Of<A>` must be the same constructor for every `A`; a witness never
/// changes the shape of the container it names.
///
/// # Example
///
/// ```rust
/// use lambars_witness::typeclass::{FMaybe, Kind};
/// use lambars_witness::control::Maybe;
///
/// fn assert_of<W: Kind<Of<i32> = Maybe<i32>>>(_witness: W) {}
/// assert_of(FMaybe);
/// ```
pub trait Kind: Copy + Default {
    /// The container type constructor applied to `A`.
    ///
    /// For [`FMaybe`](super::FMaybe), `Of<i32>` is `Maybe<i32>`.
    type Of<A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Maybe;
    use crate::typeclass::{FMaybe, FMaybeUnsafe, FVec};
    use rstest::rstest;

    #[rstest]
    fn maybe_witnesses_share_container() {
        fn assert_of<W: Kind<Of<String> = Maybe<String>>>(_witness: W) {}
        assert_of(FMaybe);
        assert_of(FMaybeUnsafe);
    }

    #[rstest]
    fn vec_witness_names_vec() {
        fn transform<W: Kind>(_witness: W) -> W::Of<char>
        where
            W::Of<char>: Default,
        {
            Default::default()
        }

        let result: Vec<char> = transform(FVec);
        assert!(result.is_empty());
    }

    #[rstest]
    fn witnesses_are_interchangeable() {
        assert_eq!(FMaybe, FMaybe::default());
        assert_eq!(FVec, FVec::default());
    }
}
