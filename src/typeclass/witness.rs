//! Witness types for the containers shipped with this crate.
//!
//! Each witness is a zero-sized unit struct that names exactly one container
//! type. The contract implementations live next to each contract.
//!
//! - [`FMaybe`]: safe witness for [`Maybe`]
//! - [`FMaybeUnsafe`]: unsafe witness for [`Maybe`]; its bimap handlers may
//!   return null, which yields an absent result
//! - [`FVec`]: witness for `Vec`

use super::higher::Kind;
use crate::control::Maybe;

/// Safe witness for [`Maybe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FMaybe;

/// Unsafe witness for [`Maybe`].
///
/// Identical to [`FMaybe`] except that handlers passed to
/// [`BiFunctor::bimap`](super::BiFunctor::bimap) return `Option<B>` and a
/// `None` is accepted as "no value".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FMaybeUnsafe;

/// Witness for `Vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FVec;

impl Kind for FMaybe {
    type Of<A> = Maybe<A>;
}

impl Kind for FMaybeUnsafe {
    type Of<A> = Maybe<A>;
}

impl Kind for FVec {
    type Of<A> = Vec<A>;
}

static_assertions::const_assert_eq!(std::mem::size_of::<FMaybe>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<FMaybeUnsafe>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<FVec>(), 0);
static_assertions::assert_impl_all!(FMaybe: Copy, Send, Sync);
static_assertions::assert_impl_all!(FMaybeUnsafe: Copy, Send, Sync);
static_assertions::assert_impl_all!(FVec: Copy, Send, Sync);
