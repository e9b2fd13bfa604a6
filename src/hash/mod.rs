//! A catalog of reversible integer permutations used as hash functions by
//! [`crate::set`].
//!
//! Every permutation here fixes zero (`hash(0) == 0`, `unhash(0) == 0`)
//! and is a true bijection of its domain, so `unhash(hash(x)) == x` and
//! `hash(unhash(x)) == x` hold for every `x`. The constants are part of
//! the external contract: a hash is meaningless without the permutation
//! that produced it, so they are never retuned after release, even if a
//! "better" constant turns up.
//!
//! Callers must never invoke `hash` or `unhash` with `0` when `0` is
//! being used as an empty-cell sentinel; violating that precondition is
//! a programmer error, not a runtime one, and the permutation would
//! silently return `0` right back rather than signal anything.

mod bits;
mod degski;
mod h2;
mod identity;
mod murmur3;
mod phi;
mod prospector;
mod speck;
mod variant13;
mod wang;

pub use degski::Degski64;
pub use h2::H2;
pub use identity::Identity32;
pub use murmur3::{Murmur3_32, Murmur3_64};
pub use phi::{Phi32, Phi64};
pub use prospector::{Prospector2, Prospector3};
pub use speck::Speck3264;
pub use variant13::Variant13;
pub use wang::Wang64;

/// A constant bijective permutation of the 32-bit integer domain.
///
/// Implementations are zero-sized marker types: the permutation is a
/// fixed constant rather than a configurable instance, so `hash` and
/// `unhash` are plain associated functions, selected at the type level
/// the way [`crate::set`]'s variants pick a `P: Permutation32` to store
/// hashes with. This keeps dispatch static; a vtable indirection would
/// dominate the cost of the handful of shifts and multiplies each
/// permutation actually does.
pub trait Permutation32: Copy + Default {
    /// Maps `x` to its hash. `hash(0)` is always `0`.
    fn hash(x: u32) -> u32;
    /// The inverse of [`hash`](Permutation32::hash): `unhash(hash(x)) == x`.
    fn unhash(x: u32) -> u32;
}

/// A constant bijective permutation of the 64-bit integer domain.
pub trait Permutation64: Copy + Default {
    /// Maps `x` to its hash. `hash(0)` is always `0`.
    fn hash(x: u64) -> u64;
    /// The inverse of [`hash`](Permutation64::hash): `unhash(hash(x)) == x`.
    fn unhash(x: u64) -> u64;
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared property-test helpers for the permutation catalog.

    use super::{Permutation32, Permutation64};

    pub(crate) fn round_trips_32<P: Permutation32>(samples: &[u32]) {
        for &x in samples {
            if x == 0 {
                continue;
            }
            assert_eq!(P::unhash(P::hash(x)), x, "unhash(hash(x)) != x for {x:#x}");
            assert_eq!(P::hash(P::unhash(x)), x, "hash(unhash(x)) != x for {x:#x}");
            assert_ne!(P::hash(x), 0, "hash({x:#x}) collided with the empty sentinel");
        }
    }

    pub(crate) fn round_trips_64<P: Permutation64>(samples: &[u64]) {
        for &x in samples {
            if x == 0 {
                continue;
            }
            assert_eq!(P::unhash(P::hash(x)), x, "unhash(hash(x)) != x for {x:#x}");
            assert_eq!(P::hash(P::unhash(x)), x, "hash(unhash(x)) != x for {x:#x}");
            assert_ne!(P::hash(x), 0, "hash({x:#x}) collided with the empty sentinel");
        }
    }
}
