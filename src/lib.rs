//! Fixed-capacity open-addressing integer sets whose hash function is a
//! bijection on the 32-bit domain: the stored cell value IS the hash, so
//! the original key is always recoverable by applying the inverse
//! permutation. This means a key and its hash never need to be stored
//! separately, and every cell is exactly 4 bytes (plus the `0` sentinel
//! that marks a cell empty).
//!
//! Four probe-order disciplines share that layout and the "zero means
//! empty" sentinel, and differ only in their insert and delete policy:
//!
//! - [`LpSet`]: classic linear probing, backward-shift deletion.
//! - [`RhSet`]: Robin Hood linear probing, early-terminating lookup.
//! - [`LcfsSet`]: last-come-first-served linear probing.
//! - [`BlpSet`]: Amble-Knuth bidirectional linear probing.
//!
//! [`hash`] supplies the catalog of reversible integer permutations used
//! as hash functions; see [`hash::Permutation32`] for the bijection
//! contract every one of them satisfies.
//!
//! # Non-goals
//!
//! These sets never grow, never guarantee an iteration order, are not
//! safe to share across threads without external synchronization, store
//! no values alongside keys, and accept no key other than a non-zero
//! 32-bit integer. Growing a table means building a new one at a larger
//! capacity and re-inserting every non-zero cell; no re-hashing is
//! needed, since a stored hash is still that key's hash under the new
//! table's bucket count.

pub mod error;
pub mod hash;
pub mod set;

pub use error::SetError;
pub use set::blp::BlpSet;
pub use set::lcfs::LcfsSet;
pub use set::lp::LpSet;
pub use set::rh::RhSet;
