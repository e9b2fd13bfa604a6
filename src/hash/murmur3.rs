use super::bits::{unshift_right32, unshift_right64};
use super::{Permutation32, Permutation64};

const C1_32: u32 = 0x85ebca6b;
const C2_32: u32 = 0xc2b2ae35;
const C1_32_INV: u32 = 0xa5cb9243;
const C2_32_INV: u32 = 0x7ed1b41d;

/// The 32-bit finalizer from Austin Appleby's MurmurHash3: three
/// xor-shifts separated by two odd multiplies, tuned by Appleby to pass
/// avalanche testing. `fmix32` in the reference C++ implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Murmur3_32;

impl Permutation32 for Murmur3_32 {
    #[inline]
    fn hash(x: u32) -> u32 {
        let mut h = x;
        h ^= h >> 16;
        h = h.wrapping_mul(C1_32);
        h ^= h >> 13;
        h = h.wrapping_mul(C2_32);
        h ^= h >> 16;
        h
    }

    #[inline]
    fn unhash(x: u32) -> u32 {
        let mut h = unshift_right32(x, 16);
        h = h.wrapping_mul(C2_32_INV);
        h = unshift_right32(h, 13);
        h = h.wrapping_mul(C1_32_INV);
        unshift_right32(h, 16)
    }
}

const C1_64: u64 = 0xff51afd7ed558ccd;
const C2_64: u64 = 0xc4ceb9fe1a85ec53;
const C1_64_INV: u64 = 0x4f74430c22a54005;
const C2_64_INV: u64 = 0x9cb4b2f8129337db;

/// The 64-bit finalizer from MurmurHash3 (`fmix64`): the same
/// three-xor-shift-two-multiply shape as [`Murmur3_32`], widened to
/// 64-bit shifts and constants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Murmur3_64;

impl Permutation64 for Murmur3_64 {
    #[inline]
    fn hash(x: u64) -> u64 {
        let mut h = x;
        h ^= h >> 33;
        h = h.wrapping_mul(C1_64);
        h ^= h >> 33;
        h = h.wrapping_mul(C2_64);
        h ^= h >> 33;
        h
    }

    #[inline]
    fn unhash(x: u64) -> u64 {
        let mut h = unshift_right64(x, 33);
        h = h.wrapping_mul(C2_64_INV);
        h = unshift_right64(h, 33);
        h = h.wrapping_mul(C1_64_INV);
        unshift_right64(h, 33)
    }
}
