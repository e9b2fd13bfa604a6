use super::bits::unshift_right32;
use super::Permutation32;

const LOWBIAS_C1: u32 = 0x7feb352d;
const LOWBIAS_C2: u32 = 0x846ca68b;
const LOWBIAS_C1_INV: u32 = 0x1d69e2a5;
const LOWBIAS_C2_INV: u32 = 0x43021123;

/// `lowbias32` from Chris Wellons' hash-prospector search: two
/// multiply/xor-shift rounds chosen for the lowest bias of any constant
/// the search turned up at this round count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Prospector2;

impl Permutation32 for Prospector2 {
    #[inline]
    fn hash(x: u32) -> u32 {
        let mut h = x;
        h ^= h >> 16;
        h = h.wrapping_mul(LOWBIAS_C1);
        h ^= h >> 15;
        h = h.wrapping_mul(LOWBIAS_C2);
        h ^= h >> 16;
        h
    }

    #[inline]
    fn unhash(x: u32) -> u32 {
        let mut h = unshift_right32(x, 16);
        h = h.wrapping_mul(LOWBIAS_C2_INV);
        h = unshift_right32(h, 15);
        h = h.wrapping_mul(LOWBIAS_C1_INV);
        unshift_right32(h, 16)
    }
}

const TRIPLE_C1: u32 = 0xed5ad4bb;
const TRIPLE_C2: u32 = 0xac4c1b51;
const TRIPLE_C3: u32 = 0x31848bab;
const TRIPLE_C1_INV: u32 = 0x79a85073;
const TRIPLE_C2_INV: u32 = 0x469e0db1;
const TRIPLE_C3_INV: u32 = 0x32b21703;

/// `triple32` from the same hash-prospector search: a third
/// multiply/xor-shift round over [`Prospector2`], trading a little
/// speed for a further-reduced bias.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Prospector3;

impl Permutation32 for Prospector3 {
    #[inline]
    fn hash(x: u32) -> u32 {
        let mut h = x;
        h ^= h >> 17;
        h = h.wrapping_mul(TRIPLE_C1);
        h ^= h >> 11;
        h = h.wrapping_mul(TRIPLE_C2);
        h ^= h >> 15;
        h = h.wrapping_mul(TRIPLE_C3);
        h ^= h >> 14;
        h
    }

    #[inline]
    fn unhash(x: u32) -> u32 {
        let mut h = unshift_right32(x, 14);
        h = h.wrapping_mul(TRIPLE_C3_INV);
        h = unshift_right32(h, 15);
        h = h.wrapping_mul(TRIPLE_C2_INV);
        h = unshift_right32(h, 11);
        h = h.wrapping_mul(TRIPLE_C1_INV);
        unshift_right32(h, 17)
    }
}
