use super::bits::unshift_right64;
use super::Permutation64;

const C1: u64 = 0xbf58476d1ce4e5b9;
const C2: u64 = 0x94d049bb133111eb;
const C1_INV: u64 = 0x96de1b173f119089;
const C2_INV: u64 = 0x319642b2d24d8ec3;

/// "Variant13", David Stafford's 13th-best mixer from his splitmix64
/// finalizer search, also used as the default SplitMix64 output
/// function: three xor-shifts, two odd multiplies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Variant13;

impl Permutation64 for Variant13 {
    #[inline]
    fn hash(x: u64) -> u64 {
        let mut h = x;
        h ^= h >> 30;
        h = h.wrapping_mul(C1);
        h ^= h >> 27;
        h = h.wrapping_mul(C2);
        h ^= h >> 31;
        h
    }

    #[inline]
    fn unhash(x: u64) -> u64 {
        let mut h = unshift_right64(x, 31);
        h = h.wrapping_mul(C2_INV);
        h = unshift_right64(h, 27);
        h = h.wrapping_mul(C1_INV);
        unshift_right64(h, 30)
    }
}
