use super::bits::unshift_right64;
use super::Permutation64;

const MUL: u64 = 0xd6e8feb86659fd93;
const INV: u64 = 0xcfee444d8b59a89b;

/// Degski's 64-bit mixer: the constant `0xd6e8feb86659fd93` (picked to
/// pass the full Middle Square Weyl Sequence test battery) applied
/// twice, each time preceded by a 32-bit xor-shift.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Degski64;

impl Permutation64 for Degski64 {
    #[inline]
    fn hash(x: u64) -> u64 {
        let mut h = x;
        h ^= h >> 32;
        h = h.wrapping_mul(MUL);
        h ^= h >> 32;
        h = h.wrapping_mul(MUL);
        h ^= h >> 32;
        h
    }

    #[inline]
    fn unhash(x: u64) -> u64 {
        let mut h = unshift_right64(x, 32);
        h = h.wrapping_mul(INV);
        h = unshift_right64(h, 32);
        h = h.wrapping_mul(INV);
        unshift_right64(h, 32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::test_support::round_trips_64;

    #[test]
    fn round_trips() {
        round_trips_64::<Degski64>(&[1, 2, 3, 0x1234_5678_9abc_def0, u64::MAX]);
    }
}
