use super::bits::unshift_right64;
use super::Permutation64;

// Thomas Wang's 64-bit integer hash, with the leading `key = ~key` and
// additive constants dropped: both map 0 to a nonzero value, which this
// catalog cannot allow (0 is the empty-cell sentinel in `crate::set`).
// What remains is seven affine-over-GF(2) steps (`x += x << k` and
// `x ^= x >> k`), every one of which already fixes zero, so the whole
// composition does too; the shift widths and rotation counts are
// otherwise exactly Wang's.
const INV_SHL31: u64 = 0x3fffffff80000001;
const INV_SHL2_4: u64 = 0xcf3cf3cf3cf3cf3d;
const INV_SHL3_8: u64 = 0xd38ff08b1c03dd39;
const INV_SHL21: u64 = 0x800003ffffe00001;

/// A zero-fixing variant of Thomas Wang's 64-bit integer hash.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Wang64;

impl Permutation64 for Wang64 {
    #[inline]
    fn hash(x: u64) -> u64 {
        let mut key = x;
        key = key.wrapping_add(key << 21);
        key ^= key >> 24;
        key = key.wrapping_add(key << 3).wrapping_add(key << 8);
        key ^= key >> 14;
        key = key.wrapping_add(key << 2).wrapping_add(key << 4);
        key ^= key >> 28;
        key = key.wrapping_add(key << 31);
        key
    }

    #[inline]
    fn unhash(x: u64) -> u64 {
        // `y = x + (x << k)` is `y = x * (1 + 2^k) mod 2^64`, an odd
        // multiplier, so it inverts by multiplying by its modular
        // inverse; a two-term `x + (x<<k1) + (x<<k2)` is the same trick
        // with `1 + 2^k1 + 2^k2` as the multiplier.
        let mut key = x.wrapping_mul(INV_SHL31);
        key = unshift_right64(key, 28);
        key = key.wrapping_mul(INV_SHL2_4);
        key = unshift_right64(key, 14);
        key = key.wrapping_mul(INV_SHL3_8);
        key = unshift_right64(key, 24);
        key = key.wrapping_mul(INV_SHL21);
        key
    }
}
