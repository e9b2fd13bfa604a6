//! Shared bucket-arithmetic helpers for the four probe-order variants.
//!
//! Every variant stores a bijective permutation's output directly in the
//! bucket array (`0` means empty, anything else is `P::hash(key)` for
//! the key that cell holds), and picks a bucket with Lemire's fastrange
//! rather than a modulo, so `m` need not be a power of two or a prime.

use crate::error::SetError;

pub mod blp;
pub mod lcfs;
pub mod lp;
pub mod rh;

/// Maps a hash to its preferred bucket in a table of `m` buckets:
/// `(h * m) >> 32`. Avoids the division a `% m` would cost on every
/// lookup and insert, at the price of a 64-bit intermediate multiply.
#[inline]
pub(crate) fn preferred_bucket(h: u32, m: usize) -> usize {
    (((h as u64) * (m as u64)) >> 32) as usize
}

/// Cyclic forward distance from bucket `b` to bucket `i`: how many
/// probes past its preferred bucket a key stored at `i` has travelled.
#[inline]
pub(crate) fn probe_distance(b: usize, i: usize, m: usize) -> usize {
    (i + m - b) % m
}

#[inline]
pub(crate) fn next(i: usize, m: usize) -> usize {
    if i + 1 == m {
        0
    } else {
        i + 1
    }
}

#[inline]
pub(crate) fn prev(i: usize, m: usize) -> usize {
    if i == 0 {
        m - 1
    } else {
        i - 1
    }
}

/// Checks the forward-reachability invariant shared by [`crate::set::lp`]
/// and [`crate::set::lcfs`]: every occupied cell `b` must be reachable
/// from its preferred bucket by a forward scan that never crosses an
/// empty cell first. Whether a cell got there by plain linear probing or
/// by LCFS's shift-on-insert doesn't change what its own probe sequence
/// has to satisfy, so both variants share this one check.
pub(crate) fn forward_reachable(table: &[u32]) -> bool {
    let m = table.len();
    for b in 0..m {
        let cell = table[b];
        if cell == 0 {
            continue;
        }
        let mut i = preferred_bucket(cell, m);
        while i != b {
            if table[i] == 0 {
                return false;
            }
            i = next(i, m);
        }
    }
    true
}

/// `M = ⌊N / α⌋`. See `DESIGN.md` for why the floor was chosen over a
/// ceiling: `new(8, 0.75)` is expected to report capacity 10, and only
/// the floor produces that number.
pub(crate) fn capacity_for(n: usize, alpha: f64) -> Result<usize, SetError> {
    if n == 0 {
        return Err(SetError::InvalidArgument("n must be nonzero".to_string()));
    }
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(SetError::InvalidArgument(format!(
            "load factor {alpha} must lie in (0, 1]"
        )));
    }
    let m = ((n as f64) / alpha).floor() as usize;
    Ok(m.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_bucket_is_within_range() {
        for m in [1usize, 2, 3, 7, 1000] {
            for h in [0u32, 1, 2, u32::MAX / 2, u32::MAX] {
                assert!(preferred_bucket(h, m) < m);
            }
        }
    }

    #[test]
    fn preferred_bucket_is_monotonic_in_h() {
        let m = 101;
        let mut prev = preferred_bucket(0, m);
        for h in (0..=u32::MAX).step_by(1_000_003) {
            let b = preferred_bucket(h, m);
            assert!(b >= prev);
            prev = b;
        }
    }

    #[test]
    fn capacity_for_rounds_down() {
        assert_eq!(capacity_for(10, 0.5).unwrap(), 20);
        assert_eq!(capacity_for(10, 0.7).unwrap(), 14);
        assert_eq!(capacity_for(1, 1.0).unwrap(), 1);
        assert_eq!(capacity_for(8, 0.75).unwrap(), 10);
    }

    #[test]
    fn capacity_for_rejects_bad_arguments() {
        assert!(capacity_for(0, 0.5).is_err());
        assert!(capacity_for(10, 0.0).is_err());
        assert!(capacity_for(10, 1.5).is_err());
    }
}
