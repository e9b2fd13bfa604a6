use std::marker::PhantomData;

use crate::error::SetError;
use crate::hash::Permutation32;

use super::{capacity_for, next, preferred_bucket, probe_distance};

/// Robin Hood linear probing: insert swaps the incoming key for whichever
/// resident is currently closer to its own preferred bucket, carrying
/// the displaced key onward to find its own slot. The resulting
/// invariant (probe distance never decreases along an occupied run)
/// lets lookups stop as soon as they pass a cell with a smaller distance
/// than the target could possibly have, instead of scanning to the next
/// empty cell the way [`crate::set::lp::LpSet`] must.
pub struct RhSet<P: Permutation32> {
    table: Vec<u32>,
    len: usize,
    _perm: PhantomData<P>,
}

impl<P: Permutation32> RhSet<P> {
    pub fn new(n: usize, alpha: f64) -> Result<Self, SetError> {
        let m = capacity_for(n, alpha)?;
        Ok(Self {
            table: vec![0; m],
            len: 0,
            _perm: PhantomData,
        })
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|c| *c = 0);
        self.len = 0;
    }

    pub fn contains(&self, key: u32) -> bool {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        let m = self.table.len();
        let h = P::hash(key);
        let b = preferred_bucket(h, m);
        let mut i = b;
        let mut d = 0usize;
        loop {
            let cell = self.table[i];
            if cell == 0 {
                return false;
            }
            if cell == h {
                return true;
            }
            let cd = probe_distance(preferred_bucket(cell, m), i, m);
            if cd < d {
                return false;
            }
            i = next(i, m);
            d += 1;
        }
    }

    pub fn add(&mut self, key: u32) -> Result<bool, SetError> {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        if self.contains(key) {
            return Ok(false);
        }
        if self.len == self.table.len() {
            log::warn!(
                "RhSet::add: table full (capacity {}, load factor reached)",
                self.table.len()
            );
            return Err(SetError::TableFull);
        }
        let m = self.table.len();
        let mut h = P::hash(key);
        let mut i = preferred_bucket(h, m);
        let mut d = 0usize;
        loop {
            let cell = self.table[i];
            if cell == 0 {
                self.table[i] = h;
                self.len += 1;
                return Ok(true);
            }
            let cd = probe_distance(preferred_bucket(cell, m), i, m);
            if cd < d {
                self.table[i] = h;
                h = cell;
                d = cd;
            }
            i = next(i, m);
            d += 1;
        }
    }

    pub fn remove(&mut self, key: u32) -> bool {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        let m = self.table.len();
        let h = P::hash(key);
        let b = preferred_bucket(h, m);
        let mut i = b;
        let mut d = 0usize;
        let hole = loop {
            let cell = self.table[i];
            if cell == 0 {
                return false;
            }
            if cell == h {
                break i;
            }
            let cd = probe_distance(preferred_bucket(cell, m), i, m);
            if cd < d {
                return false;
            }
            i = next(i, m);
            d += 1;
        };
        self.backward_shift_delete(hole);
        self.len -= 1;
        true
    }

    /// Unlike [`crate::set::lp::backward_shift_delete`], the Robin Hood
    /// invariant means a cell can always be pulled back one step unless
    /// it already sits at its own preferred bucket, so there is no need
    /// to check whether the move is reachable, only whether it's worth
    /// making.
    fn backward_shift_delete(&mut self, mut hole: usize) {
        let m = self.table.len();
        loop {
            let j = next(hole, m);
            let cell = self.table[j];
            if cell == 0 {
                break;
            }
            if probe_distance(preferred_bucket(cell, m), j, m) == 0 {
                break;
            }
            self.table[hole] = cell;
            hole = j;
        }
        self.table[hole] = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.iter().filter(|&&c| c != 0).map(|&c| P::unhash(c))
    }

    /// Whole-array scan checking the Robin Hood invariant: within each
    /// maximal run of occupied cells, probe distance never decreases.
    /// Rotates the scan to start just past an empty cell when one
    /// exists, so a run that wraps across the array boundary is still
    /// checked as one contiguous sequence. Public rather than test-only
    /// so integration tests can call it after every mutation.
    pub fn invariant_holds(&self) -> bool {
        let m = self.table.len();
        let start = (0..m).find(|&i| self.table[i] == 0);
        let order: Box<dyn Iterator<Item = usize>> = match start {
            Some(s) => Box::new((0..m).map(move |k| (s + 1 + k) % m)),
            None => Box::new(0..m),
        };
        let mut run_distance = None;
        for b in order {
            let cell = self.table[b];
            if cell == 0 {
                run_distance = None;
                continue;
            }
            let d = probe_distance(preferred_bucket(cell, m), b, m);
            if let Some(prev) = run_distance {
                if d < prev {
                    return false;
                }
            }
            run_distance = Some(d);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Identity32, Prospector2};

    #[test]
    fn add_find_remove_roundtrip() {
        let mut s = RhSet::<Identity32>::new(8, 0.75).unwrap();
        assert!(s.add(5).unwrap());
        assert!(s.add(13).unwrap());
        assert!(!s.add(5).unwrap());
        assert!(s.contains(5));
        assert!(s.remove(5));
        assert!(!s.contains(5));
        assert!(s.contains(13));
    }

    #[test]
    fn table_full_is_reported_not_panicked() {
        let mut s = RhSet::<Identity32>::new(1, 1.0).unwrap();
        assert!(s.add(1).unwrap());
        assert!(matches!(s.add(2), Err(SetError::TableFull)));
    }

    #[test]
    fn survives_a_dense_cluster() {
        let mut s = RhSet::<Prospector2>::new(64, 0.9).unwrap();
        let n = (s.capacity() as f64 * 0.85) as u32;
        for k in 1..=n {
            s.add(k).unwrap();
            assert!(s.invariant_holds());
        }
        for k in 1..=n {
            assert!(s.contains(k), "missing {k}");
        }
        for k in (1..=n).step_by(2) {
            assert!(s.remove(k));
            assert!(s.invariant_holds());
        }
        for k in 1..=n {
            assert_eq!(s.contains(k), k % 2 == 0);
        }
    }
}
