use std::marker::PhantomData;

use crate::error::SetError;
use crate::hash::Permutation32;

use super::{capacity_for, forward_reachable, next, preferred_bucket, probe_distance};

enum Lookup {
    Found(usize),
    Empty(usize),
}

/// Classic linear probing: on collision, scan forward one bucket at a
/// time until an empty cell or the key itself turns up. Deletion uses
/// backward-shift so a removed key never leaves a tombstone behind for
/// later lookups to wade through.
pub struct LpSet<P: Permutation32> {
    table: Vec<u32>,
    len: usize,
    _perm: PhantomData<P>,
}

impl<P: Permutation32> LpSet<P> {
    /// Builds a table sized to hold at least `n` keys at load factor
    /// `alpha` (`0 < alpha <= 1`). Capacity is fixed for the table's
    /// lifetime; `new` is the only place it is chosen.
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

    fn lookup(&self, key: u32) -> Lookup {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        let m = self.table.len();
        let h = P::hash(key);
        let b = preferred_bucket(h, m);
        let mut i = b;
        loop {
            let cell = self.table[i];
            if cell == 0 {
                return Lookup::Empty(i);
            }
            if cell == h {
                return Lookup::Found(i);
            }
            i = next(i, m);
            if i == b {
                // A full table with no empty cell anywhere; `add` checks
                // `len == capacity` before this can be reached in practice.
                return Lookup::Empty(i);
            }
        }
    }

    pub fn contains(&self, key: u32) -> bool {
        matches!(self.lookup(key), Lookup::Found(_))
    }

    pub fn add(&mut self, key: u32) -> Result<bool, SetError> {
        match self.lookup(key) {
            Lookup::Found(_) => Ok(false),
            Lookup::Empty(i) => {
                if self.len == self.table.len() {
                    log::warn!(
                        "LpSet::add: table full (capacity {}, load factor reached)",
                        self.table.len()
                    );
                    return Err(SetError::TableFull);
                }
                self.table[i] = P::hash(key);
                self.len += 1;
                Ok(true)
            }
        }
    }

    pub fn remove(&mut self, key: u32) -> bool {
        let hole = match self.lookup(key) {
            Lookup::Found(i) => i,
            Lookup::Empty(_) => return false,
        };
        backward_shift_delete(&mut self.table, hole);
        self.len -= 1;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.iter().filter(|&&c| c != 0).map(|&c| P::unhash(c))
    }

    /// Whole-array scan checking that every occupied cell is reachable
    /// from its preferred bucket by a forward scan that never crosses
    /// an empty cell. Public rather than test-only so integration tests
    /// can call it after every mutation.
    pub fn invariant_holds(&self) -> bool {
        forward_reachable(&self.table)
    }
}

/// Walks forward from the vacated `hole`, pulling back every cell whose
/// home bucket still lies within reach of `hole`, until an empty cell
/// ends the run. Shared with [`crate::set::lcfs::LcfsSet`]: the check
/// (`k` lies in the cyclic span from `hole` to `j`) only depends on the
/// probe sequence each key must still satisfy, not on how it got there,
/// so it is correct for any insertion policy built on linear probing.
///
/// At `alpha == 1.0` a table can be entirely full at the moment of a
/// `remove`, in which case no cell ahead of `hole` is ever empty; `start`
/// bounds the walk to a single revolution so it still terminates, mirroring
/// the full-revolution guard `lookup` already uses.
pub(crate) fn backward_shift_delete(table: &mut [u32], mut hole: usize) {
    let m = table.len();
    let start = hole;
    let mut j = hole;
    loop {
        j = next(j, m);
        if j == start {
            break;
        }
        let cell = table[j];
        if cell == 0 {
            break;
        }
        let k = preferred_bucket(cell, m);
        if probe_distance(k, hole, m) <= probe_distance(k, j, m) {
            table[hole] = cell;
            hole = j;
        }
    }
    table[hole] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Identity32;

    #[test]
    fn add_find_remove_roundtrip() {
        let mut s = LpSet::<Identity32>::new(8, 0.75).unwrap();
        assert!(s.add(5).unwrap());
        assert!(s.add(13).unwrap());
        assert!(!s.add(5).unwrap());
        assert!(s.contains(5));
        assert!(s.contains(13));
        assert!(s.remove(5));
        assert!(!s.contains(5));
        assert!(s.contains(13));
        assert!(!s.remove(5));
    }

    #[test]
    fn rejects_zero_load_factor() {
        assert!(LpSet::<Identity32>::new(8, 0.0).is_err());
    }

    #[test]
    fn table_full_is_reported_not_panicked() {
        let mut s = LpSet::<Identity32>::new(1, 1.0).unwrap();
        assert!(s.add(1).unwrap());
        assert!(matches!(s.add(2), Err(SetError::TableFull)));
    }

    #[test]
    fn remove_terminates_on_a_completely_full_table() {
        let mut s = LpSet::<Identity32>::new(4, 1.0).unwrap();
        for k in 1..=4u32 {
            assert!(s.add(k).unwrap());
        }
        assert_eq!(s.len(), s.capacity());
        assert!(s.remove(1));
        assert!(!s.contains(1));
        for k in 2..=4u32 {
            assert!(s.contains(k));
        }
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn delete_preserves_lookups_for_survivors() {
        let mut s = LpSet::<Identity32>::new(16, 0.5).unwrap();
        let m = s.capacity() as u32;
        let keys: Vec<u32> = (1..m).filter(|k| k % 3 != 0).collect();
        for &k in &keys {
            s.add(k).unwrap();
        }
        for (idx, &k) in keys.iter().enumerate() {
            if idx % 2 == 0 {
                assert!(s.remove(k));
            }
        }
        for (idx, &k) in keys.iter().enumerate() {
            assert_eq!(s.contains(k), idx % 2 != 0);
        }
    }
}
