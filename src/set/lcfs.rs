use std::marker::PhantomData;

use crate::error::SetError;
use crate::hash::Permutation32;

use super::lp::backward_shift_delete;
use super::{capacity_for, forward_reachable, prev, preferred_bucket};

enum Lookup {
    Found(usize),
    Empty(usize),
}

/// Last-come-first-served linear probing: lookup probes forward exactly
/// like [`crate::set::lp::LpSet`], but insertion puts the *new* key at
/// its own preferred bucket and shoves the entire displaced run one step
/// further along, so whichever key was inserted most recently is always
/// the one sitting closest to home. Deletion needs no distinct logic:
/// the probe sequence a backward shift must preserve doesn't care which
/// insertion policy produced it, so this reuses LP's.
pub struct LcfsSet<P: Permutation32> {
    table: Vec<u32>,
    len: usize,
    _perm: PhantomData<P>,
}

impl<P: Permutation32> LcfsSet<P> {
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
            i = super::next(i, m);
            if i == b {
                return Lookup::Empty(i);
            }
        }
    }

    pub fn contains(&self, key: u32) -> bool {
        matches!(self.lookup(key), Lookup::Found(_))
    }

    pub fn add(&mut self, key: u32) -> Result<bool, SetError> {
        let e = match self.lookup(key) {
            Lookup::Found(_) => return Ok(false),
            Lookup::Empty(e) => e,
        };
        if self.len == self.table.len() {
            log::warn!(
                "LcfsSet::add: table full (capacity {}, load factor reached)",
                self.table.len()
            );
            return Err(SetError::TableFull);
        }
        let m = self.table.len();
        let h = P::hash(key);
        let b = preferred_bucket(h, m);
        // Shove the whole run from `b` up to the empty cell `e` forward
        // by one, opening `b` back up for the key that belongs there now.
        let mut i = e;
        while i != b {
            let p = prev(i, m);
            self.table[i] = self.table[p];
            i = p;
        }
        self.table[b] = h;
        self.len += 1;
        Ok(true)
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
    /// an empty cell. This is the same check [`crate::set::lp::LpSet`]
    /// uses, since which insertion policy produced a cell's probe
    /// sequence doesn't change what that sequence has to satisfy.
    /// Public rather than test-only so integration tests can call it
    /// after every mutation.
    pub fn invariant_holds(&self) -> bool {
        forward_reachable(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Identity32;

    #[test]
    fn newest_key_lands_on_its_own_bucket() {
        let mut s = LcfsSet::<Identity32>::new(8, 0.5).unwrap();
        let m = s.capacity() as u32;
        // Under Identity32, `k` and `k + m` share a preferred bucket.
        // The later insert (`k + m`) must end up at that bucket itself;
        // `k`, inserted first, is the one pushed down the run.
        assert!(s.add(1).unwrap());
        assert!(s.add(1 + m).unwrap());
        let b = preferred_bucket(crate::hash::Identity32::hash(1), s.capacity());
        assert_eq!(s.table[b], crate::hash::Identity32::hash(1 + m));
        assert!(s.contains(1));
        assert!(s.contains(1 + m));
    }

    #[test]
    fn add_find_remove_roundtrip() {
        let mut s = LcfsSet::<Identity32>::new(16, 0.6).unwrap();
        for k in 1..10u32 {
            assert!(s.add(k).unwrap());
        }
        for k in 1..10u32 {
            assert!(s.contains(k));
        }
        assert!(s.remove(5));
        assert!(!s.contains(5));
        for k in [1, 2, 3, 4, 6, 7, 8, 9] {
            assert!(s.contains(k));
        }
    }

    #[test]
    fn remove_terminates_on_a_completely_full_table() {
        let mut s = LcfsSet::<Identity32>::new(4, 1.0).unwrap();
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
}
