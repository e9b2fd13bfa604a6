use std::marker::PhantomData;

use crate::error::SetError;
use crate::hash::Permutation32;

use super::{capacity_for, preferred_bucket};

enum Direction {
    Left,
    Right,
    None,
}

/// Amble & Knuth's bidirectional linear probing: every maximal run of
/// occupied cells is kept sorted in unsigned ascending order by hash, so
/// a lookup that lands in the middle of a run can walk toward the
/// target in whichever direction the comparison points and stop the
/// moment it passes where the target would be, never needing to reach
/// an empty cell to conclude absence the way [`crate::set::lp::LpSet`]
/// does.
///
/// A collision searches for room in the direction the sort order
/// demands, falling back to the other side only if that direction is
/// blocked by the array boundary before it found an empty cell (this
/// variant never wraps, since "left" and "right" would stop meaning
/// anything across the wrap). A run that spans the whole table therefore
/// reports [`SetError::TableFull`] even where a cyclic variant would
/// still find room.
pub struct BlpSet<P: Permutation32> {
    table: Vec<u32>,
    len: usize,
    _perm: PhantomData<P>,
}

impl<P: Permutation32> BlpSet<P> {
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

    /// Bidirectional sorted search for `h`'s bucket: starting at its
    /// preferred bucket, walk toward wherever the sort order says `h`
    /// must be, stopping as soon as the cells on the far side could not
    /// possibly hold it.
    fn locate(&self, h: u32) -> Option<usize> {
        let m = self.table.len();
        let b = preferred_bucket(h, m);
        let cell = self.table[b];
        if cell == 0 {
            return None;
        }
        if cell == h {
            return Some(b);
        }
        if cell < h {
            let mut i = b;
            loop {
                i += 1;
                if i >= m {
                    return None;
                }
                let cell = self.table[i];
                if cell == 0 || cell > h {
                    return None;
                }
                if cell == h {
                    return Some(i);
                }
            }
        } else {
            let mut i = b;
            loop {
                if i == 0 {
                    return None;
                }
                i -= 1;
                let cell = self.table[i];
                if cell == 0 || cell < h {
                    return None;
                }
                if cell == h {
                    return Some(i);
                }
            }
        }
    }

    pub fn contains(&self, key: u32) -> bool {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        self.locate(P::hash(key)).is_some()
    }

    pub fn add(&mut self, key: u32) -> Result<bool, SetError> {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        let m = self.table.len();
        let h = P::hash(key);
        if self.locate(h).is_some() {
            return Ok(false);
        }
        let b = preferred_bucket(h, m);
        if self.table[b] == 0 {
            self.table[b] = h;
            self.len += 1;
            return Ok(true);
        }
        let probe_left = if b == 0 {
            false
        } else if b == m - 1 {
            true
        } else {
            self.table[b] < h
        };
        if self.shift_and_insert(b, h, probe_left) || self.shift_and_insert(b, h, !probe_left) {
            self.len += 1;
            return Ok(true);
        }
        log::warn!(
            "BlpSet::add: table full (capacity {}, run boundary reached in both directions)",
            m
        );
        Err(SetError::TableFull)
    }

    /// Probes from `b` for the nearest empty cell in the given direction,
    /// then walks the hole back toward `b`, pulling each neighbor across
    /// it only while that neighbor belongs on the far side of `h`: this
    /// is exactly the inner loop of an insertion sort, with the array
    /// slice between the empty cell and `b` as the unsorted tail. Returns
    /// `false`, without touching the table, if this direction runs into
    /// the array boundary before finding room.
    fn shift_and_insert(&mut self, b: usize, h: u32, left: bool) -> bool {
        let m = self.table.len();
        if left {
            let mut e = b;
            loop {
                if e == 0 {
                    return false;
                }
                e -= 1;
                if self.table[e] == 0 {
                    break;
                }
            }
            let mut hole = e;
            while hole + 1 <= b && self.table[hole + 1] < h {
                self.table[hole] = self.table[hole + 1];
                hole += 1;
            }
            self.table[hole] = h;
        } else {
            let mut e = b;
            loop {
                e += 1;
                if e >= m {
                    return false;
                }
                if self.table[e] == 0 {
                    break;
                }
            }
            let mut hole = e;
            while hole >= 1 && hole - 1 >= b && self.table[hole - 1] > h {
                self.table[hole] = self.table[hole - 1];
                hole -= 1;
            }
            self.table[hole] = h;
        }
        true
    }

    pub fn remove(&mut self, key: u32) -> bool {
        assert_ne!(key, 0, "0 is the empty-cell sentinel and not a storable key");
        let h = P::hash(key);
        let b = match self.locate(h) {
            Some(b) => b,
            None => return false,
        };
        self.delete_at(b);
        self.len -= 1;
        true
    }

    /// Picks which side's chain closes the gap left at `b`. A cell not
    /// sitting at its own preferred bucket always pulls in the neighbor
    /// that shares its preference; only a tie between two neighbors that
    /// both prefer `b` falls back to "whichever hash is numerically
    /// closer," an heuristic with no deeper justification than that the
    /// original design picked it, kept here bit-for-bit.
    ///
    /// `b`'s preferred bucket `p` is compared against `b` itself
    /// regardless of whether `b` sits at an array edge: forcing a fixed
    /// direction purely because `b == 0` or `b == m - 1` can drag a
    /// neighbor that is sitting at its *own* preferred bucket out of
    /// that bucket even though nothing on the far side of `b` needs to
    /// move at all (e.g. deleting the last element of a run that ends at
    /// the array's edge). A missing neighbor (there is no `b - 1` at the
    /// left edge, no `b + 1` at the right) is treated the same way an
    /// empty one already is below, which lets the boundary walks' own
    /// bounds checks (`e + 1 < m`, `e > 0`) degrade to a no-op shift when
    /// there is truly nothing to pull in from that side.
    fn delete_at(&mut self, b: usize) {
        let m = self.table.len();
        let p = preferred_bucket(self.table[b], m);
        let l = (b > 0 && self.table[b - 1] != 0).then(|| preferred_bucket(self.table[b - 1], m));
        let r =
            (b + 1 < m && self.table[b + 1] != 0).then(|| preferred_bucket(self.table[b + 1], m));
        let dir = if b == p {
            match (l == Some(p), r == Some(p)) {
                (false, false) => Direction::None,
                (true, false) => Direction::Right,
                (false, true) => Direction::Left,
                (true, true) => {
                    let dl = self.table[b].abs_diff(self.table[b - 1]);
                    let dr = self.table[b].abs_diff(self.table[b + 1]);
                    if dl <= dr {
                        Direction::Right
                    } else {
                        Direction::Left
                    }
                }
            }
        } else if b < p {
            Direction::Right
        } else {
            Direction::Left
        };

        match dir {
            Direction::None => {
                self.table[b] = 0;
            }
            Direction::Left => {
                let mut e = b;
                while e + 1 < m
                    && self.table[e + 1] != 0
                    && preferred_bucket(self.table[e + 1], m) <= e + 1
                {
                    e += 1;
                }
                let mut i = b;
                while i < e {
                    self.table[i] = self.table[i + 1];
                    i += 1;
                }
                self.table[e] = 0;
            }
            Direction::Right => {
                let mut e = b;
                while e > 0
                    && self.table[e - 1] != 0
                    && preferred_bucket(self.table[e - 1], m) <= e - 1
                {
                    e -= 1;
                }
                let mut i = b;
                while i > e {
                    self.table[i] = self.table[i - 1];
                    i -= 1;
                }
                self.table[e] = 0;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.iter().filter(|&&c| c != 0).map(|&c| P::unhash(c))
    }

    /// Whole-array scan checking this variant's invariant: every
    /// maximal run of occupied cells is sorted in unsigned ascending
    /// order, and every cell in a run has its own preferred bucket
    /// somewhere inside that same run. Public rather than test-only so
    /// integration tests can call it after every mutation.
    pub fn invariant_holds(&self) -> bool {
        let m = self.table.len();
        let mut i = 0;
        while i < m {
            if self.table[i] == 0 {
                i += 1;
                continue;
            }
            let start = i;
            let mut j = i + 1;
            while j < m && self.table[j] != 0 {
                if self.table[j] < self.table[j - 1] {
                    return false;
                }
                j += 1;
            }
            for k in start..j {
                let p = preferred_bucket(self.table[k], m);
                if p < start || p >= j {
                    return false;
                }
            }
            i = j;
        }
        true
    }
}
