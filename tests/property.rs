//! Universal laws 3-7: membership reflects history, size accounting,
//! idempotent add/remove, clear idempotence, and per-variant invariants
//! holding after every mutation. Each variant is driven by the same
//! random operation sequence, checked against a plain
//! `std::collections::HashSet` reference, and whole-array-scanned with
//! its own `invariant_holds` after every add and remove.

use std::collections::HashSet;

use bijhash::hash::Prospector2;
use bijhash::{BlpSet, LcfsSet, LpSet, RhSet};
use proptest::prelude::*;

const UNIVERSE: u32 = 200;
// Sparse on purpose: at most `UNIVERSE - 1` keys ever live in the set at
// once, well under this capacity, so none of the four variants should
// ever legitimately report `TableFull` during the replay.
const MAX_ELEMENTS: usize = 200;
const LOAD_FACTOR: f64 = 0.3;

#[derive(Clone, Debug)]
enum Op {
    Add(u32),
    Remove(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..UNIVERSE).prop_map(Op::Add),
        (1..UNIVERSE).prop_map(Op::Remove),
    ]
}

macro_rules! replay_test {
    ($name:ident, $set:ty) => {
        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]
            #[test]
            fn $name(ops in prop::collection::vec(op_strategy(), 0..500)) {
                let mut reference: HashSet<u32> = HashSet::new();
                let mut set = <$set>::new(MAX_ELEMENTS, LOAD_FACTOR).unwrap();
                for op in ops {
                    match op {
                        Op::Add(k) => {
                            let added = set.add(k).unwrap();
                            prop_assert_eq!(added, reference.insert(k));
                        }
                        Op::Remove(k) => {
                            let removed = set.remove(k);
                            prop_assert_eq!(removed, reference.remove(&k));
                        }
                    }
                    prop_assert_eq!(set.len(), reference.len());
                    for k in 1..UNIVERSE {
                        prop_assert_eq!(set.contains(k), reference.contains(&k));
                    }
                    prop_assert!(set.invariant_holds());
                }

                // Idempotent add/remove (law 5).
                let probe = 1;
                let was_present = set.contains(probe);
                let first = set.add(probe).unwrap();
                let second = set.add(probe).unwrap();
                prop_assert_eq!(first, !was_present);
                prop_assert!(!second);
                prop_assert!(set.invariant_holds());
                let first = set.remove(probe);
                let second = set.remove(probe);
                prop_assert!(first);
                prop_assert!(!second);
                prop_assert!(set.invariant_holds());

                // Clear idempotence (law 6).
                set.clear();
                set.clear();
                prop_assert_eq!(set.len(), 0);
                for k in 1..UNIVERSE {
                    prop_assert!(!set.contains(k));
                }
                prop_assert!(set.invariant_holds());
            }
        }
    };
}

replay_test!(lp_matches_reference, LpSet<Prospector2>);
replay_test!(rh_matches_reference, RhSet<Prospector2>);
replay_test!(lcfs_matches_reference, LcfsSet<Prospector2>);
replay_test!(blp_matches_reference, BlpSet<Prospector2>);
