use chainset::{OrdTotalOrder, OrderedSet, ReverseOrder};
use proptest::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Included, Unbounded};

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Contains(u8),
    PopFirst,
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u8>().prop_map(Operation::Insert),
        2 => any::<u8>().prop_map(Operation::Remove),
        2 => any::<u8>().prop_map(Operation::Contains),
        1 => Just(Operation::PopFirst),
        1 => Just(Operation::Clear),
    ]
}

fn both(values: &[u8]) -> (OrderedSet<u8>, BTreeSet<u8>) {
    (values.iter().copied().collect(), values.iter().copied().collect())
}

proptest! {
    #[test]
    fn test_operations_match_std_set(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut std_set = BTreeSet::new();
        let mut set = OrderedSet::new();

        for op in ops {
            match op {
                Operation::Insert(v) => {
                    prop_assert_eq!(set.insert(v), std_set.insert(v), "insert {}", v);
                }
                Operation::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), std_set.remove(&v), "remove {}", v);
                }
                Operation::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), std_set.contains(&v), "contains {}", v);
                    prop_assert_eq!(set.get(&v), std_set.get(&v), "get {}", v);
                }
                Operation::PopFirst => {
                    prop_assert_eq!(set.pop_first(), std_set.pop_first());
                }
                Operation::Clear => {
                    set.clear();
                    std_set.clear();
                }
            }
            prop_assert_eq!(set.len(), std_set.len());
        }

        prop_assert!(set.iter().eq(std_set.iter()));
        prop_assert_eq!(set.iter().len(), set.len());
        prop_assert_eq!(set.first(), std_set.first());
        prop_assert_eq!(set.last(), std_set.last());
    }

    #[test]
    fn test_bounds_match_std_range(values in proptest::collection::vec(any::<u8>(), 0..64), probe in any::<u8>()) {
        let (set, std_set) = both(&values);

        let lower = set.lower_bound(&probe);
        prop_assert_eq!(lower.len(), std_set.range((Included(probe), Unbounded)).count());
        prop_assert!(lower.eq(std_set.range((Included(probe), Unbounded))));

        let upper = set.upper_bound(&probe);
        prop_assert_eq!(upper.len(), std_set.range((Excluded(probe), Unbounded)).count());
        prop_assert!(upper.eq(std_set.range((Excluded(probe), Unbounded))));
    }

    #[test]
    fn test_algebra_matches_std_set(
        a in proptest::collection::vec(any::<u8>(), 0..48),
        b in proptest::collection::vec(any::<u8>(), 0..48),
    ) {
        let (set_a, std_a) = both(&a);
        let (set_b, std_b) = both(&b);

        prop_assert!(set_a.union(&set_b).iter().eq(std_a.union(&std_b)));
        prop_assert!(set_a.intersection(&set_b).iter().eq(std_a.intersection(&std_b)));
        prop_assert!(set_a.difference(&set_b).iter().eq(std_a.difference(&std_b)));
        prop_assert!(set_a
            .symmetric_difference(&set_b)
            .iter()
            .eq(std_a.symmetric_difference(&std_b)));
        prop_assert_eq!(set_a.is_subset(&set_b), std_a.is_subset(&std_b));
        prop_assert_eq!(set_a.is_superset(&set_b), std_a.is_superset(&std_b));
        prop_assert_eq!(set_a.is_disjoint(&set_b), std_a.is_disjoint(&std_b));
    }

    #[test]
    fn test_reverse_order_matches_std_reverse(values in proptest::collection::vec(any::<i16>(), 0..64)) {
        let mut set = OrderedSet::with_order(ReverseOrder(OrdTotalOrder::<i16>::new()));
        set.extend(values.iter().copied());
        let std_set: BTreeSet<Reverse<i16>> = values.iter().copied().map(Reverse).collect();

        prop_assert_eq!(set.len(), std_set.len());
        prop_assert!(set.iter().eq(std_set.iter().map(|Reverse(v)| v)));
    }

    #[test]
    fn test_clone_is_independent(values in proptest::collection::vec(any::<u8>(), 1..64)) {
        let (mut set, std_set) = both(&values);
        let copy = set.clone();
        prop_assert_eq!(&copy, &set);

        let removed = values[0];
        set.remove(&removed);
        prop_assert!(copy.contains(&removed));
        prop_assert!(copy.iter().eq(std_set.iter()));
    }

    #[test]
    fn test_retain_matches_std_retain(values in proptest::collection::vec(any::<u8>(), 0..64), modulus in 1u8..8) {
        let (mut set, mut std_set) = both(&values);
        set.retain(|v| v % modulus == 0);
        std_set.retain(|v| v % modulus == 0);

        prop_assert_eq!(set.len(), std_set.len());
        prop_assert!(set.into_iter().eq(std_set.into_iter()));
    }
}
