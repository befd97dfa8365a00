use avl_set::AvlSet;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to an `AvlSet` and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and erases we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut AvlSet<T>, oracle: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                set.insert(x.clone());
                oracle.insert(x.clone());
            }
            Op::Erase(x) => {
                set.erase(x);
                oracle.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = AvlSet::new();
    let mut oracle = BTreeSet::new();

    do_ops(&ops, &mut set, &mut oracle);
    set.len() == oracle.len() && set.iter().eq(oracle.iter())
}

#[quickcheck]
fn size_counts_successful_operations(ops: Vec<Op<i8>>) -> bool {
    let mut set = AvlSet::new();
    let mut successes: isize = 0;
    for op in &ops {
        match op {
            Op::Insert(x) => successes += isize::from(set.insert(*x)),
            Op::Erase(x) => successes -= isize::from(set.erase(x)),
        }
    }

    set.len() as isize == successes && set.iter().count() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let set: AvlSet<i32> = xs.iter().copied().collect();

    xs.iter().all(|x| set.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: AvlSet<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| set.find(x).is_none())
}

#[quickcheck]
fn with_erasures(xs: Vec<i32>, erases: Vec<i32>) -> bool {
    let mut set: AvlSet<i32> = xs.iter().copied().collect();
    let mut oracle: BTreeSet<i32> = xs.into_iter().collect();
    for erase in &erases {
        assert_eq!(set.erase(erase), oracle.remove(erase));
    }

    erases.iter().all(|x| set.find(x).is_none()) && set.iter().eq(oracle.iter())
}

#[quickcheck]
fn pairs_in_sorted_order(xs: Vec<(u8, i16)>) -> bool {
    let set: AvlSet<(u8, i16)> = xs.iter().copied().collect();
    let oracle: BTreeSet<(u8, i16)> = xs.into_iter().collect();

    set.iter().eq(oracle.iter()) && set.iter().rev().eq(oracle.iter().rev())
}

#[quickcheck]
fn distance_matches_oracle(xs: Vec<i16>, probes: Vec<i16>) -> bool {
    let set: AvlSet<i16> = xs.iter().copied().collect();
    let oracle: BTreeSet<i16> = xs.into_iter().collect();
    let mut candidates: BTreeSet<i16> = probes.into_iter().collect();
    candidates.extend(oracle.iter().copied());
    let candidates: Vec<i16> = candidates.into_iter().collect();

    candidates.iter().enumerate().all(|(i, a)| {
        candidates[i..].iter().all(|b| {
            let expected = if oracle.contains(a) && oracle.contains(b) {
                oracle.range(a..b).count()
            } else {
                0
            };
            set.distance(a, b) == expected
        })
    })
}

#[quickcheck]
fn copies_are_equal_and_independent(xs: Vec<i8>, erase: i8) -> bool {
    let original: AvlSet<i8> = xs.into_iter().collect();
    let mut copy = original.clone();
    let equal_before = copy == original;

    let erased = copy.erase(&erase);
    equal_before && (erased != (copy == original)) && original.contains(&erase) == erased
}

#[quickcheck]
fn swap_exchanges_contents(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut a: AvlSet<i8> = xs.iter().copied().collect();
    let mut b: AvlSet<i8> = ys.iter().copied().collect();
    let expected_a: BTreeSet<i8> = ys.into_iter().collect();
    let expected_b: BTreeSet<i8> = xs.into_iter().collect();

    a.swap(&mut b);
    a.iter().eq(expected_a.iter()) && b.iter().eq(expected_b.iter())
}
