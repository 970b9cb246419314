// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests over arbitrary element lists and positions.

use growable_seq::{Error, GrowableSequence};
use proptest::prelude::*;

fn arb_items() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}

fn build(items: &[i64]) -> GrowableSequence<i64> {
    let mut s = GrowableSequence::new();
    for &x in items {
        s.push(x);
    }
    s
}

proptest! {
    #[test]
    fn empty_iff_zero_len(items in arb_items()) {
        let s = build(&items);
        prop_assert_eq!(s.is_empty(), s.len() == 0);
        prop_assert!(s.len() <= s.capacity());
    }

    #[test]
    fn push_extends_by_one(items in arb_items(), x in any::<i64>()) {
        let mut s = build(&items);
        let old_len = s.len();
        s.push(x);
        prop_assert_eq!(s.len(), old_len + 1);
        prop_assert_eq!(s.try_get(old_len), Ok(&x));
        prop_assert_eq!(&s.as_slice()[..old_len], &items[..]);
    }

    #[test]
    fn growth_keeps_every_value(n in 0usize..300) {
        let mut s = GrowableSequence::new();
        for i in 0..n {
            s.push(i);
        }
        prop_assert_eq!(s.len(), n);
        for i in 0..n {
            prop_assert_eq!(s[i], i);
        }
        // Doubling from the default capacity: 10, 20, 40, ...
        let mut expected_cap = GrowableSequence::<usize>::DEFAULT_CAPACITY;
        while expected_cap < n {
            expected_cap *= 2;
        }
        prop_assert_eq!(s.capacity(), expected_cap);
    }

    #[test]
    fn clone_is_deep(items in arb_items(), x in any::<i64>()) {
        let mut original = build(&items);
        let mut copy = original.clone();
        prop_assert_eq!(copy.len(), original.len());
        prop_assert_eq!(copy.as_slice(), original.as_slice());

        copy.push(x);
        if let Ok(first) = copy.try_get_mut(0) {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(original.as_slice(), &items[..]);

        original.clear();
        prop_assert_eq!(copy.len(), items.len() + 1);
    }

    #[test]
    fn insert_then_remove_is_identity(
        items in arb_items(),
        pos in any::<prop::sample::Index>(),
        x in any::<i64>(),
    ) {
        let mut s = build(&items);
        let before = s.clone();
        let i = pos.index(items.len() + 1);
        s.insert(i, x).unwrap();
        prop_assert_eq!(s.try_get(i), Ok(&x));
        prop_assert_eq!(s.remove(i), Ok(x));
        prop_assert_eq!(s, before);
    }

    #[test]
    fn out_of_range_positions_change_nothing(items in arb_items(), extra in 0usize..1000) {
        let mut s = build(&items);
        let len = s.len();
        let cap = s.capacity();

        prop_assert_eq!(s.insert(len + 1 + extra, 0), Err(Error::InvalidIndex));
        prop_assert_eq!(s.remove(len + extra), Err(Error::InvalidIndex));
        prop_assert_eq!(s.try_get(len + extra), Err(Error::InvalidIndex));
        prop_assert_eq!(s.try_get_mut(len + extra).err(), Some(Error::InvalidIndex));

        prop_assert_eq!(s.len(), len);
        prop_assert_eq!(s.capacity(), cap);
        prop_assert_eq!(s.as_slice(), &items[..]);
    }

    #[test]
    fn concat_places_both_operands(left in arb_items(), right in arb_items()) {
        let a = build(&left);
        let b = build(&right);
        let r = a.concat(&b);

        prop_assert_eq!(r.len(), a.len() + b.len());
        prop_assert_eq!(r.capacity(), a.capacity() + b.capacity());
        for (k, v) in left.iter().enumerate() {
            prop_assert_eq!(r.try_get(k), Ok(v));
        }
        for (k, v) in right.iter().enumerate() {
            prop_assert_eq!(r.try_get(left.len() + k), Ok(v));
        }
        prop_assert_eq!(a.as_slice(), &left[..]);
        prop_assert_eq!(b.as_slice(), &right[..]);
    }

    #[test]
    fn clear_then_push(items in arb_items(), x in any::<i64>()) {
        let mut s = build(&items);
        let cap = s.capacity();
        s.clear();
        prop_assert!(s.is_empty());
        prop_assert_eq!(s.len(), 0);
        prop_assert_eq!(s.capacity(), cap);
        s.push(x);
        prop_assert_eq!(s.try_get(0), Ok(&x));
    }
}
