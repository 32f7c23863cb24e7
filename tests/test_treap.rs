use pretty_assertions::assert_eq;
use procon_collections::treap::{Reverse, Treap};
use procon_collections::Error;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 10_000;

fn seeded_rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

#[test]
fn int_test_treap_map() {
    let mut rng = seeded_rng();
    let mut treap = Treap::with_seed([3, 1, 4, 1]);
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000u32);
        let val = rng.next_u32();

        treap.insert_or_update(key, val);
        expected.push((key, val));
    }

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(treap.len(), expected.len());
    assert_eq!(treap.to_vec(), expected);

    for (index, &(key, val)) in expected.iter().enumerate() {
        assert_eq!(treap.lower_bound(&key), index);
        assert_eq!(treap.upper_bound(&key), index + 1);
        assert_eq!(treap.nth(index), Ok((&key, &val)));
        assert_eq!(treap.force_get(&key), Ok(&val));
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000u32);
        let removed = treap.remove(&key);
        let position = expected.binary_search_by(|pair| pair.0.cmp(&key)).ok();
        assert_eq!(removed, position.map(|index| expected.remove(index)));
    }
    assert_eq!(treap.into_iter().collect::<Vec<(u32, u32)>>(), expected);
}

#[test]
fn int_test_treap_multimap_bounds() {
    let mut rng = seeded_rng();
    let mut treap = Treap::with_seed([2, 7, 1, 8]);
    let mut counts = vec![0; 50];
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 50usize);
        treap.insert(key, ());
        counts[key] += 1;
    }

    let mut before = 0;
    for key in 0..50 {
        assert!(treap.lower_bound(&key) <= treap.upper_bound(&key));
        assert_eq!(treap.lower_bound(&key), before);
        assert_eq!(treap.upper_bound(&key) - treap.lower_bound(&key), counts[key]);
        before += counts[key];
    }
    assert_eq!(treap.len(), NUM_OF_OPERATIONS);
}

#[test]
fn int_test_treap_remove_at() {
    let mut rng = seeded_rng();
    let mut treap = Treap::with_seed([5, 5, 5, 5]);
    let mut expected = Vec::new();
    for key in 0..1_000u32 {
        treap.insert(key, key);
        expected.push((key, key));
    }

    while !expected.is_empty() {
        let index = rng.gen_range(0, expected.len());
        assert_eq!(treap.remove_at(index), Ok(expected.remove(index)));
    }
    assert!(treap.is_empty());
    assert_eq!(
        treap.remove_at(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 }),
    );
}

#[test]
fn int_test_treap_split_merge() {
    let mut rng = seeded_rng();
    let mut treap = Treap::with_seed([9, 9, 9, 9]);
    for _ in 0..1_000 {
        treap.insert(rng.gen_range(0, 10_000u32), rng.next_u32());
    }
    let expected = treap.to_vec();

    for _ in 0..100 {
        let index = rng.gen_range(0, treap.len() + 1);
        let (mut first, mut second) = treap.split(index).unwrap();
        assert_eq!(first.to_vec(), &expected[..index]);
        assert_eq!(second.to_vec(), &expected[index..]);
        first.merge(&mut second).unwrap();
        treap = first;
    }
    assert_eq!(treap.to_vec(), expected);
}

#[test]
fn int_test_treap_union() {
    let mut rng = seeded_rng();
    let mut left = Treap::with_seed([1, 2, 3, 4]);
    let mut right = Treap::with_seed([4, 3, 2, 1]);
    let mut expected = Vec::new();
    for _ in 0..2_000 {
        let key = rng.gen_range(0, 500u32);
        if rng.gen() {
            left.insert(key, 'l');
            expected.push((key, 'l'));
        } else {
            right.insert(key, 'r');
            expected.push((key, 'r'));
        }
    }
    expected.sort_by(|l, r| l.0.cmp(&r.0).then(l.1.cmp(&r.1)));

    let union = Treap::union(left, right);
    assert_eq!(union.len(), expected.len());
    assert_eq!(union.to_vec(), expected);
}

#[test]
fn int_test_treap_map_values() {
    let mut treap: Treap<u32, u32> = (0..100).map(|key| (key, key)).collect();
    let mapped = treap.map(|key, value| format!("{}-{}", key, value * 2));
    assert_eq!(mapped.len(), treap.len());
    assert_eq!(
        mapped.to_vec(),
        treap
            .iter()
            .map(|(key, value)| (*key, format!("{}-{}", key, value * 2)))
            .collect::<Vec<(u32, String)>>(),
    );
}

#[test]
fn int_test_treap_reverse_order() {
    let treap = Treap::from_entries((0..10).map(|key| (key, key)), Reverse);
    assert_eq!(treap.min(), Some(&9));
    assert_eq!(treap.max(), Some(&0));
    assert_eq!(treap.lower_bound(&7), 2);
    let (first, _) = treap.split(3).unwrap();
    assert_eq!(first.to_vec(), vec![(9, 9), (8, 8), (7, 7)]);
}

#[test]
fn int_test_treap_sorted_insertion_depth() {
    let mut treap = Treap::with_seed([7, 7, 7, 7]);
    for key in 0..100_000u32 {
        treap.insert(key, ());
    }
    assert_eq!(treap.len(), 100_000);
    assert_eq!(treap.nth(50_000), Ok((&50_000, &())));
}
