use pretty_assertions::assert_eq;
use procon_collections::deque::Deque;
use procon_collections::red_black_tree::RedBlackMap;
use procon_collections::splay_tree::SplayMap;
use procon_collections::union_find::UnionFind;
use procon_collections::vector::Vector;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;

fn seeded_rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

#[test]
fn int_test_splay_map() {
    let mut rng = seeded_rng();
    let mut map = SplayMap::new();
    let mut expected = BTreeMap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000u32);
        match rng.gen_range(0, 3) {
            0 => {
                let val = rng.next_u32();
                assert_eq!(map.insert(key, val), expected.insert(key, val));
            },
            1 => assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val))),
            _ => assert_eq!(map.get(&key), expected.get(&key)),
        }
        assert_eq!(map.len(), expected.len());
    }

    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );
    assert_eq!(map.min(), expected.keys().next());
    assert_eq!(map.max(), expected.keys().next_back());
}

#[test]
fn int_test_red_black_map() {
    let mut rng = seeded_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000u32);
        let val = rng.next_u32();
        assert_eq!(map.insert(key, val), expected.insert(key, val));
        assert_eq!(map.len(), expected.len());
    }

    for (index, (key, val)) in expected.iter().enumerate() {
        assert_eq!(map.get(key), Some(val));
        assert_eq!(map.rank(key), index);
        assert_eq!(map.nth(index), Ok((key, val)));
    }
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );
}

#[test]
fn int_test_union_find() {
    let mut rng = seeded_rng();
    let n = 500;
    let mut forest = UnionFind::new(n);
    let mut labels: Vec<usize> = (0..n).collect();
    for _ in 0..NUM_OF_OPERATIONS / 10 {
        let u = rng.gen_range(0, n);
        let v = rng.gen_range(0, n);
        let merged = labels[u] != labels[v];
        assert_eq!(forest.union(u, v), merged);
        if merged {
            let (from, to) = (labels[u], labels[v]);
            for label in labels.iter_mut() {
                if *label == from {
                    *label = to;
                }
            }
        }
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let u = rng.gen_range(0, n);
        let v = rng.gen_range(0, n);
        assert_eq!(forest.connected(u, v), labels[u] == labels[v]);
    }
    let size = labels.iter().filter(|label| **label == labels[0]).count();
    assert_eq!(forest.set_len(0), size);
}

#[test]
fn int_test_deque_index() {
    let mut deque: Deque<usize> = Deque::new();
    for value in 0..100 {
        if value % 2 == 0 {
            deque.push_back(value);
        } else {
            deque.push_front(value);
        }
    }
    for index in 0..deque.len() {
        deque[index] += 1;
    }
    assert_eq!(deque.front(), Some(&100));
    assert_eq!(deque.back(), Some(&99));
    assert_eq!(deque.get(100), None);
}

#[test]
fn int_test_vector_ops() {
    let u = Vector::from(vec![1.0, 0.0, 0.0]);
    let v = Vector::from(vec![0.0, 2.0]);
    let w = &u + &v;
    assert_eq!(w.components(), &[1.0, 2.0, 0.0]);
    assert_eq!((&w - &v).components(), &[1.0, 0.0, 0.0]);
    assert_eq!(u.dot(&v), 0.0);
    assert!((w.norm() - 5f64.sqrt()).abs() < 1e-9);
}
