use crate::entry::Entry;
use crate::treap::comparator::Comparator;
use crate::treap::node::Node;
use std::cmp::Ordering;

/// A subtree of a treap. `None` is the empty subtree shared by every leaf.
pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn len<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(node) => node.len,
        None => 0,
    }
}

/// Concatenates `r_tree` after `l_tree` by priority alone. Every key in `l_tree` must precede
/// every key in `r_tree`.
pub fn merge<T, U>(l_tree: &mut Tree<T, U>, r_tree: Tree<T, U>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Keeps the first `index` entries in `tree` and returns the remainder.
pub fn split<T, U>(tree: &mut Tree<T, U>, index: usize) -> Tree<T, U> {
    match tree.take() {
        Some(mut node) => {
            let rank = node.rank();
            if index <= rank {
                let res = split(&mut node.left, index);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            } else {
                let ret = split(&mut node.right, index - rank - 1);
                node.update();
                *tree = Some(node);
                ret
            }
        },
        None => None,
    }
}

/// Keeps the entries whose keys are less than `key` (or equal to it if `inclusive`) in `tree` and
/// returns the remainder.
pub fn split_by_key<T, U, C>(tree: &mut Tree<T, U>, key: &T, cmp: &C, inclusive: bool) -> Tree<T, U>
where
    C: Comparator<T>,
{
    match tree.take() {
        Some(mut node) => {
            let stays = match cmp.compare(&node.entry.key, key) {
                Ordering::Less => true,
                Ordering::Equal => inclusive,
                Ordering::Greater => false,
            };
            if stays {
                let ret = split_by_key(&mut node.right, key, cmp, inclusive);
                node.update();
                *tree = Some(node);
                ret
            } else {
                let res = split_by_key(&mut node.left, key, cmp, inclusive);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            }
        },
        None => None,
    }
}

/// Merges two key-ordered trees whose key ranges may overlap. Entries with equal keys keep their
/// relative order, with the entries of `l_tree` first.
pub fn union<T, U, C>(l_tree: Tree<T, U>, r_tree: Tree<T, U>, cmp: &C) -> Tree<T, U>
where
    C: Comparator<T>,
{
    match (l_tree, r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority >= r_node.priority {
                let mut r_lo = Some(r_node);
                let r_hi = split_by_key(&mut r_lo, &l_node.entry.key, cmp, false);
                l_node.left = union(l_node.left.take(), r_lo, cmp);
                l_node.right = union(l_node.right.take(), r_hi, cmp);
                l_node.update();
                Some(l_node)
            } else {
                let mut l_lo = Some(l_node);
                let l_hi = split_by_key(&mut l_lo, &r_node.entry.key, cmp, true);
                r_node.left = union(l_lo, r_node.left.take(), cmp);
                r_node.right = union(l_hi, r_node.right.take(), cmp);
                r_node.update();
                Some(r_node)
            }
        },
        (tree, None) | (None, tree) => tree,
    }
}

pub fn get<'a, T, U, C>(tree: &'a Tree<T, U>, key: &T, cmp: &C) -> Option<&'a Entry<T, U>>
where
    C: Comparator<T>,
{
    let mut curr = tree.as_ref();
    while let Some(node) = curr {
        match cmp.compare(key, &node.entry.key) {
            Ordering::Less => curr = node.left.as_ref(),
            Ordering::Greater => curr = node.right.as_ref(),
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, C>(tree: &'a mut Tree<T, U>, key: &T, cmp: &C) -> Option<&'a mut Entry<T, U>>
where
    C: Comparator<T>,
{
    let mut curr = tree.as_mut();
    while let Some(node) = curr {
        match cmp.compare(key, &node.entry.key) {
            Ordering::Less => curr = node.left.as_mut(),
            Ordering::Greater => curr = node.right.as_mut(),
            Ordering::Equal => return Some(&mut node.entry),
        }
    }
    None
}

/// Number of entries whose keys are strictly less than `key`.
pub fn lower_bound<T, U, C>(tree: &Tree<T, U>, key: &T, cmp: &C) -> usize
where
    C: Comparator<T>,
{
    let mut curr = tree.as_ref();
    let mut ret = 0;
    while let Some(node) = curr {
        if cmp.compare(key, &node.entry.key) == Ordering::Greater {
            ret += node.rank() + 1;
            curr = node.right.as_ref();
        } else {
            curr = node.left.as_ref();
        }
    }
    ret
}

/// Number of entries whose keys are less than or equal to `key`.
pub fn upper_bound<T, U, C>(tree: &Tree<T, U>, key: &T, cmp: &C) -> usize
where
    C: Comparator<T>,
{
    let mut curr = tree.as_ref();
    let mut ret = 0;
    while let Some(node) = curr {
        if cmp.compare(key, &node.entry.key) == Ordering::Less {
            curr = node.left.as_ref();
        } else {
            ret += node.rank() + 1;
            curr = node.right.as_ref();
        }
    }
    ret
}

pub fn nth<T, U>(tree: &Tree<T, U>, mut index: usize) -> Option<&Entry<T, U>> {
    let mut curr = tree.as_ref();
    while let Some(node) = curr {
        let rank = node.rank();
        match index.cmp(&rank) {
            Ordering::Less => curr = node.left.as_ref(),
            Ordering::Greater => {
                index -= rank + 1;
                curr = node.right.as_ref();
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn nth_mut<T, U>(tree: &mut Tree<T, U>, mut index: usize) -> Option<&mut Entry<T, U>> {
    let mut curr = tree.as_mut();
    while let Some(node) = curr {
        let rank = node.rank();
        match index.cmp(&rank) {
            Ordering::Less => curr = node.left.as_mut(),
            Ordering::Greater => {
                index -= rank + 1;
                curr = node.right.as_mut();
            },
            Ordering::Equal => return Some(&mut node.entry),
        }
    }
    None
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

/// Builds a tree with the same keys, priorities and shape where every value is replaced by
/// `f(key, value)`. `f` is called in key order.
pub fn map<T, U, V, F>(tree: &Tree<T, U>, f: &mut F) -> Tree<T, V>
where
    T: Clone,
    F: FnMut(&T, &U) -> V,
{
    match tree {
        Some(node) => {
            let left = map(&node.left, f);
            let value = f(&node.entry.key, &node.entry.value);
            let right = map(&node.right, f);
            Some(Box::new(Node {
                entry: Entry {
                    key: node.entry.key.clone(),
                    value,
                },
                priority: node.priority,
                len: node.len,
                left,
                right,
            }))
        },
        None => None,
    }
}

/// Walks the whole tree and panics if a cached length, the heap order of priorities or the key
/// order is broken. Returns the number of nodes.
#[cfg(test)]
pub fn check<T, U, C>(tree: &Tree<T, U>, cmp: &C) -> usize
where
    C: Comparator<T>,
{
    fn walk<'a, T, U, C>(
        tree: &'a Tree<T, U>,
        cmp: &C,
        bounds: (Option<&'a T>, Option<&'a T>),
    ) -> usize
    where
        C: Comparator<T>,
    {
        match tree {
            Some(node) => {
                let key = &node.entry.key;
                if let Some(lo) = bounds.0 {
                    assert_ne!(cmp.compare(lo, key), Ordering::Greater);
                }
                if let Some(hi) = bounds.1 {
                    assert_ne!(cmp.compare(key, hi), Ordering::Greater);
                }
                for child in &[&node.left, &node.right] {
                    if let Some(child_node) = child {
                        assert!(node.priority >= child_node.priority);
                    }
                }
                let left_len = walk(&node.left, cmp, (bounds.0, Some(key)));
                let right_len = walk(&node.right, cmp, (Some(key), bounds.1));
                assert_eq!(node.len, left_len + right_len + 1);
                node.len
            },
            None => 0,
        }
    }
    walk(tree, cmp, (None, None))
}

/// Collects the priorities of the tree in key order.
#[cfg(test)]
pub fn priorities<T, U>(tree: &Tree<T, U>) -> Vec<u32> {
    fn walk<T, U>(tree: &Tree<T, U>, ret: &mut Vec<u32>) {
        if let Some(node) = tree {
            walk(&node.left, ret);
            ret.push(node.priority);
            walk(&node.right, ret);
        }
    }
    let mut ret = Vec::new();
    walk(tree, &mut ret);
    ret
}
