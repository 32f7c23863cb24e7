use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::cmp::Ordering;
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

pub fn len<K, V>(tree: &Tree<K, V>) -> usize {
    tree.as_ref().map_or(0, |node| node.len)
}

pub fn is_red<K, V>(tree: &Tree<K, V>) -> bool {
    match tree {
        None => false,
        Some(node) => node.color == Color::Red,
    }
}

// Left-leaning insertion: red links only lean left and no node has two red links.
pub fn insert<K, V>(tree: &mut Tree<K, V>, new_node: Node<K, V>) -> Option<Entry<K, V>>
where
    K: Ord,
{
    let ret = match tree {
        Some(node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => return Some(mem::replace(&mut node.entry, new_node.entry)),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");
    node.update();

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = match &node.left {
        Some(child) => child.color == Color::Red && is_red(&child.left),
        None => false,
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    ret
}

pub fn get<'a, K, V>(tree: &'a Tree<K, V>, key: &K) -> Option<&'a Entry<K, V>>
where
    K: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, K, V>(tree: &'a mut Tree<K, V>, key: &K) -> Option<&'a mut Entry<K, V>>
where
    K: Ord,
{
    tree.as_mut().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry),
    })
}

// Number of keys strictly less than `key`.
pub fn rank<K, V>(tree: &Tree<K, V>, key: &K) -> usize
where
    K: Ord,
{
    let mut ret = 0;
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Greater => {
                ret += len(&node.left) + 1;
                curr = &node.right;
            },
            Ordering::Equal => return ret + len(&node.left),
            Ordering::Less => curr = &node.left,
        }
    }
    ret
}

pub fn nth<K, V>(tree: &Tree<K, V>, mut index: usize) -> Option<&Entry<K, V>> {
    let mut curr = tree;
    while let Some(node) = curr {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => curr = &node.left,
            Ordering::Equal => return Some(&node.entry),
            Ordering::Greater => {
                index -= left_len + 1;
                curr = &node.right;
            },
        }
    }
    None
}

pub fn min<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

// Asserts the color, size and order invariants and returns the black height.
#[cfg(test)]
pub fn check<K: Ord, V>(tree: &Tree<K, V>) -> usize {
    match tree {
        None => 1,
        Some(node) => {
            assert!(!is_red(&node.right), "red link leans right");
            if node.color == Color::Red {
                assert!(!is_red(&node.left), "two red links in a row");
            }
            assert_eq!(node.len, 1 + len(&node.left) + len(&node.right));
            if let Some(left) = &node.left {
                assert!(left.entry.key < node.entry.key);
            }
            if let Some(right) = &node.right {
                assert!(right.entry.key > node.entry.key);
            }
            let left_height = check(&node.left);
            assert_eq!(left_height, check(&node.right), "unequal black heights");
            match node.color {
                Color::Black => left_height + 1,
                Color::Red => left_height,
            }
        },
    }
}
