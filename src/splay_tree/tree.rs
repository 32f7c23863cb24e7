use crate::entry::Entry;
use crate::splay_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

/// Top-down splay: brings the node closest to `key` to the root of `root`.
///
/// Nodes passed on the way down are collected into a tree of smaller keys and a tree of larger
/// keys, which become the children of the new root.
fn splay<K: Ord, V>(root: &mut Box<Node<K, V>>, key: &K) {
    let mut smaller: Tree<K, V> = None;
    let mut larger: Tree<K, V> = None;
    {
        // Empty slots where the next node passed on the way down is attached.
        let mut smaller_slot = &mut smaller;
        let mut larger_slot = &mut larger;
        loop {
            match key.cmp(&root.entry.key) {
                Ordering::Less => {
                    let zig_zig = match root.left {
                        Some(ref child) => *key < child.entry.key,
                        None => break,
                    };
                    if zig_zig {
                        root.rotate_right();
                    }
                    let child = match root.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *larger_slot = Some(mem::replace(root, child));
                    larger_slot = &mut { larger_slot }
                        .as_mut()
                        .expect("Expected non-empty larger tree.")
                        .left;
                },
                Ordering::Greater => {
                    let zig_zig = match root.right {
                        Some(ref child) => *key > child.entry.key,
                        None => break,
                    };
                    if zig_zig {
                        root.rotate_left();
                    }
                    let child = match root.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *smaller_slot = Some(mem::replace(root, child));
                    smaller_slot = &mut { smaller_slot }
                        .as_mut()
                        .expect("Expected non-empty smaller tree.")
                        .right;
                },
                Ordering::Equal => break,
            }
        }
        *smaller_slot = root.left.take();
        *larger_slot = root.right.take();
    }
    root.left = smaller;
    root.right = larger;
}

pub fn insert<K: Ord, V>(tree: &mut Tree<K, V>, key: K, value: V) -> Option<V> {
    match tree {
        Some(node) => {
            splay(node, &key);
            let mut new_node = Box::new(Node::new(key, value));
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => {
                    new_node.left = node.left.take();
                    let old_root = mem::replace(node, new_node);
                    node.right = Some(old_root);
                    None
                },
                Ordering::Greater => {
                    new_node.right = node.right.take();
                    let old_root = mem::replace(node, new_node);
                    node.left = Some(old_root);
                    None
                },
                Ordering::Equal => {
                    let Node { entry, .. } = *new_node;
                    Some(mem::replace(&mut node.entry.value, entry.value))
                },
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            None
        },
    }
}

pub fn remove<K: Ord, V>(tree: &mut Tree<K, V>, key: &K) -> Option<Entry<K, V>> {
    match tree {
        Some(node) => {
            splay(node, key);
            if key.cmp(&node.entry.key) != Ordering::Equal {
                return None;
            }
        },
        None => return None,
    }

    let Node { entry, left, right } = *tree.take()?;
    *tree = match left {
        Some(mut left_node) => {
            // Every key on the left is smaller, so the splayed root has no right child.
            splay(&mut left_node, key);
            left_node.right = right;
            Some(left_node)
        },
        None => right,
    };
    Some(entry)
}

/// Splays `key` to the root and returns its entry if it is present.
pub fn access<'a, K: Ord, V>(tree: &'a mut Tree<K, V>, key: &K) -> Option<&'a mut Entry<K, V>> {
    match tree {
        Some(node) => {
            splay(node, key);
            if key.cmp(&node.entry.key) == Ordering::Equal {
                Some(&mut node.entry)
            } else {
                None
            }
        },
        None => None,
    }
}

/// Looks up `key` without restructuring the tree.
pub fn peek<'a, K: Ord, V>(tree: &'a Tree<K, V>, key: &K) -> Option<&'a Entry<K, V>> {
    let mut curr = tree.as_ref();
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = node.left.as_ref(),
            Ordering::Greater => curr = node.right.as_ref(),
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn min<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}
