use crate::entry::Entry;
use crate::treap::tree;

/// A struct representing an internal node of a treap.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub priority: u32,
    pub len: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, priority: u32) -> Self {
        Node {
            entry: Entry { key, value },
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached subtree length after a child link was replaced.
    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = tree::len(left) + tree::len(right) + 1;
    }

    /// Returns the in-order rank of this node within its own subtree.
    pub fn rank(&self) -> usize {
        tree::len(&self.left)
    }
}
