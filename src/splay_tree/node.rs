use crate::entry::Entry;
use crate::splay_tree::tree;
use std::mem;

pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub left: tree::Tree<K, V>,
    pub right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }

    pub fn rotate_left(&mut self) {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }
}
