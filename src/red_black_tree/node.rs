use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub color: Color,
    pub len: usize,
    pub left: tree::Tree<K, V>,
    pub right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.len = 1 + tree::len(&self.left) + tree::len(&self.right);
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(child) = &mut self.left {
            child.color = child.color.flip();
        }
        if let Some(child) = &mut self.right {
            child.color = child.color.flip();
        }
    }

    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.left = Some(child);
        self.update();
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.right = Some(child);
        self.update();
    }
}
