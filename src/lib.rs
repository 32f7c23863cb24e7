//! Algorithmic containers for contest solutions.
//!
//! The centerpiece is [`treap::Treap`], a randomized balanced binary search tree with cached
//! subtree sizes that supports order statistics and splitting or merging whole trees in expected
//! `O(log N)` time. The remaining modules are peer utilities: a red black tree map with order
//! statistics, a self-adjusting ordered map, a union-find forest, a ring-buffer deque and a dense
//! `f64` vector.

mod entry;
mod error;
pub mod deque;
pub mod red_black_tree;
pub mod splay_tree;
pub mod treap;
pub mod union_find;
pub mod vector;

pub use crate::error::{Error, Result};
