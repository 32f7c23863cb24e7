//! Self-balancing binary search tree that uses a color bit to keep the tree approximately
//! balanced. Every node caches the size of its subtree for order statistics.

mod map;
mod node;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIter};
