//! Probabilistic binary search tree where each node also maintains the heap invariant and the size
//! of its subtree.

mod comparator;
mod map;
mod node;
mod tree;

pub use self::comparator::{Comparator, NaturalOrder, Reverse};
pub use self::map::{Treap, TreapIntoIter, TreapIter, TreapIterMut};
