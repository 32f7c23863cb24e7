//! Self-adjusting binary search tree where recently accessed keys are moved to the root, so
//! repeated lookups of the same keys are fast.

mod map;
mod node;
mod tree;

pub use self::map::{SplayMap, SplayMapIter};
