use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a left-leaning red black tree with cached subtree sizes.
///
/// A red black tree colors every node red or black. No red node has a red child and every path
/// from the root to a leaf passes through the same number of black nodes, so the height of the
/// tree is at most twice the logarithm of the number of keys. Red links only lean left, which
/// keeps rebalancing after an insertion to a few rotations and color flips on the way back up.
///
/// Every node also caches the size of its subtree, so the map answers rank queries and accesses
/// the `n`-th key in `O(log N)` time. Keys cannot be removed.
///
/// # Examples
///
/// ```
/// use procon_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(5, 'e');
/// map.insert(1, 'a');
/// map.insert(3, 'c');
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get(&3), Some(&'c'));
/// assert_eq!(map.rank(&4), 2);
/// assert_eq!(map.nth(0), Ok((&1, &'a')));
/// assert_eq!(map.max(), Some(&5));
/// ```
pub struct RedBlackMap<K, V> {
    root: tree::Tree<K, V>,
}

impl<K: Ord, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>`.
    pub fn new() -> Self {
        RedBlackMap { root: None }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// replace the value and return the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let ret = tree::insert(&mut self.root, Node::new(key, value));
        if let Some(root) = &mut self.root {
            root.color = Color::Black;
        }
        ret.map(|entry| entry.value)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    pub fn get(&self, key: &K) -> Option<&V> {
        tree::get(&self.root, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. It will return
    /// `None` if the key does not exist in the map.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        tree::get_mut(&mut self.root, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of keys in the map that are less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        tree::rank(&self.root, key)
    }
}

impl<K, V> RedBlackMap<K, V> {
    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the entry at in-order position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn nth(&self, index: usize) -> Result<(&K, &V)> {
        tree::nth(&self.root, index)
            .map(Entry::as_pair)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.root).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.root).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<_, _> = vec![(3, 3), (1, 1)].into_iter().collect();
    /// assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &1), (&3, &3)]);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, K, V> {
        RedBlackMapIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = RedBlackMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, K, V> {
    current: &'a tree::Tree<K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for RedBlackMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.entry.as_pair()
        })
    }
}

impl<K: Ord, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackMap<K, V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = RedBlackMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K: Ord, V> Index<&'a K> for RedBlackMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K: Ord, V> IndexMut<&'a K> for RedBlackMap<K, V> {
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<K, V> fmt::Debug for RedBlackMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
