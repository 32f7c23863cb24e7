use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use std::iter::FromIterator;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree. Every insertion, removal and lookup
/// through [`get`](SplayMap::get) or [`get_mut`](SplayMap::get_mut) "splays" the accessed key to the
/// root, which gives `O(log N)` amortized operations and makes recently accessed keys cheap to
/// access again. [`peek`](SplayMap::peek) looks a key up without restructuring the tree.
///
/// # Examples
///
/// ```
/// use procon_collections::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.remove(&0), Some((0, 1)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct SplayMap<K, V> {
    tree: tree::Tree<K, V>,
    len: usize,
}

impl<K: Ord, V> SplayMap<K, V> {
    /// Constructs a new, empty `SplayMap<K, V>`.
    pub fn new() -> Self {
        SplayMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// replace the value and return the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.peek(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let ret = tree::insert(&mut self.tree, key, value);
        if ret.is_none() {
            self.len += 1;
        }
        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let SplayMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove(tree, key).map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Returns an immutable reference to the value associated with a particular key and splays
    /// the key to the root. Returns `None` if the key does not exist in the map.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        tree::access(&mut self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key and splays the
    /// key to the root. Returns `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        tree::access(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns an immutable reference to the value associated with a particular key without
    /// splaying.
    pub fn peek(&self, key: &K) -> Option<&V> {
        tree::peek(&self.tree, key).map(|entry| &entry.value)
    }

    /// Checks if a key exists in the map without splaying.
    pub fn contains_key(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }
}

impl<K, V> SplayMap<K, V> {
    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(3, 3);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayMapIter<'_, K, V> {
        SplayMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SplayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = SplayMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SplayMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct SplayMapIter<'a, K, V> {
    current: &'a tree::Tree<K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for SplayMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            Entry::as_pair(&node.entry)
        })
    }
}

impl<K: Ord, V> Default for SplayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayMap<K, V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::SplayMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_len_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_replace() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some(1));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_min_max() {
        let map: SplayMap<u32, u32> = vec![(3, 3), (5, 5), (1, 1)].into_iter().collect();
        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_iter_after_access() {
        let mut map: SplayMap<u32, u32> = (0..10).map(|key| (key, key * key)).collect();
        assert_eq!(map.get(&4), Some(&16));
        assert_eq!(map.get(&11), None);
        assert_eq!(
            map.iter().map(|(key, _)| *key).collect::<Vec<u32>>(),
            (0..10).collect::<Vec<u32>>(),
        );
    }

    #[test]
    fn test_clear() {
        let mut map: SplayMap<u32, u32> = vec![(1, 1), (2, 2)].into_iter().collect();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.min(), None);
    }
}
