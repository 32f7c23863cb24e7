use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::treap::comparator::{Comparator, NaturalOrder};
use crate::treap::node::Node;
use crate::treap::tree;
use log::{debug, trace};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a treap that also supports order statistics, splitting and
/// merging.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key, a value, and a priority. The keys of the left subtree of a node are not
/// greater than its key and the keys of the right subtree are not less than it. The priority of a
/// node is at least the priority of all nodes in its subtrees. By randomly generating priorities,
/// the expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Every node also caches the size of its subtree, which allows the treap to answer rank queries,
/// access the `n`-th entry and split off a prefix in `O(log N)` expected time.
///
/// Keys are ordered by a [`Comparator`], which defaults to the natural ordering of the key type.
/// Duplicate keys may be stored with [`insert`](Treap::insert); they are kept in insertion order.
///
/// # Examples
///
/// ```
/// use procon_collections::treap::Treap;
///
/// let mut treap = Treap::new();
/// for key in vec![5, 1, 4, 2, 3] {
///     treap.insert(key, key * 10);
/// }
///
/// assert_eq!(treap.get(&4), Some(&40));
/// assert_eq!(treap.lower_bound(&3), 2);
/// assert_eq!(treap.upper_bound(&3), 3);
/// assert_eq!(treap.nth(0).unwrap(), (&1, &10));
///
/// let (first, second) = treap.split(2).unwrap();
/// assert_eq!(first.to_vec(), vec![(1, 10), (2, 20)]);
/// assert_eq!(second.to_vec(), vec![(3, 30), (4, 40), (5, 50)]);
/// ```
pub struct Treap<K, V, C = NaturalOrder> {
    root: tree::Tree<K, V>,
    comparator: C,
    rng: XorShiftRng,
}

impl<K: Ord, V> Treap<K, V> {
    /// Constructs a new, empty `Treap<K, V>` ordered by the natural ordering of `K`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<u32, u32> = Treap::new();
    /// assert!(treap.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Constructs a new, empty `Treap<K, V>` whose priorities are drawn from a generator seeded with
    /// `seed`. Treaps built from the same seed and the same operations have the same shape.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<u32, u32> = Treap::with_seed([1, 2, 3, 4]);
    /// assert!(treap.is_empty());
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_comparator_and_seed(NaturalOrder, seed)
    }
}

impl<K, V, C> Treap<K, V, C>
where
    C: Comparator<K>,
{
    /// Constructs a new, empty treap ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::{Reverse, Treap};
    ///
    /// let mut treap = Treap::with_comparator(Reverse);
    /// treap.insert(1, ());
    /// treap.insert(2, ());
    /// assert_eq!(treap.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Treap {
            root: None,
            comparator,
            rng: rand::weak_rng(),
        }
    }

    /// Constructs a new, empty treap ordered by `comparator` whose priorities are drawn from a
    /// generator seeded with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    pub fn with_comparator_and_seed(comparator: C, seed: [u32; 4]) -> Self {
        Treap {
            root: None,
            comparator,
            rng: XorShiftRng::from_seed(seed),
        }
    }

    /// Builds a treap ordered by `comparator` by inserting every entry of `entries` in turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::{Reverse, Treap};
    ///
    /// let treap = Treap::from_entries(vec![(1, 'a'), (3, 'c'), (2, 'b')], Reverse);
    /// assert_eq!(treap.to_vec(), vec![(3, 'c'), (2, 'b'), (1, 'a')]);
    /// ```
    pub fn from_entries<I>(entries: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut treap = Self::with_comparator(comparator);
        treap.extend(entries);
        treap
    }

    /// Inserts a key-value pair into the treap. The entry is placed after every entry with an
    /// equal key, so inserting an existing key stores a duplicate. Use
    /// [`insert_or_update`](Treap::insert_or_update) to replace instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 'a');
    /// treap.insert(1, 'b');
    /// assert_eq!(treap.len(), 2);
    /// assert_eq!(treap.to_vec(), vec![(1, 'a'), (1, 'b')]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let Treap {
            ref mut root,
            ref comparator,
            ref mut rng,
        } = self;
        let index = tree::upper_bound(root, &key, comparator);
        let rest = tree::split(root, index);
        tree::merge(root, Some(Box::new(Node::new(key, value, rng.next_u32()))));
        tree::merge(root, rest);
    }

    /// Replaces the value associated with `key` if it exists and returns the old value. Otherwise
    /// inserts the key-value pair and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// assert_eq!(treap.insert_or_update(1, 1), None);
    /// assert_eq!(treap.insert_or_update(1, 2), Some(1));
    /// assert_eq!(treap.get(&1), Some(&2));
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = tree::get_mut(&mut self.root, &key, &self.comparator) {
            return Some(mem::replace(&mut entry.value, value));
        }
        self.insert(key, value);
        None
    }

    /// Removes the first entry with a key equal to `key` and returns it. Returns `None` if no such
    /// entry exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// assert_eq!(treap.remove(&1), Some((1, 1)));
    /// assert_eq!(treap.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.lower_bound(key);
        match tree::nth(&self.root, index) {
            Some(entry) if self.comparator.compare(&entry.key, key) == Ordering::Equal => {},
            _ => return None,
        }
        self.remove_at(index).ok()
    }

    /// Removes the entry at in-order position `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap: Treap<_, _> = vec![(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    /// assert_eq!(treap.remove_at(1), Ok((2, 'b')));
    /// assert!(treap.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<(K, V)> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let mut removed = tree::split(&mut self.root, index);
        let rest = tree::split(&mut removed, 1);
        tree::merge(&mut self.root, rest);
        let node = removed.ok_or(Error::IndexOutOfRange { index, len })?;
        let Node { entry, .. } = *node;
        Ok(entry.into_pair())
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// assert!(!treap.contains_key(&0));
    /// assert!(treap.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if the key does not exist in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// assert_eq!(treap.get(&0), None);
    /// assert_eq!(treap.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        tree::get(&self.root, key, &self.comparator).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// *treap.get_mut(&1).unwrap() = 2;
    /// assert_eq!(treap.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        tree::get_mut(&mut self.root, key, &self.comparator).map(|entry| &mut entry.value)
    }

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key does not exist in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::{treap::Treap, Error};
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// assert_eq!(treap.force_get(&1), Ok(&1));
    /// assert_eq!(treap.force_get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn force_get(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the number of entries whose keys are strictly less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<_, _> = vec![(1, ()), (3, ()), (3, ())].into_iter().collect();
    /// assert_eq!(treap.lower_bound(&3), 1);
    /// assert_eq!(treap.lower_bound(&4), 3);
    /// ```
    pub fn lower_bound(&self, key: &K) -> usize {
        tree::lower_bound(&self.root, key, &self.comparator)
    }

    /// Returns the number of entries whose keys are less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<_, _> = vec![(1, ()), (3, ()), (3, ())].into_iter().collect();
    /// assert_eq!(treap.upper_bound(&0), 0);
    /// assert_eq!(treap.upper_bound(&3), 3);
    /// ```
    pub fn upper_bound(&self, key: &K) -> usize {
        tree::upper_bound(&self.root, key, &self.comparator)
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.root).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.root).map(|entry| &entry.key)
    }

    /// Moves every entry of `other` after the entries of `self`, leaving `other` empty. All keys
    /// of `self` must be less than or equal to all keys of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolated`] and leaves both treaps unchanged if the maximum key
    /// of `self` is greater than the minimum key of `other`. Use [`union`](Treap::union) to merge
    /// treaps with overlapping keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut left: Treap<_, _> = vec![(1, 1), (2, 2)].into_iter().collect();
    /// let mut right: Treap<_, _> = vec![(3, 3)].into_iter().collect();
    /// left.merge(&mut right).unwrap();
    /// assert_eq!(left.to_vec(), vec![(1, 1), (2, 2), (3, 3)]);
    /// assert!(right.is_empty());
    ///
    /// let mut overlapping: Treap<_, _> = vec![(0, 0)].into_iter().collect();
    /// assert!(left.merge(&mut overlapping).is_err());
    /// assert_eq!(overlapping.len(), 1);
    /// ```
    pub fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let (Some(last), Some(first)) = (tree::max(&self.root), tree::min(&other.root)) {
            if self.comparator.compare(&last.key, &first.key) == Ordering::Greater {
                debug!(
                    "rejected merge of treaps with overlapping keys ({} and {} entries)",
                    self.len(),
                    other.len()
                );
                return Err(Error::PreconditionViolated(
                    "every key of the left treap must precede every key of the right treap",
                ));
            }
        }
        trace!("merging treaps with {} and {} entries", self.len(), other.len());
        tree::merge(&mut self.root, other.root.take());
        Ok(())
    }

    /// Returns the union of two treaps whose keys may interleave. Entries with equal keys are all
    /// kept, with the entries of `left` first. The result uses the comparator and random source of
    /// `left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let left: Treap<_, _> = vec![(1, 'a'), (3, 'a')].into_iter().collect();
    /// let right: Treap<_, _> = vec![(2, 'b'), (3, 'b')].into_iter().collect();
    /// let union = Treap::union(left, right);
    /// assert_eq!(union.to_vec(), vec![(1, 'a'), (2, 'b'), (3, 'a'), (3, 'b')]);
    /// ```
    pub fn union(left: Self, right: Self) -> Self {
        let Treap {
            root: left_tree,
            comparator,
            rng,
        } = left;
        let Treap {
            root: right_tree, ..
        } = right;
        trace!(
            "taking union of treaps with {} and {} entries",
            tree::len(&left_tree),
            tree::len(&right_tree)
        );
        let root = tree::union(left_tree, right_tree, &comparator);
        Treap {
            root,
            comparator,
            rng,
        }
    }

    /// Splits the treap into the first `index` entries and the remaining entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<_, _> = vec![(1, 1), (2, 2), (3, 3)].into_iter().collect();
    /// let (first, second) = treap.split(1).unwrap();
    /// assert_eq!(first.to_vec(), vec![(1, 1)]);
    /// assert_eq!(second.to_vec(), vec![(2, 2), (3, 3)]);
    /// ```
    pub fn split(self, index: usize) -> Result<(Self, Self)>
    where
        C: Clone,
    {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        trace!("splitting treap with {} entries at {}", len, index);
        let Treap {
            mut root,
            comparator,
            mut rng,
        } = self;
        let rest = tree::split(&mut root, index);
        let rest_rng = rng.gen::<XorShiftRng>();
        Ok((
            Treap {
                root,
                comparator: comparator.clone(),
                rng,
            },
            Treap {
                root: rest,
                comparator,
                rng: rest_rng,
            },
        ))
    }
}

impl<K, V, C> Treap<K, V, C> {
    /// Returns the number of entries in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the treap, removing all entries.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the entry at in-order position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<_, _> = vec![(3, 'c'), (1, 'a')].into_iter().collect();
    /// assert_eq!(treap.nth(1), Ok((&3, &'c')));
    /// assert!(treap.nth(2).is_err());
    /// ```
    pub fn nth(&self, index: usize) -> Result<(&K, &V)> {
        tree::nth(&self.root, index)
            .map(Entry::as_pair)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the key and a mutable reference to the value of the entry at in-order position
    /// `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn nth_mut(&mut self, index: usize) -> Result<(&K, &mut V)> {
        let len = self.len();
        tree::nth_mut(&mut self.root, index)
            .map(|entry| (&entry.key, &mut entry.value))
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a treap with the same keys and shape where every value is replaced by
    /// `f(key, value)`. `f` is called once per entry in key order. The new treap draws its
    /// priorities from a generator seeded by the random source of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap: Treap<_, _> = vec![(1, 1), (2, 2)].into_iter().collect();
    /// let mapped = treap.map(|key, value| format!("{}:{}", key, value));
    /// assert_eq!(mapped.to_vec(), vec![(1, "1:1".to_string()), (2, "2:2".to_string())]);
    /// ```
    pub fn map<Y, F>(&mut self, mut f: F) -> Treap<K, Y, C>
    where
        K: Clone,
        C: Clone,
        F: FnMut(&K, &V) -> Y,
    {
        Treap {
            root: tree::map(&self.root, &mut f),
            comparator: self.comparator.clone(),
            rng: self.rng.gen::<XorShiftRng>(),
        }
    }

    /// Returns the entries of the treap in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let treap: Treap<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
    /// assert_eq!(treap.to_vec(), vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut ret = Vec::with_capacity(self.len());
        ret.extend(self.iter().map(|(key, value)| (key.clone(), value.clone())));
        ret
    }

    /// Returns an iterator over the treap. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// treap.insert(3, 3);
    ///
    /// let mut iterator = treap.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapIter<'_, K, V> {
        TreapIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the treap. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1, 1);
    /// treap.insert(3, 3);
    ///
    /// for (_, value) in &mut treap {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(treap.to_vec(), vec![(1, 2), (3, 4)]);
    /// ```
    pub fn iter_mut(&mut self) -> TreapIterMut<'_, K, V> {
        TreapIterMut {
            current: self.root.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<K, V, C> IntoIterator for Treap<K, V, C> {
    type Item = (K, V);
    type IntoIter = TreapIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let Treap { root, .. } = self;
        TreapIntoIter {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a Treap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = TreapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut Treap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = TreapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `Treap<K, V, C>`.
///
/// This iterator traverses the entries of a treap in-order and yields owned entries.
pub struct TreapIntoIter<K, V> {
    current: tree::Tree<K, V>,
    stack: Vec<Node<K, V>>,
}

impl<K, V> Iterator for TreapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `Treap<K, V, C>`.
///
/// This iterator traverses the entries of a treap in-order and yields immutable references.
pub struct TreapIter<'a, K, V> {
    current: &'a tree::Tree<K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for TreapIter<'a, K, V> {
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

type IterMutFrame<'a, K, V> = (&'a K, &'a mut V, Option<&'a mut Node<K, V>>);

/// A mutable iterator for `Treap<K, V, C>`.
///
/// This iterator traverses the entries of a treap in-order and yields mutable references to the
/// values.
pub struct TreapIterMut<'a, K, V> {
    current: Option<&'a mut Node<K, V>>,
    stack: Vec<IterMutFrame<'a, K, V>>,
}

impl<'a, K, V> Iterator for TreapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let TreapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node {
                entry: Entry { key, value },
                left,
                right,
                ..
            } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((&*key, value, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(key, value, right)| {
            *current = right;
            (key, value)
        })
    }
}

impl<K: Ord, V> Default for Treap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Treap<K, V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_entries(iter, NaturalOrder)
    }
}

impl<K, V, C> Extend<(K, V)> for Treap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> Index<&'a K> for Treap<K, V, C>
where
    C: Comparator<K>,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K, V, C> IndexMut<&'a K> for Treap<K, V, C>
where
    C: Comparator<K>,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<K, V, C> fmt::Debug for Treap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
