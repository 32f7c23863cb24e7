//! Growable double-ended queue backed by a ring buffer.

use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

const MIN_CAPACITY: usize = 16;

/// A double-ended queue stored in a ring buffer that grows by half of its capacity when full.
///
/// Pushing and popping at either end is `O(1)` amortized and indexing is `O(1)`.
///
/// # Examples
///
/// ```
/// use procon_collections::deque::Deque;
///
/// let mut deque = Deque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque[0], 0);
/// assert_eq!(deque.pop_back(), Some(2));
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.iter().collect::<Vec<&u32>>(), vec![&1]);
/// ```
#[derive(Clone, Debug)]
pub struct Deque<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Deque<T> {
    /// Constructs a new, empty `Deque<T>` without allocating.
    pub fn new() -> Self {
        Deque {
            buffer: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Constructs a new, empty `Deque<T>` with room for at least `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut deque = Self::new();
        deque.reserve(capacity);
        deque
    }

    /// Returns the number of values in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the deque can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    // Maps a position in the deque to a slot in the buffer.
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    fn rebuild(&mut self, capacity: usize) {
        let mut buffer = Vec::with_capacity(capacity);
        for index in 0..self.len {
            let slot = self.slot(index);
            buffer.push(self.buffer[slot].take());
        }
        buffer.resize_with(capacity, || None);
        self.buffer = buffer;
        self.head = 0;
    }

    /// Ensures the deque can hold at least `capacity` values in total. The buffer grows to the
    /// largest of `capacity`, one and a half times the current capacity, and 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::deque::Deque;
    ///
    /// let mut deque: Deque<u32> = Deque::new();
    /// deque.reserve(1);
    /// assert_eq!(deque.capacity(), 16);
    /// deque.reserve(20);
    /// assert_eq!(deque.capacity(), 24);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        let current = self.capacity();
        if capacity <= current {
            return;
        }
        let grown = current + current / 2;
        self.rebuild(capacity.max(grown).max(MIN_CAPACITY));
    }

    /// Shrinks the buffer so that its capacity equals the number of values.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() != self.len {
            let len = self.len;
            self.rebuild(len);
        }
    }

    /// Inserts a value at the front of the deque.
    pub fn push_front(&mut self, value: T) {
        self.reserve(self.len + 1);
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.buffer[self.head] = Some(value);
        self.len += 1;
    }

    /// Inserts a value at the back of the deque.
    pub fn push_back(&mut self, value: T) {
        self.reserve(self.len + 1);
        let slot = self.slot(self.len);
        self.buffer[slot] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the value at the front of the deque. Returns `None` if the deque is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let ret = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        ret
    }

    /// Removes and returns the value at the back of the deque. Returns `None` if the deque is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let slot = self.slot(self.len);
        self.buffer[slot].take()
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.slot(index)].as_ref()
    }

    /// Returns a mutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.buffer[slot].as_mut()
    }

    /// Returns the value at the front of the deque.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the value at the back of the deque.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Removes every value while keeping the allocated buffer.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Returns an iterator over the deque from front to back.
    pub fn iter(&self) -> DequeIter<'_, T> {
        DequeIter {
            deque: self,
            index: 0,
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Index out of bounds.")
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds.")
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut deque = Deque::new();
        for value in iter {
            deque.push_back(value);
        }
        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = DequeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `Deque<T>`.
///
/// This iterator yields immutable references from front to back.
pub struct DequeIter<'a, T> {
    deque: &'a Deque<T>,
    index: usize,
}

impl<'a, T> Iterator for DequeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.deque.get(self.index);
        if ret.is_some() {
            self.index += 1;
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::Deque;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::collections::VecDeque;

    #[test]
    fn test_empty() {
        let mut deque: Deque<u32> = Deque::new();
        assert_eq!(deque.capacity(), 0);
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.pop_back(), None);
        assert_eq!(deque.front(), None);
        assert_eq!(deque.back(), None);
    }

    #[test]
    fn test_wraps_around() {
        let mut deque = Deque::with_capacity(4);
        assert_eq!(deque.capacity(), 16);
        for value in 0..10 {
            deque.push_back(value);
        }
        for value in 0..8 {
            assert_eq!(deque.pop_front(), Some(value));
        }
        for value in 10..22 {
            deque.push_back(value);
        }
        assert_eq!(deque.capacity(), 16);
        assert_eq!(deque.len(), 14);
        assert_eq!(deque.iter().cloned().collect::<Vec<u32>>(), (8..22).collect::<Vec<u32>>());
    }

    #[test]
    fn test_grows_while_wrapped() {
        let mut deque = Deque::new();
        for value in 0..16 {
            deque.push_front(value);
        }
        deque.push_back(100);
        assert_eq!(deque.capacity(), 24);
        assert_eq!(deque.front(), Some(&15));
        assert_eq!(deque.back(), Some(&100));
        assert_eq!(deque[15], 0);
    }

    #[test]
    fn test_shrink_and_clear() {
        let mut deque: Deque<u32> = (0..5).collect();
        deque.shrink_to_fit();
        assert_eq!(deque.capacity(), 5);
        assert_eq!(deque.iter().cloned().collect::<Vec<u32>>(), vec![0, 1, 2, 3, 4]);
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 5);
    }

    #[test]
    fn test_against_vec_deque() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut deque = Deque::new();
        let mut expected = VecDeque::new();
        for _ in 0..10_000 {
            match rng.gen_range(0, 4) {
                0 => {
                    let value = rng.next_u32();
                    deque.push_front(value);
                    expected.push_front(value);
                },
                1 => {
                    let value = rng.next_u32();
                    deque.push_back(value);
                    expected.push_back(value);
                },
                2 => assert_eq!(deque.pop_front(), expected.pop_front()),
                _ => assert_eq!(deque.pop_back(), expected.pop_back()),
            }
            assert_eq!(deque.len(), expected.len());
        }
        assert_eq!(
            deque.iter().collect::<Vec<&u32>>(),
            expected.iter().collect::<Vec<&u32>>(),
        );
    }
}
