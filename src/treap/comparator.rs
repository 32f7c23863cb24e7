use std::cmp::Ordering;

/// A total order over keys used by a [`Treap`](crate::treap::Treap).
///
/// Any closure of the form `Fn(&K, &K) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use procon_collections::treap::{Comparator, NaturalOrder, Reverse};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reverse.compare(&1, &2), Ordering::Greater);
///
/// let by_last_digit = |a: &u32, b: &u32| (a % 10).cmp(&(b % 10));
/// assert_eq!(by_last_digit.compare(&13, &7), Ordering::Less);
/// ```
pub trait Comparator<K> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The natural ordering of a key type, as given by its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the natural ordering of a key type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse;

impl<K: Ord> Comparator<K> for Reverse {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
