//! Disjoint-set forest over the vertices `0..n`.

/// A union-find forest over the vertices `0..n` using union by size and path compression.
///
/// [`find`](UnionFind::find) does not need mutable access, while
/// [`find_shorten`](UnionFind::find_shorten) also points every vertex on the path directly at the
/// representative so later lookups are faster.
///
/// # Panics
///
/// Every method that takes a vertex panics if the vertex is not less than [`len`](UnionFind::len).
///
/// # Examples
///
/// ```
/// use procon_collections::union_find::UnionFind;
///
/// let mut forest = UnionFind::new(5);
/// assert!(forest.union(0, 1));
/// assert!(forest.union(3, 4));
/// assert!(!forest.union(1, 0));
///
/// assert!(forest.connected(0, 1));
/// assert!(!forest.connected(1, 3));
/// assert_eq!(forest.set_len(4), 2);
/// assert_eq!(forest.set_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    set_count: usize,
}

impl UnionFind {
    /// Constructs a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parents: (0..n).collect(),
            sizes: vec![1; n],
            set_count: n,
        }
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if the forest has no vertices.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the representative of the set containing `v`.
    pub fn find(&self, mut v: usize) -> usize {
        while self.parents[v] != v {
            v = self.parents[v];
        }
        v
    }

    /// Returns the representative of the set containing `v` and compresses the path to it.
    pub fn find_shorten(&mut self, v: usize) -> usize {
        let root = self.find(v);
        let mut curr = v;
        while curr != root {
            let next = self.parents[curr];
            self.parents[curr] = root;
            curr = next;
        }
        root
    }

    /// Returns `true` if `u` and `v` belong to the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find_shorten(u) == self.find_shorten(v)
    }

    /// Merges the sets containing `u` and `v`. Returns `false` if they were already the same set.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let mut u = self.find_shorten(u);
        let mut v = self.find_shorten(v);
        if u == v {
            return false;
        }
        if self.sizes[u] > self.sizes[v] {
            std::mem::swap(&mut u, &mut v);
        }
        self.parents[u] = v;
        self.sizes[v] += self.sizes[u];
        self.set_count -= 1;
        true
    }

    /// Returns the number of vertices in the set containing `v`.
    pub fn set_len(&mut self, v: usize) -> usize {
        let root = self.find_shorten(v);
        self.sizes[root]
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn test_singletons() {
        let forest = UnionFind::new(3);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.set_count(), 3);
        for v in 0..3 {
            assert_eq!(forest.find(v), v);
        }
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn test_union_by_size() {
        let mut forest = UnionFind::new(6);
        forest.union(0, 1);
        forest.union(0, 2);
        forest.union(3, 0);
        assert_eq!(forest.find(3), forest.find(1));
        assert_eq!(forest.set_len(2), 4);
        assert_eq!(forest.set_len(5), 1);
        assert_eq!(forest.set_count(), 3);
    }

    #[test]
    fn test_find_shorten_compresses() {
        let mut forest = UnionFind::new(4);
        forest.parents = vec![0, 0, 1, 2];
        assert_eq!(forest.find_shorten(3), 0);
        assert_eq!(forest.parents, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_chain_of_unions() {
        let mut forest = UnionFind::new(100);
        for v in 1..100 {
            assert!(forest.union(v - 1, v));
        }
        assert_eq!(forest.set_count(), 1);
        assert!(forest.connected(0, 99));
        assert_eq!(forest.set_len(50), 100);
    }
}
