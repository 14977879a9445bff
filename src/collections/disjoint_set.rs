//! Disjoint Set (Union-Find) over dense `usize` ids.
//!
//! Path compression and union-by-rank keep operations nearly constant time.
//! Used by undirected cycle detection: an edge whose endpoints already share
//! a representative closes a cycle.

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers; a root points to itself.
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets with ids `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Finds the representative of the set containing `id`, compressing the path.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
