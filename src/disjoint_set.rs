/// A disjoint-set forest over the elements `0..n`.
///
/// Combines path compression in [`find`](DisjointSetForest::find) with union by
/// rank in [`union`](DisjointSetForest::union), which keeps any sequence of `m`
/// operations within `O(m α(n))`.
///
/// # Example
///
/// ```
/// use kruskal_mst::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(3);
/// assert!(forest.union(0, 2));
/// assert!(!forest.union(2, 0));
/// assert!(forest.same(0, 2));
/// assert_eq!(forest.count_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    /// `parent[i] == i` marks a root.
    parent: Vec<usize>,
    /// Upper bound on subtree height; only meaningful for roots.
    rank: Vec<usize>,
}

impl DisjointSetForest {
    /// Creates `n` singleton sets, each element its own root with rank 0.
    pub fn new(n: usize) -> DisjointSetForest {
        DisjointSetForest {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements in the forest, not the number of sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`, re-pointing every
    /// node on the walked path directly at it.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set. On a rank tie the
    /// root of `y` goes under the root of `x` and the surviving rank grows by one.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (designated_parent, designated_child) = if self.rank[root_x] < self.rank[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[designated_child] = designated_parent;
        if self.rank[designated_parent] == self.rank[designated_child] {
            self.rank[designated_parent] += 1;
        }
        true
    }

    /// Checks whether `x` and `y` belong to the same set.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Elements to compare; both must be below `self.len()`.
    ///
    /// # Returns
    ///
    /// `true` if both have the same representative. Compresses both paths.
    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets currently in the forest.
    pub fn count_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(element, &parent)| element == parent)
            .count()
    }
}
