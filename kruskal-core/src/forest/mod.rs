//! Disjoint-set forest (union-find) used to reject cycle-forming edges.
//!
//! The forest tracks a partition of `0..len` into disjoint sets. `find`
//! performs full path compression and `union` attaches the smaller tree under
//! the larger one, keeping trees at most logarithmically deep. The number of
//! remaining sets is maintained incrementally so callers can read it in
//! constant time.

use crate::error::{MstError, Result};

/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert_eq!(forest.components(), 4);
/// assert!(forest.union(0, 1)?);
/// assert!(!forest.union(1, 0)?);
/// assert!(forest.connected(0, 1)?);
/// assert_eq!(forest.set_size(1)?, 2);
/// assert_eq!(forest.components(), 3);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Returns the number of elements in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the forest holds no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the root of the set containing `index`.
    ///
    /// Every node visited on the way is repointed directly at the root, so the
    /// partition is unchanged but subsequent lookups are shorter.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when `index >= len`.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;

        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = index;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when both
    /// elements already shared a root. On equal sizes the root of `right` is
    /// attached under the root of `left`.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when either index is outside the forest.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let (root, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.parent[child] = root;
        self.size[root] = self.size[root].saturating_add(self.size[child]);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when either index is outside the forest.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the number of elements in the set containing `index`.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when `index >= len`.
    pub fn set_size(&mut self, index: usize) -> Result<usize> {
        let root = self.find(index)?;
        Ok(self.size[root])
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::OutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }
}

impl TryFrom<i64> for DisjointSetForest {
    type Error = MstError;

    /// Builds a forest from a signed element count, rejecting negative values.
    fn try_from(requested: i64) -> Result<Self> {
        let len = usize::try_from(requested).map_err(|_| MstError::InvalidSize { requested })?;
        Ok(Self::new(len))
    }
}
