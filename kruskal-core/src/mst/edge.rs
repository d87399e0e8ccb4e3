//! Weighted edges ordered by `(weight, sequence)`.

use std::cmp::Ordering;

use crate::registry::VertexId;

/// An undirected edge between two registered vertices.
///
/// Edges order by weight and then by insertion sequence, so equal weights are
/// drained in the order they were ingested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub(crate) left: VertexId,
    pub(crate) right: VertexId,
    pub(crate) weight: u64,
    pub(crate) sequence: usize,
}

impl Edge {
    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> VertexId { self.left }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> VertexId { self.right }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u64 { self.weight }

    /// Returns the zero-based insertion index used to break weight ties.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> usize { self.sequence }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.left == self.right
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.left.cmp(&other.left))
            .then_with(|| self.right.cmp(&other.right))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts edges into drain order.
///
/// `(weight, sequence)` is unique per builder, so an unstable sort still
/// yields a deterministic order.
#[cfg(feature = "parallel")]
pub(crate) fn sort_edges(edges: &mut [Edge]) {
    use rayon::slice::ParallelSliceMut;

    edges.par_sort_unstable();
}

/// Sorts edges into drain order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn sort_edges(edges: &mut [Edge]) {
    edges.sort_unstable();
}
