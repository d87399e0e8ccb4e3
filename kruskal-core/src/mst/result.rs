//! Result types produced by [`crate::KruskalBuilder::build`].

use std::fmt;

use crate::registry::Vertex;

/// An edge accepted into the spanning tree, with resolved endpoint names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AcceptedEdge {
    pub(crate) left: Vertex,
    pub(crate) right: Vertex,
    pub(crate) weight: u64,
    pub(crate) sequence: usize,
}

impl AcceptedEdge {
    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &Vertex { &self.left }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &Vertex { &self.right }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u64 { self.weight }

    /// Returns the insertion index the edge was ingested with.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> usize { self.sequence }
}

impl fmt::Display for AcceptedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}: {}", self.left, self.right, self.weight)
    }
}

/// The output of a minimum spanning forest computation.
///
/// Edges are listed in acceptance order, which is non-decreasing by weight.
/// When the input graph is connected the forest is a minimum spanning tree
/// and [`Self::is_tree`] returns `true`.
///
/// # Examples
/// ```
/// use kruskal_core::KruskalBuilder;
///
/// let mut builder = KruskalBuilder::new();
/// builder.ingest("A", "B", "1")?;
/// builder.ingest("C", "D", "2")?;
/// let result = builder.build()?;
///
/// assert_eq!(result.edges().len(), 2);
/// assert_eq!(result.total_weight(), 3);
/// assert_eq!(result.component_count(), 2);
/// assert!(!result.is_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MstResult {
    pub(crate) edges: Vec<AcceptedEdge>,
    pub(crate) total_weight: u64,
    pub(crate) component_count: usize,
    pub(crate) vertex_count: usize,
}

impl MstResult {
    pub(crate) fn without_edges(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
            component_count: vertex_count,
            vertex_count,
        }
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[AcceptedEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the number of connected components left after the build.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}
