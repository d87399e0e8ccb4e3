//! Property-based tests for the Kruskal builder.
//!
//! Compares [`super::KruskalBuilder::build`] against an independent Prim
//! oracle, validates forest structure (acyclicity, edge count, ordering), and
//! checks that repeated builds are reproducible across weight distributions
//! that stress tie-breaking and disconnected inputs.

mod oracle;
mod properties;
mod strategies;

/// Weight distribution used to generate a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range; ties are rare.
    Unique,
    /// A pool of one to three weights shared by every edge.
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges and self-loops.
    Sparse,
    /// Several vertex groups with no edges between them.
    Disconnected,
}

/// Generated graph over vertices `v0 .. v{vertex_count - 1}`.
///
/// Every vertex appears in at least one edge so the builder's registry sees
/// the whole vertex set.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, u64)>,
    pub distribution: WeightDistribution,
}
