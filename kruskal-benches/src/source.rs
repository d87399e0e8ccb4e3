//! Synthetic weighted graphs for benchmarking.
//!
//! [`SyntheticGraph`] is an [`EdgeSource`] over a seeded random graph: a
//! random spanning chain keeps it connected, and extra random edges bring the
//! average degree up to the requested value.

use kruskal_core::{EdgeRecord, EdgeSource};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2 (got {0})")]
    TooFewVertices(usize),
    /// The weight range was empty.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges per vertex, counting the spanning chain.
    pub average_degree: usize,
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph exposed as edge records.
///
/// # Examples
///
/// ```
/// use kruskal_benches::source::{SyntheticGraph, SyntheticGraphConfig};
/// use kruskal_core::EdgeSource;
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     average_degree: 3,
///     max_weight: 100,
///     seed: 42,
/// };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    records: Vec<EdgeRecord>,
    vertex_count: usize,
}

impl SyntheticGraph {
    /// Generates the graph eagerly from `config`.
    ///
    /// The result holds `max(vertex_count - 1, vertex_count * average_degree)`
    /// records. Vertex names are `v0`, `v1`, and so on; weights are decimal
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::TooFewVertices`] for fewer than two
    /// vertices and [`SyntheticError::ZeroMaxWeight`] for an empty weight
    /// range.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count < 2 {
            return Err(SyntheticError::TooFewVertices(config.vertex_count));
        }
        if config.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let target = config
            .vertex_count
            .saturating_mul(config.average_degree)
            .max(config.vertex_count - 1);
        let mut records = Vec::with_capacity(target);

        let mut order: Vec<usize> = (0..config.vertex_count).collect();
        order.shuffle(&mut rng);
        for pair in order.windows(2) {
            if let [left, right] = *pair {
                records.push(record(&mut rng, records.len(), left, right, config.max_weight));
            }
        }

        while records.len() < target {
            let left = rng.gen_range(0..config.vertex_count);
            let right = rng.gen_range(0..config.vertex_count);
            records.push(record(&mut rng, records.len(), left, right, config.max_weight));
        }

        Ok(Self {
            records,
            vertex_count: config.vertex_count,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

fn record(
    rng: &mut SmallRng,
    index: usize,
    left: usize,
    right: usize,
    max_weight: u64,
) -> EdgeRecord {
    let weight = rng.gen_range(1..=max_weight);
    EdgeRecord::new(
        index + 1,
        format!("v{left}"),
        format!("v{right}"),
        weight.to_string(),
    )
}

impl EdgeSource for SyntheticGraph {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn records(&self) -> &[EdgeRecord] {
        &self.records
    }
}
