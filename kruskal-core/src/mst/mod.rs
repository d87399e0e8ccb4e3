//! Kruskal minimum spanning tree construction.
//!
//! [`KruskalBuilder`] accumulates named, weighted edges and turns them into a
//! [`MstResult`]. Edges are drained in `(weight, insertion)` order through a
//! [`DisjointSetForest`]; an edge whose endpoints already share a root would
//! close a cycle and is discarded. The loop stops once `vertices - 1` edges
//! have been accepted or the edge supply runs out, so disconnected inputs
//! yield a minimum spanning forest whose component count tells the two cases
//! apart.

mod edge;
mod result;

use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    error::{MstError, Result, WeightError},
    forest::DisjointSetForest,
    registry::{Vertex, VertexId, VertexRegistry},
    source::{EdgeSource, IngestReport, MalformedRecordPolicy},
};

pub use self::{
    edge::Edge,
    result::{AcceptedEdge, MstResult},
};

/// Lifecycle of a [`KruskalBuilder`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuilderState {
    /// Edges may be ingested; no result has been produced yet.
    Accumulating,
    /// [`KruskalBuilder::build`] has run; the result is cached and ingest is
    /// rejected with [`MstError::AlreadyFinalized`].
    Finalized,
}

/// Accumulates edges between named vertices and builds their minimum
/// spanning tree.
///
/// # Examples
/// ```
/// use kruskal_core::KruskalBuilder;
///
/// let mut builder = KruskalBuilder::new();
/// builder.ingest("A", "B", "1")?;
/// builder.ingest("B", "C", "2")?;
/// builder.ingest("C", "D", "3")?;
/// builder.ingest("A", "D", "10")?;
/// builder.ingest("A", "C", "15")?;
///
/// let result = builder.build()?;
/// assert_eq!(result.total_weight(), 6);
/// assert!(result.is_tree());
/// let accepted: Vec<String> = result.edges().iter().map(ToString::to_string).collect();
/// assert_eq!(accepted, ["A to B: 1", "B to C: 2", "C to D: 3"]);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalBuilder {
    registry: VertexRegistry,
    edges: Vec<Edge>,
    edge_limit: Option<usize>,
    finalized: Option<MstResult>,
}

impl KruskalBuilder {
    /// Creates an empty builder with no edge limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of edges the builder will accept.
    ///
    /// Ingest fails with [`MstError::EdgeLimitExceeded`] once `limit` edges
    /// are pending, which bounds the work a single [`Self::build`] can do.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{KruskalBuilder, MstError};
    ///
    /// let mut builder = KruskalBuilder::new().with_edge_limit(1);
    /// builder.ingest("A", "B", "1")?;
    /// let err = builder.ingest("B", "C", "1").unwrap_err();
    /// assert_eq!(err, MstError::EdgeLimitExceeded { limit: 1 });
    /// # Ok::<(), MstError>(())
    /// ```
    #[must_use]
    pub fn with_edge_limit(mut self, limit: usize) -> Self {
        self.edge_limit = Some(limit);
        self
    }

    /// Returns the configured edge limit, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_limit(&self) -> Option<usize> { self.edge_limit }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BuilderState {
        if self.finalized.is_some() {
            BuilderState::Finalized
        } else {
            BuilderState::Accumulating
        }
    }

    /// Returns the vertex registry.
    #[must_use]
    #[rustfmt::skip]
    pub fn registry(&self) -> &VertexRegistry { &self.registry }

    /// Returns the number of distinct vertices seen so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.registry.len() }

    /// Returns the number of ingested edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Records an edge whose weight is given as text.
    ///
    /// Names are trimmed and must be non-empty; the weight must parse as a
    /// non-negative integer. The record is validated in full before any state
    /// changes, so a failure leaves the registry and edge list untouched.
    ///
    /// # Errors
    /// Returns [`MstError::AlreadyFinalized`] after [`Self::build`],
    /// [`MstError::EmptyVertexName`] for a blank name,
    /// [`MstError::ParseWeight`] for a malformed weight, and
    /// [`MstError::EdgeLimitExceeded`] when the edge cap is reached.
    pub fn ingest(&mut self, left: &str, right: &str, weight: &str) -> Result<Edge> {
        self.ensure_accumulating()?;
        let (left_name, right_name) = validate_names(left, right)?;
        let parsed = parse_weight(weight).map_err(|reason| MstError::ParseWeight {
            left: left_name.to_owned(),
            right: right_name.to_owned(),
            raw: weight.to_owned(),
            reason,
        })?;
        self.push_edge(left_name, right_name, parsed)
    }

    /// Records an edge with an already-parsed weight.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::ingest`] except
    /// [`MstError::ParseWeight`].
    pub fn ingest_weight(&mut self, left: &str, right: &str, weight: u64) -> Result<Edge> {
        self.ensure_accumulating()?;
        let (left_name, right_name) = validate_names(left, right)?;
        self.push_edge(left_name, right_name, weight)
    }

    /// Ingests every record of `source`.
    ///
    /// Under [`MalformedRecordPolicy::Abort`] the first failing record stops
    /// ingestion and is returned wrapped in [`MstError::Record`]. Under
    /// [`MalformedRecordPolicy::Skip`] malformed records are logged and
    /// counted instead; errors that are not about a single record (such as
    /// the edge limit) still abort.
    ///
    /// # Errors
    /// Returns [`MstError::AlreadyFinalized`] after [`Self::build`] and
    /// [`MstError::Record`] for a record that cannot be ingested.
    #[instrument(
        name = "mst.ingest_source",
        err,
        skip(self, source),
        fields(source = source.name(), records = source.len(), skipped = field::Empty),
    )]
    pub fn ingest_source<S>(
        &mut self,
        source: &S,
        policy: MalformedRecordPolicy,
    ) -> Result<IngestReport>
    where
        S: EdgeSource + ?Sized,
    {
        self.ensure_accumulating()?;
        let mut report = IngestReport::default();

        for record in source.records() {
            match self.ingest(record.left(), record.right(), record.weight()) {
                Ok(_) => report.accepted += 1,
                Err(err) if policy == MalformedRecordPolicy::Skip && err.is_record_level() => {
                    warn!(
                        line = record.line(),
                        code = %err.code(),
                        error = %err,
                        "skipping malformed record"
                    );
                    report.skipped += 1;
                }
                Err(err) => {
                    return Err(MstError::Record {
                        line: record.line(),
                        source: Box::new(err),
                    });
                }
            }
        }

        Span::current().record("skipped", report.skipped);
        info!(
            accepted = report.accepted,
            skipped = report.skipped,
            vertices = self.registry.len(),
            "edge source ingested"
        );
        Ok(report)
    }

    /// Builds the minimum spanning forest of the ingested edges.
    ///
    /// The first call finalises the builder; later calls return the cached
    /// result unchanged. With no edges the result is empty and every vertex is
    /// its own component.
    ///
    /// # Errors
    /// Returns [`MstError::WeightOverflow`] when the tree weight exceeds
    /// `u64::MAX`. [`MstError::OutOfRange`] indicates a registry/forest
    /// mismatch and is not expected in practice.
    #[instrument(
        name = "mst.build",
        err,
        skip(self),
        fields(vertices = self.registry.len(), edges = self.edges.len()),
    )]
    pub fn build(&mut self) -> Result<MstResult> {
        if let Some(result) = &self.finalized {
            debug!("returning cached result");
            return Ok(result.clone());
        }

        edge::sort_edges(&mut self.edges);
        let result = select_edges(&self.registry, &self.edges)?;

        if result.component_count > 1 {
            warn!(
                components = result.component_count,
                "input graph is disconnected; result is a spanning forest"
            );
        }
        info!(
            accepted = result.edges.len(),
            total_weight = result.total_weight,
            components = result.component_count,
            "minimum spanning forest built"
        );

        self.finalized = Some(result.clone());
        Ok(result)
    }

    fn ensure_accumulating(&self) -> Result<()> {
        match self.state() {
            BuilderState::Accumulating => Ok(()),
            BuilderState::Finalized => Err(MstError::AlreadyFinalized),
        }
    }

    fn push_edge(&mut self, left: &str, right: &str, weight: u64) -> Result<Edge> {
        if let Some(limit) = self.edge_limit.filter(|&limit| self.edges.len() >= limit) {
            return Err(MstError::EdgeLimitExceeded { limit });
        }

        let edge = Edge {
            left: self.registry.intern(left),
            right: self.registry.intern(right),
            weight,
            sequence: self.edges.len(),
        };
        self.edges.push(edge);
        Ok(edge)
    }
}

fn validate_names<'a>(left: &'a str, right: &'a str) -> Result<(&'a str, &'a str)> {
    let left = left.trim();
    let right = right.trim();
    if left.is_empty() || right.is_empty() {
        return Err(MstError::EmptyVertexName);
    }
    Ok((left, right))
}

fn parse_weight(raw: &str) -> Result<u64, WeightError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WeightError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(WeightError::Negative);
    }
    Ok(trimmed.parse::<u64>()?)
}

/// Drains sorted `edges` through a fresh forest sized to the registry.
fn select_edges(registry: &VertexRegistry, edges: &[Edge]) -> Result<MstResult> {
    let vertex_count = registry.len();
    if edges.is_empty() {
        return Ok(MstResult::without_edges(vertex_count));
    }

    let mut forest = DisjointSetForest::new(vertex_count);
    let tree_size = vertex_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(tree_size);
    let mut total_weight: u64 = 0;

    for edge in edges {
        if accepted.len() == tree_size {
            break;
        }

        let left_root = forest.find(edge.left.get())?;
        let right_root = forest.find(edge.right.get())?;
        if left_root == right_root {
            debug!(
                sequence = edge.sequence,
                weight = edge.weight,
                self_loop = edge.is_self_loop(),
                "edge rejected: endpoints already connected"
            );
            continue;
        }

        forest.union(left_root, right_root)?;
        total_weight = total_weight
            .checked_add(edge.weight)
            .ok_or(MstError::WeightOverflow)?;
        accepted.push(AcceptedEdge {
            left: resolve(registry, edge.left)?,
            right: resolve(registry, edge.right)?,
            weight: edge.weight,
            sequence: edge.sequence,
        });
        debug!(
            sequence = edge.sequence,
            weight = edge.weight,
            "edge accepted"
        );
    }

    Ok(MstResult {
        edges: accepted,
        total_weight,
        component_count: forest.components(),
        vertex_count,
    })
}

fn resolve(registry: &VertexRegistry, id: VertexId) -> Result<Vertex> {
    registry
        .vertex(id)
        .cloned()
        .ok_or(MstError::OutOfRange {
            index: id.get(),
            len: registry.len(),
        })
}


#[cfg(test)]
mod property;
