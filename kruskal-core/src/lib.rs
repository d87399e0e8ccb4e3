//! Kruskal core library.
//!
//! Builds minimum spanning trees over named, weighted, undirected edges with
//! Kruskal's algorithm. [`KruskalBuilder`] registers vertex names, orders
//! edges by `(weight, insertion)`, and drains them through a
//! [`DisjointSetForest`] that rejects cycle-closing edges.
//!
//! Ties between equal weights are broken by insertion order, so identical
//! input always yields the identical accepted-edge sequence. A disconnected
//! input yields a minimum spanning forest; [`MstResult::component_count`]
//! distinguishes it from a tree.
//!
//! With the default `parallel` feature the edge sort runs on Rayon; the
//! selection loop itself is always sequential.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod forest;
mod mst;
mod registry;
mod source;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{MstError, MstErrorCode, Result, WeightError},
    forest::DisjointSetForest,
    mst::{AcceptedEdge, BuilderState, Edge, KruskalBuilder, MstResult},
    registry::{Vertex, VertexId, VertexRegistry},
    source::{EdgeRecord, EdgeSource, IngestReport, MalformedRecordPolicy},
};
