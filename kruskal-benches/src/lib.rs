//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for edge ingestion, tree construction, and the
//! disjoint-set forest.

pub mod error;
pub mod params;
pub mod source;
