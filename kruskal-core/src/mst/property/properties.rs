//! Property runners shared by the proptest and rstest suites.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{KruskalBuilder, MstResult};

use super::GraphFixture;
use super::oracle::prim_forest;

fn fixture_builder(fixture: &GraphFixture) -> Result<KruskalBuilder, TestCaseError> {
    let mut builder = KruskalBuilder::new();
    for &(left, right, weight) in &fixture.edges {
        builder
            .ingest_weight(&format!("v{left}"), &format!("v{right}"), weight)
            .map_err(|err| TestCaseError::fail(format!("ingest failed: {err}")))?;
    }
    Ok(builder)
}

pub(super) fn build_fixture(fixture: &GraphFixture) -> Result<MstResult, TestCaseError> {
    fixture_builder(fixture)?.build().map_err(|err| {
        TestCaseError::fail(format!(
            "build failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })
}

/// The forest weight and component count match Prim's algorithm.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let result = build_fixture(fixture)?;
    let oracle = prim_forest(fixture.vertex_count, &fixture.edges);

    if result.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from oracle {} ({:?})",
            result.total_weight(),
            oracle.total_weight,
            fixture.distribution,
        )));
    }
    if result.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count {} differs from oracle {} ({:?})",
            result.component_count(),
            oracle.component_count,
            fixture.distribution,
        )));
    }
    Ok(())
}

/// Accepted edges form a forest with `V - C` edges in non-decreasing weight
/// order, and the total is their sum.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let result = build_fixture(fixture)?;
    let vertex_count = result.vertex_count();

    if vertex_count != fixture.vertex_count {
        return Err(TestCaseError::fail(format!(
            "registry saw {vertex_count} vertices, fixture has {}",
            fixture.vertex_count,
        )));
    }

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut previous = 0;
    let mut sum: u64 = 0;
    for (index, edge) in result.edges().iter().enumerate() {
        if edge.left().id() == edge.right().id() {
            return Err(TestCaseError::fail(format!("edge {index} is a self-loop")));
        }
        if edge.weight() < previous {
            return Err(TestCaseError::fail(format!(
                "edge {index} weight {} follows heavier weight {previous}",
                edge.weight(),
            )));
        }
        let left_root = find_root(&mut parent, edge.left().id().get());
        let right_root = find_root(&mut parent, edge.right().id().get());
        if left_root == right_root {
            return Err(TestCaseError::fail(format!("edge {index} closes a cycle")));
        }
        parent[right_root] = left_root;
        previous = edge.weight();
        sum += edge.weight();
    }

    if sum != result.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight {} is not the edge sum {sum}",
            result.total_weight(),
        )));
    }
    let expected_edges = vertex_count - result.component_count();
    if result.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "expected {expected_edges} edges for {vertex_count} vertices and {} components, got {}",
            result.component_count(),
            result.edges().len(),
        )));
    }
    Ok(())
}

/// Fresh builders fed the same edges, and repeated builds on one builder,
/// produce identical results.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let first = build_fixture(fixture)?;
    let second = build_fixture(fixture)?;
    if first != second {
        return Err(TestCaseError::fail("independent builds diverged"));
    }

    let mut builder = fixture_builder(fixture)?;
    let fail = |err: crate::MstError| TestCaseError::fail(format!("build failed: {err}"));
    let cached = builder.build().map_err(fail)?;
    let again = builder.build().map_err(fail)?;
    if cached != again || cached != first {
        return Err(TestCaseError::fail("repeated builds diverged"));
    }
    Ok(())
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
