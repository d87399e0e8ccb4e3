//! Graph generators for the Kruskal property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{GraphFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 24;

pub(super) fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        1 => Just(WeightDistribution::Unique),
        2 => Just(WeightDistribution::ManyIdentical),
        1 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates fixtures from a sampled distribution and seed.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = match distribution {
        WeightDistribution::Unique => {
            random_pairs(rng, vertex_count, 0.3, |r| r.gen_range(0..100_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_pairs(rng, vertex_count, 0.5, |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => sparse_edges(rng, vertex_count),
        WeightDistribution::Disconnected => disconnected_edges(rng, vertex_count),
    };
    cover_isolated_vertices(rng, vertex_count, &mut edges);

    GraphFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> u64,
) -> Vec<(usize, usize, u64)> {
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push((left, right, w));
            }
        }
    }
    edges
}

fn sparse_edges(rng: &mut SmallRng, vertex_count: usize) -> Vec<(usize, usize, u64)> {
    let mut edges = Vec::with_capacity(vertex_count * 2);
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push((vertex, parent, rng.gen_range(0..50)));
    }
    for _ in 0..(vertex_count / 2) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push((left, right, rng.gen_range(0..50)));
    }
    edges
}

fn disconnected_edges(rng: &mut SmallRng, vertex_count: usize) -> Vec<(usize, usize, u64)> {
    let groups = rng.gen_range(2..=4).min(vertex_count);
    let group_of = |vertex: usize| vertex % groups;
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if group_of(left) == group_of(right) && rng.gen_bool(0.6) {
                edges.push((left, right, rng.gen_range(0..20)));
            }
        }
    }
    edges
}

/// Adds a self-loop for every vertex no edge touches so it is still registered.
fn cover_isolated_vertices(
    rng: &mut SmallRng,
    vertex_count: usize,
    edges: &mut Vec<(usize, usize, u64)>,
) {
    let mut touched = vec![false; vertex_count];
    for &(left, right, _) in edges.iter() {
        touched[left] = true;
        touched[right] = true;
    }
    for (vertex, seen) in touched.into_iter().enumerate() {
        if !seen {
            edges.push((vertex, vertex, rng.gen_range(0..10)));
        }
    }
}
