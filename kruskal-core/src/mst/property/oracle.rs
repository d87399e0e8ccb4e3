//! Prim's algorithm as an independent reference for forest weight.
//!
//! Runs an `O(n^2)` Prim from every vertex not yet reached, so disconnected
//! inputs produce a minimum spanning forest and a component count.

/// Weight and component count of the reference forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: u64,
    pub component_count: usize,
}

pub(super) fn prim_forest(vertex_count: usize, edges: &[(usize, usize, u64)]) -> OracleForest {
    let mut cheapest: Vec<Vec<Option<u64>>> = vec![vec![None; vertex_count]; vertex_count];
    for &(left, right, weight) in edges {
        if left == right {
            continue;
        }
        let best = cheapest[left][right].map_or(weight, |current| current.min(weight));
        cheapest[left][right] = Some(best);
        cheapest[right][left] = Some(best);
    }

    let mut reached = vec![false; vertex_count];
    let mut total_weight = 0;
    let mut component_count = 0;

    for start in 0..vertex_count {
        if reached[start] {
            continue;
        }
        component_count += 1;
        let mut distance: Vec<Option<u64>> = vec![None; vertex_count];
        distance[start] = Some(0);

        while let Some((next, cost)) = (0..vertex_count)
            .filter(|&vertex| !reached[vertex])
            .filter_map(|vertex| distance[vertex].map(|cost| (vertex, cost)))
            .min_by_key(|&(_, cost)| cost)
        {
            reached[next] = true;
            total_weight += cost;
            for other in 0..vertex_count {
                if reached[other] {
                    continue;
                }
                if let Some(weight) = cheapest[next][other] {
                    let improved = distance[other].map_or(weight, |current| current.min(weight));
                    distance[other] = Some(improved);
                }
            }
        }
    }

    OracleForest {
        total_weight,
        component_count,
    }
}
