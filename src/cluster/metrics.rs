//! Community statistics and metrics

use std::collections::HashSet;
use itertools::Itertools;
use crate::graph::{Graph, NodeId};

/// Number of central nodes reported per community
const CENTRAL_NODE_COUNT: usize = 5;

/// Calculate density (adjacent pairs / potential pairs) of `members` in `graph`.
///
/// A pair counts once it is linked in both directions, however many entries
/// store it.
pub fn calculate_density(graph: &Graph, members: &[NodeId]) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton communities have density 1
    }

    let potential_edges = n * (n - 1) / 2;

    let actual_edges = members
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| graph.is_adjacent(a, b))
        .count();

    actual_edges as f32 / potential_edges as f32
}

/// Members with the highest degree towards other members, ties by node id
pub fn identify_central_nodes(graph: &Graph, members: &[NodeId]) -> Vec<NodeId> {
    let member_set: HashSet<NodeId> = members.iter().copied().collect();

    let mut degrees: Vec<(NodeId, usize)> = members
        .iter()
        .map(|&node| {
            let degree = graph
                .distinct_neighbors(node)
                .into_iter()
                .filter(|neighbor| member_set.contains(neighbor))
                .count();
            (node, degree)
        })
        .collect();

    degrees.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    degrees
        .into_iter()
        .take(CENTRAL_NODE_COUNT)
        .map(|(node, _)| node)
        .collect()
}
