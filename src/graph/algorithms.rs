//! Edge symmetry checks and repair

use std::collections::HashSet;
use crate::graph::{Graph, NodeId};

/// Find stored edges whose reverse edge is missing.
///
/// Self-loops are ignored. Each offending `(from, to)` pair is reported once,
/// in node order.
pub fn asymmetric_edges(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut missing = Vec::new();
    let mut seen = HashSet::new();

    for src in graph.node_ids() {
        for &dst in graph.neighbors(src) {
            if dst == src {
                continue;
            }
            if !graph.is_connected(dst, src) && seen.insert((src, dst)) {
                missing.push((src, dst));
            }
        }
    }

    missing
}

/// Add every missing reverse edge so that adjacency becomes symmetric.
///
/// Returns the number of edges added.
pub fn symmetrize(graph: &mut Graph) -> usize {
    let missing = asymmetric_edges(graph);

    for &(src, dst) in &missing {
        log::debug!(
            "Adding reverse edge {} -> {}",
            graph.label(dst),
            graph.label(src)
        );
        graph.add_edge(dst, src);
    }

    missing.len()
}
