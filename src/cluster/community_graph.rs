//! Community graph construction

use rayon::prelude::*;
use crate::clique::Clique;
use crate::error::{CpmError, Result};
use crate::graph::{Graph, NodeId};

/// Count the original-graph nodes two cliques have in common
pub fn shared_members(a: &Clique, b: &Clique) -> usize {
    a.members().iter().filter(|&&node| b.contains(node)).count()
}

/// Check whether `a` and `b` share k-1 members, stopping as soon as they do
fn shares_k_minus_1(a: &Clique, b: &Clique, k: usize) -> bool {
    let mut common = 0;
    for &node in a.members() {
        if b.contains(node) {
            common += 1;
            if common == k - 1 {
                return true;
            }
        }
    }
    false
}

/// Build the graph whose nodes are `cliques` and whose edges join cliques
/// sharing k-1 nodes.
///
/// Node `i` stands for `cliques[i]`; its label is the clique's member labels
/// (looked up in `original`) joined with `,`. Labels are for display only and
/// may collide when original labels contain `,`. Every ordered pair is evaluated
/// on its own, so each link is stored in both directions. With `parallel` the
/// neighbor rows are computed on the rayon pool; edges are still appended in
/// node order.
pub fn build_community_graph(
    original: &Graph,
    cliques: &[Clique],
    k: usize,
    parallel: bool,
) -> Result<Graph> {
    if k < 2 {
        return Err(CpmError::InvalidCliqueSize { k });
    }

    log::info!("Building community graph from {} cliques", cliques.len());

    let mut community = Graph::with_capacity(cliques.len());
    for clique in cliques {
        community.add_community_node(&clique.label(original), clique.clone());
    }

    let row = |i: usize| -> Vec<NodeId> {
        (0..cliques.len())
            .filter(|&j| j != i && shares_k_minus_1(&cliques[i], &cliques[j], k))
            .map(NodeId::new)
            .collect()
    };

    let rows: Vec<Vec<NodeId>> = if parallel {
        (0..cliques.len()).into_par_iter().map(row).collect()
    } else {
        (0..cliques.len()).map(row).collect()
    };

    for (i, neighbors) in rows.into_iter().enumerate() {
        for neighbor in neighbors {
            community.add_edge(NodeId::new(i), neighbor);
        }
    }

    log::info!(
        "Community graph has {} nodes and {} links",
        community.node_count(),
        community.edge_count() / 2
    );

    Ok(community)
}
