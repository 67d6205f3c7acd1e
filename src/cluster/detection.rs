//! Community detection: connected components of the community graph

use std::collections::{BTreeSet, HashMap};
use petgraph::unionfind::UnionFind;
use rayon::prelude::*;
use crate::cluster::Community;
use crate::cluster::metrics::{calculate_density, identify_central_nodes};
use crate::error::{CpmError, Result};
use crate::graph::{Graph, NodeId};

/// Group community-graph nodes into connected components.
///
/// Each component lists its community-graph node ids in ascending order;
/// components are ordered by their smallest node id.
pub fn connected_components(community_graph: &Graph) -> Vec<Vec<NodeId>> {
    let node_count = community_graph.node_count();
    let mut sets = UnionFind::<usize>::new(node_count);

    for src in community_graph.node_ids() {
        for &dst in community_graph.neighbors(src) {
            sets.union(src.index(), dst.index());
        }
    }

    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut root_to_component: HashMap<usize, usize> = HashMap::new();
    for (index, root) in sets.into_labeling().into_iter().enumerate() {
        let slot = *root_to_component.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(NodeId::new(index));
    }

    components
}

/// Extract k-clique communities from a community graph.
///
/// A community is the union of the original-graph members of the cliques in
/// one connected component. Communities with fewer than `min_community_size`
/// members are dropped. The result is sorted by size (largest first), then by
/// smallest member id, and numbered in that order.
pub fn extract_communities(
    original: &Graph,
    community_graph: &Graph,
    min_community_size: usize,
) -> Result<Vec<Community>> {
    log::info!(
        "Extracting communities from community graph with {} nodes",
        community_graph.node_count()
    );

    let mut grouped: Vec<(Vec<NodeId>, Vec<NodeId>)> = Vec::new();
    for component in connected_components(community_graph) {
        let mut members = BTreeSet::new();
        for &node in &component {
            let clique = community_graph.node(node).clique().ok_or_else(|| {
                CpmError::InvariantViolation {
                    reason: format!(
                        "community graph node '{}' has no associated clique",
                        community_graph.label(node)
                    ),
                }
            })?;
            members.extend(clique.members().iter().copied());
        }
        if members.len() >= min_community_size {
            grouped.push((component, members.into_iter().collect()));
        }
    }

    let mut communities: Vec<Community> = grouped
        .into_par_iter()
        .map(|(cliques, members)| Community {
            id: 0,
            size: members.len(),
            density: calculate_density(original, &members),
            central_nodes: identify_central_nodes(original, &members),
            cliques,
            members,
        })
        .collect();

    communities.sort_by(|a, b| {
        b.size
            .cmp(&a.size)
            .then_with(|| a.members.first().cmp(&b.members.first()))
    });
    for (id, community) in communities.iter_mut().enumerate() {
        community.id = id as u32;
    }

    log::info!(
        "Found {} communities with {} or more members",
        communities.len(),
        min_community_size
    );

    Ok(communities)
}
