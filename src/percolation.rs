//! End-to-end clique percolation

use crate::clique::{find_k_cliques, Clique};
use crate::cluster::{build_community_graph, extract_communities, Community};
use crate::config::Config;
use crate::error::Result;
use crate::graph::Graph;

/// Everything a percolation run produces
#[derive(Debug, Clone)]
pub struct Percolation {
    /// Clique size the run used
    pub k: usize,

    /// Distinct k-cliques in discovery order
    pub cliques: Vec<Clique>,

    /// One node per clique, linked when two cliques share k-1 nodes
    pub community_graph: Graph,

    /// Connected components of the community graph
    pub communities: Vec<Community>,
}

/// Run clique percolation on `graph`
pub fn percolate(graph: &Graph, config: &Config) -> Result<Percolation> {
    config.validate()?;

    let cliques = find_k_cliques(graph, config.k, config.parallel)?.into_vec();
    let community_graph = build_community_graph(graph, &cliques, config.k, config.parallel)?;
    let communities = extract_communities(graph, &community_graph, config.min_community_size)?;

    Ok(Percolation {
        k: config.k,
        cliques,
        community_graph,
        communities,
    })
}
