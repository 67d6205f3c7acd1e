//! Community analysis module

pub mod community_graph;
pub mod detection;
pub mod metrics;

use serde::{Serialize, Deserialize};
use crate::graph::NodeId;

pub use community_graph::build_community_graph;
pub use detection::extract_communities;

/// A k-clique community: a connected component of the community graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Unique identifier for this community
    pub id: u32,

    /// Community-graph nodes (one per clique) in this component
    pub cliques: Vec<NodeId>,

    /// Original-graph nodes covered by the cliques, sorted
    pub members: Vec<NodeId>,

    /// Number of original-graph members
    pub size: usize,

    /// Density: adjacent member pairs / possible member pairs
    pub density: f32,

    /// Members with the highest degree inside the community
    pub central_nodes: Vec<NodeId>,
}
