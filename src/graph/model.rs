//! Label-addressed adjacency-list graph

use std::collections::HashMap;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::clique::Clique;
use crate::error::{CpmError, Result};

/// Index of a node inside the graph that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A vertex with its outgoing neighbor list
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique label within the owning graph
    label: String,

    /// Neighbor references in insertion order
    neighbors: Vec<NodeId>,

    /// The clique this node stands for; only set in community graphs
    clique: Option<Clique>,
}

impl Node {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn clique(&self) -> Option<&Clique> {
        self.clique.as_ref()
    }
}

/// Graph owning all of its nodes.
///
/// Edges are stored per node as a list of outgoing neighbor ids. Nothing is
/// symmetrised implicitly: an undirected edge is two [`Graph::add_edge`] calls.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node arena; a `NodeId` is an index into it
    nodes: Vec<Node>,

    /// Mapping from labels to node ids
    id_to_index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            id_to_index: HashMap::with_capacity(capacity),
        }
    }

    /// Register a node under a label that must not be in use yet
    pub fn add_node(&mut self, label: &str) -> Result<NodeId> {
        if self.id_to_index.contains_key(label) {
            return Err(CpmError::DuplicateLabel {
                label: label.to_string(),
            });
        }

        let id = self.push_node(label, None);
        self.id_to_index.insert(label.to_string(), id);
        Ok(id)
    }

    /// Register a community node standing for `clique`.
    ///
    /// Community nodes are identified by their clique, so the label need not
    /// be unique; `find_by_label` resolves to the first node carrying it.
    pub fn add_community_node(&mut self, label: &str, clique: Clique) -> NodeId {
        let id = self.push_node(label, Some(clique));
        self.id_to_index.entry(label.to_string()).or_insert(id);
        id
    }

    fn push_node(&mut self, label: &str, clique: Option<Clique>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            label: label.to_string(),
            neighbors: Vec::new(),
            clique,
        });
        id
    }

    /// Append `to` to the neighbor list of `from` (one direction only)
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].neighbors.push(to);
    }

    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.id_to_index.get(label).copied()
    }

    /// Check whether `to` is stored in the neighbor list of `from`
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes[from.index()].neighbors.contains(&to)
    }

    /// Check the edge in both directions
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.is_connected(a, b) && self.is_connected(b, a)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].label
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].neighbors
    }

    /// Neighbors of `id` without repeats and without `id` itself, in first-seen order
    pub fn distinct_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut distinct = Vec::with_capacity(self.neighbors(id).len());
        for &neighbor in self.neighbors(id) {
            if neighbor != id && !distinct.contains(&neighbor) {
                distinct.push(neighbor);
            }
        }
        distinct
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored (directed) neighbor entries
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }
}
