//! Graph construction module

use crate::error::{CpmError, Result};
use crate::graph::{Graph, NodeId};

/// Builder for incrementally constructing a [`Graph`] by label
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
        }
    }

    /// Get or create a node for the given label
    pub fn get_or_create_node(&mut self, label: &str) -> Result<NodeId> {
        if let Some(id) = self.graph.find_by_label(label) {
            return Ok(id);
        }
        self.graph.add_node(label)
    }

    /// Declare a node that must not exist yet; `line` is reported on conflict
    pub fn declare_node(&mut self, label: &str, line: usize) -> Result<NodeId> {
        self.graph.add_node(label).map_err(|err| match err {
            CpmError::DuplicateLabel { label } => CpmError::DuplicateNode { line, label },
            other => other,
        })
    }

    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.graph.find_by_label(label)
    }

    /// Add a one-directional edge between two existing nodes.
    ///
    /// Returns `false` when the edge is a self-loop or already present; such
    /// edges are not stored.
    pub fn add_edge_ids(&mut self, from: NodeId, to: NodeId) -> bool {
        if from == to || self.graph.is_connected(from, to) {
            return false;
        }
        self.graph.add_edge(from, to);
        true
    }

    /// Add an edge from one node to another, creating either node as needed
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<&mut Self> {
        let from = self.get_or_create_node(from)?;
        let to = self.get_or_create_node(to)?;
        self.add_edge_ids(from, to);
        Ok(self)
    }

    /// Add both directions of an edge, creating either node as needed
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) -> Result<&mut Self> {
        let a = self.get_or_create_node(a)?;
        let b = self.get_or_create_node(b)?;
        self.add_edge_ids(a, b);
        self.add_edge_ids(b, a);
        Ok(self)
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}

/// Build an undirected graph from label pairs
pub fn from_undirected_edges<'a, I>(edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut builder = GraphBuilder::new();
    for (a, b) in edges {
        builder.add_undirected_edge(a, b)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_stored_once_per_direction() {
        let mut builder = GraphBuilder::with_capacity(3);
        builder
            .add_undirected_edge("a", "b")
            .unwrap()
            .add_undirected_edge("b", "a")
            .unwrap()
            .add_undirected_edge("a", "a")
            .unwrap();
        let graph = builder.build();

        let a = graph.find_by_label("a").unwrap();
        let b = graph.find_by_label("b").unwrap();
        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn declare_reports_line_of_duplicate() {
        let mut builder = GraphBuilder::new();
        builder.declare_node("v1", 1).unwrap();
        match builder.declare_node("v1", 4) {
            Err(CpmError::DuplicateNode { line, label }) => {
                assert_eq!(line, 4);
                assert_eq!(label, "v1");
            }
            other => panic!("expected duplicate node error, got {:?}", other),
        }
    }

    #[test]
    fn directed_edge_keeps_direction() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("x", "y").unwrap();
        let graph = builder.build();
        let x = graph.find_by_label("x").unwrap();
        let y = graph.find_by_label("y").unwrap();
        assert!(graph.is_connected(x, y));
        assert!(!graph.is_connected(y, x));
    }
}
