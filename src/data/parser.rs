//! Graph definition file parsing
//!
//! One node per line: the node label, a colon, then the labels of its
//! neighbors separated by whitespace.
//!
//! ```text
//! v1: v2 v3
//! v2: v1 v3
//! v3: v1 v2
//! v4:
//! ```
//!
//! Labels consist of ASCII letters, digits and `_`. Blank lines and lines
//! starting with `#` are ignored. Every neighbor must be declared on a line
//! of its own somewhere in the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::config::SymmetryPolicy;
use crate::error::{CpmError, Result};
use crate::graph::algorithms::{asymmetric_edges, symmetrize};
use crate::graph::{Graph, GraphBuilder, NodeId};

/// A declared node and the raw neighbor labels of its line
struct PendingNeighbors {
    line: usize,
    node: NodeId,
    neighbors: Vec<String>,
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a graph definition from a reader.
///
/// On any error nothing is returned but the error; the graph is only handed
/// out once every line parsed and every neighbor resolved.
pub fn parse_graph_definition<R: BufRead>(reader: R, symmetry: SymmetryPolicy) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    let mut pending = Vec::new();

    // Pass 1: declare every node
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|err| CpmError::io("<graph definition>", err))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((label, rest)) = trimmed.split_once(':') else {
            return Err(CpmError::Syntax {
                line: line_no,
                content: line.clone(),
            });
        };
        let label = label.trim();
        if !is_valid_label(label) {
            return Err(CpmError::Syntax {
                line: line_no,
                content: line.clone(),
            });
        }

        let node = builder.declare_node(label, line_no)?;
        let neighbors: Vec<String> = rest.split_whitespace().map(String::from).collect();
        if !neighbors.is_empty() {
            pending.push(PendingNeighbors {
                line: line_no,
                node,
                neighbors,
            });
        }
    }

    // Pass 2: resolve neighbor labels
    for entry in pending {
        for label in &entry.neighbors {
            let Some(neighbor) = builder.find(label) else {
                return Err(CpmError::UndeclaredNeighbor {
                    line: entry.line,
                    label: label.clone(),
                });
            };
            if !builder.add_edge_ids(entry.node, neighbor) {
                log::warn!(
                    "line {}: skipping self-loop or repeated neighbor '{}'",
                    entry.line,
                    label
                );
            }
        }
    }

    let mut graph = builder.build();

    match symmetry {
        SymmetryPolicy::Repair => {
            let added = symmetrize(&mut graph);
            if added > 0 {
                log::warn!("Added {} missing reverse edges", added);
            }
        }
        SymmetryPolicy::Reject => {
            if let Some(&(from, to)) = asymmetric_edges(&graph).first() {
                return Err(CpmError::AsymmetricEdge {
                    from: graph.label(from).to_string(),
                    to: graph.label(to).to_string(),
                });
            }
        }
    }

    log::info!(
        "Parsed graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count() / 2
    );

    Ok(graph)
}

/// Parse a graph definition held in a string
pub fn parse_graph_str(text: &str, symmetry: SymmetryPolicy) -> Result<Graph> {
    parse_graph_definition(text.as_bytes(), symmetry)
}

/// Load and parse a graph definition file
pub fn load_graph_definition<P: AsRef<Path>>(path: P, symmetry: SymmetryPolicy) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading graph definition file: {}", path.display());

    let file = File::open(path).map_err(|err| CpmError::io(path, err))?;
    parse_graph_definition(BufReader::new(file), symmetry).map_err(|err| match err {
        CpmError::Io { source, .. } => CpmError::io(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_nodes_and_neighbors() {
        let graph = parse_graph_str(
            "v1: v2 v3\n\
             v2: v1   v3\n\
             \n\
             # isolated\n\
             v3:v1 v2\n\
             v4:\n",
            SymmetryPolicy::Reject,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 4);
        let id = |label: &str| graph.find_by_label(label).unwrap();
        assert_eq!(graph.neighbors(id("v1")), &[id("v2"), id("v3")]);
        assert_eq!(graph.neighbors(id("v2")), &[id("v1"), id("v3")]);
        assert!(graph.neighbors(id("v4")).is_empty());
    }

    #[test]
    fn syntax_error_reports_line() {
        match parse_graph_str("v1: v2\nv2 v1\n", SymmetryPolicy::Repair) {
            Err(CpmError::Syntax { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "v2 v1");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
        assert!(matches!(
            parse_graph_str("v-1: v2\n", SymmetryPolicy::Repair),
            Err(CpmError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn undeclared_neighbor_is_fatal() {
        match parse_graph_str("v1: v2\nv2: v1 v9\n", SymmetryPolicy::Repair) {
            Err(CpmError::UndeclaredNeighbor { line, label }) => {
                assert_eq!(line, 2);
                assert_eq!(label, "v9");
            }
            other => panic!("expected undeclared neighbor, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_declaration_is_fatal() {
        let err = parse_graph_str("v1: v2\nv2:\nv1:\n", SymmetryPolicy::Repair).unwrap_err();
        assert!(matches!(err, CpmError::DuplicateNode { line: 3, .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn one_way_edges_repaired_or_rejected() {
        let text = "a: b c\nb: a\nc:\n";

        let graph = parse_graph_str(text, SymmetryPolicy::Repair).unwrap();
        let a = graph.find_by_label("a").unwrap();
        let c = graph.find_by_label("c").unwrap();
        assert!(graph.is_adjacent(a, c));

        match parse_graph_str(text, SymmetryPolicy::Reject) {
            Err(CpmError::AsymmetricEdge { from, to }) => {
                assert_eq!(from, "a");
                assert_eq!(to, "c");
            }
            other => panic!("expected asymmetric edge, got {:?}", other),
        }
    }

    #[test]
    fn self_loops_and_repeats_are_dropped() {
        let graph = parse_graph_str("a: a b b\nb: a\n", SymmetryPolicy::Reject).unwrap();
        let a = graph.find_by_label("a").unwrap();
        let b = graph.find_by_label("b").unwrap();
        assert_eq!(graph.neighbors(a), &[b]);
    }

    #[test]
    fn empty_input_is_empty_graph() {
        let graph = parse_graph_str("", SymmetryPolicy::Repair).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_graph_definition("/nonexistent/graph.txt", SymmetryPolicy::Repair)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("/nonexistent/graph.txt"));
    }
}
