//! k-clique discovery
//!
//! For every anchor node the distinct neighbors are expanded into all
//! (k-1)-combinations ([`candidates`]), the fully connected ones are turned
//! into cliques together with the anchor ([`verify`]) and the per-anchor
//! results are folded into one duplicate-free list ([`merge`]).

pub mod candidates;
pub mod verify;
pub mod merge;

use std::hash::{Hash, Hasher};
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use crate::error::{CpmError, Result};
use crate::graph::{Graph, NodeId};

pub use candidates::clique_candidates;
pub use merge::CliqueSet;
pub use verify::verify_candidates;

/// A tentative group of k-1 neighbors of an anchor node
pub type Candidate = Vec<NodeId>;

/// Order-independent identity of a node group: its members, sorted
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CliqueKey(Vec<NodeId>);

impl CliqueKey {
    pub fn of(members: &[NodeId]) -> Self {
        let mut sorted = members.to_vec();
        sorted.sort_unstable();
        CliqueKey(sorted)
    }

    pub fn members(&self) -> &[NodeId] {
        &self.0
    }
}

/// k pairwise connected nodes.
///
/// Two cliques compare equal when they have the same members, regardless of
/// the order the members are stored in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clique {
    members: Vec<NodeId>,
}

impl Clique {
    pub fn new(members: Vec<NodeId>) -> Self {
        Self { members }
    }

    /// Members in the order they were discovered
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    pub fn key(&self) -> CliqueKey {
        CliqueKey::of(&self.members)
    }

    /// Member labels in stored order
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.members.iter().map(|&id| graph.label(id)).collect()
    }

    /// Member labels joined with `,`, used as the community node label
    pub fn label(&self, graph: &Graph) -> String {
        self.labels(graph).join(",")
    }

    /// Check that this is a k-clique of `graph`: k distinct members, every pair
    /// adjacent in both directions.
    pub fn validate(&self, graph: &Graph, k: usize) -> Result<()> {
        if self.members.len() != k {
            return Err(CpmError::InvariantViolation {
                reason: format!(
                    "clique {{{}}} has {} members, expected {}",
                    self.label(graph),
                    self.members.len(),
                    k
                ),
            });
        }
        if !self.members.iter().all_unique() {
            return Err(CpmError::InvariantViolation {
                reason: format!("clique {{{}}} repeats a member", self.label(graph)),
            });
        }
        if let Some((a, b)) = self
            .members
            .iter()
            .tuple_combinations()
            .find(|&(&a, &b)| !graph.is_adjacent(a, b))
        {
            return Err(CpmError::InvariantViolation {
                reason: format!(
                    "clique {{{}}}: {} and {} are not adjacent",
                    self.label(graph),
                    graph.label(*a),
                    graph.label(*b)
                ),
            });
        }
        Ok(())
    }
}

impl PartialEq for Clique {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Clique {}

impl Hash for Clique {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Find the k-cliques that contain `anchor`
pub fn cliques_for_anchor(graph: &Graph, anchor: NodeId, k: usize) -> Result<Vec<Clique>> {
    let neighbors = graph.distinct_neighbors(anchor);
    let candidates = clique_candidates(k, &neighbors);
    let cliques = verify_candidates(graph, anchor, &candidates)?;

    log::debug!(
        "{}: {} neighbors, {} candidates, {} cliques",
        graph.label(anchor),
        neighbors.len(),
        candidates.len(),
        cliques.len()
    );

    Ok(cliques)
}

/// Find every k-clique of `graph`, each exactly once.
///
/// Anchors are processed in node order. With `parallel`, the per-anchor work
/// runs on the rayon pool; the results are still merged in anchor order, so
/// the output is identical to a sequential run.
pub fn find_k_cliques(graph: &Graph, k: usize, parallel: bool) -> Result<CliqueSet> {
    if k < 2 {
        return Err(CpmError::InvalidCliqueSize { k });
    }

    log::info!(
        "Finding {}-cliques in graph with {} nodes ({})",
        k,
        graph.node_count(),
        if parallel { "parallel" } else { "sequential" }
    );

    let per_anchor: Vec<Vec<Clique>> = if parallel {
        (0..graph.node_count())
            .into_par_iter()
            .map(|index| cliques_for_anchor(graph, NodeId::new(index), k))
            .collect::<Result<Vec<_>>>()?
    } else {
        graph
            .node_ids()
            .map(|anchor| cliques_for_anchor(graph, anchor, k))
            .collect::<Result<Vec<_>>>()?
    };

    let mut cliques = CliqueSet::new();
    for found in per_anchor {
        cliques.merge(found);
    }

    log::info!("Found {} distinct {}-cliques", cliques.len(), k);

    Ok(cliques)
}
