//! Clique verification for the candidates of one anchor node

use itertools::Itertools;
use crate::clique::{Candidate, Clique};
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Turn every fully connected candidate into a clique with `anchor`.
///
/// A candidate qualifies when all of its member pairs are adjacent and every
/// member is adjacent to the anchor, adjacency being checked in both
/// directions. The anchor is stored last in each clique. Cliques come out in
/// reverse candidate order.
pub fn verify_candidates(
    graph: &Graph,
    anchor: NodeId,
    candidates: &[Candidate],
) -> Result<Vec<Clique>> {
    let mut cliques = Vec::new();

    for candidate in candidates.iter().rev() {
        if !is_complete(graph, anchor, candidate) {
            continue;
        }

        let mut members = Vec::with_capacity(candidate.len() + 1);
        members.extend_from_slice(candidate);
        members.push(anchor);

        let clique = Clique::new(members);
        clique.validate(graph, candidate.len() + 1)?;
        cliques.push(clique);
    }

    Ok(cliques)
}

fn is_complete(graph: &Graph, anchor: NodeId, candidate: &[NodeId]) -> bool {
    candidate
        .iter()
        .all(|&member| member != anchor && graph.is_adjacent(anchor, member))
        && candidate
            .iter()
            .tuple_combinations()
            .all(|(&a, &b)| graph.is_adjacent(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clique::clique_candidates;
    use crate::graph::builder::from_undirected_edges;

    #[test]
    fn keeps_only_connected_candidates() {
        // v5 with neighbors v3, v4, v6, v7 from the model graph
        let graph = from_undirected_edges([
            ("v3", "v4"),
            ("v3", "v5"),
            ("v4", "v5"),
            ("v4", "v6"),
            ("v4", "v7"),
            ("v5", "v6"),
            ("v5", "v7"),
            ("v6", "v7"),
        ])
        .unwrap();
        let id = |label: &str| graph.find_by_label(label).unwrap();
        let v5 = id("v5");

        let candidates = clique_candidates(3, &graph.distinct_neighbors(v5));
        assert_eq!(candidates.len(), 6);

        let cliques = verify_candidates(&graph, v5, &candidates).unwrap();
        let labels: Vec<String> = cliques.iter().map(|c| c.label(&graph)).collect();
        assert_eq!(labels, vec!["v6,v7,v5", "v4,v7,v5", "v6,v4,v5", "v3,v4,v5"]);

        for clique in &cliques {
            assert_eq!(*clique.members().last().unwrap(), v5);
        }
    }

    #[test]
    fn anchor_must_reach_members_both_ways() {
        let mut graph = Graph::new();
        let a = graph.add_node("a").unwrap();
        let b = graph.add_node("b").unwrap();
        let c = graph.add_node("c").unwrap();
        for (x, y) in [(a, b), (b, a), (a, c), (b, c), (c, b)] {
            graph.add_edge(x, y);
        }
        let cliques = verify_candidates(&graph, a, &[vec![b, c]]).unwrap();
        assert!(cliques.is_empty());
    }

    #[test]
    fn no_candidates_no_cliques() {
        let graph = from_undirected_edges([("a", "b")]).unwrap();
        let a = graph.find_by_label("a").unwrap();
        assert!(verify_candidates(&graph, a, &[]).unwrap().is_empty());
    }
}
