//! Candidate generation: every distinct (k-1)-combination of a neighbor list

use std::collections::HashSet;
use crate::clique::{Candidate, CliqueKey};
use crate::graph::NodeId;

/// Generate all (k-1)-node combinations of `nodes`.
///
/// `nodes` is normally the neighbor list of an anchor node; each combination,
/// together with the anchor, is a possible k-clique. The head of the list is
/// removed and the tail solved recursively; the head is then substituted into
/// every position of every tail combination, skipping combinations whose member
/// set was already produced.
///
/// Results are ordered newest first: the combinations built at this level in
/// reverse order of construction, followed by the tail's combinations.
///
/// Returns nothing for `k < 2` or when fewer than k-1 nodes are given.
pub fn clique_candidates(k: usize, nodes: &[NodeId]) -> Vec<Candidate> {
    if k < 2 || nodes.len() < k - 1 {
        return Vec::new();
    }
    if nodes.len() == k - 1 {
        return vec![nodes.to_vec()];
    }

    let Some((&head, tail)) = nodes.split_first() else {
        return Vec::new();
    };
    let rest = clique_candidates(k, tail);

    let mut seen: HashSet<CliqueKey> = rest.iter().map(|c| CliqueKey::of(c)).collect();
    let mut fresh = Vec::new();

    for combination in &rest {
        for position in 0..combination.len() {
            let mut candidate = combination.clone();
            candidate[position] = head;

            if seen.insert(CliqueKey::of(&candidate)) {
                fresh.push(candidate);
            }
        }
    }

    fresh.reverse();
    fresh.extend(rest);
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(range: std::ops::Range<u32>) -> Vec<NodeId> {
        range.map(NodeId).collect()
    }

    fn binomial(n: usize, r: usize) -> usize {
        if r > n {
            return 0;
        }
        (0..r).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn degenerate_inputs() {
        assert!(clique_candidates(1, &ids(0..4)).is_empty());
        assert!(clique_candidates(0, &ids(0..4)).is_empty());
        assert!(clique_candidates(4, &ids(0..2)).is_empty());
        assert!(clique_candidates(3, &[]).is_empty());
        assert_eq!(clique_candidates(3, &ids(0..2)), vec![ids(0..2)]);
    }

    #[test]
    fn neighbors_of_v5() {
        // v5 in the model graph has neighbors v3, v4, v6, v7
        let (v3, v4, v6, v7) = (NodeId(3), NodeId(4), NodeId(6), NodeId(7));
        let candidates = clique_candidates(3, &[v3, v4, v6, v7]);
        assert_eq!(
            candidates,
            vec![
                vec![v3, v7],
                vec![v6, v3],
                vec![v3, v4],
                vec![v6, v4],
                vec![v4, v7],
                vec![v6, v7],
            ]
        );
    }

    #[test]
    fn pairs_for_k_equal_two() {
        let candidates = clique_candidates(2, &ids(0..3));
        assert_eq!(candidates, vec![vec![NodeId(0)], vec![NodeId(1)], vec![NodeId(2)]]);
    }

    proptest! {
        #[test]
        fn yields_every_combination_once(n in 0usize..9, k in 2usize..6) {
            let nodes = ids(0..n as u32);
            let candidates = clique_candidates(k, &nodes);

            prop_assert_eq!(candidates.len(), binomial(n, k - 1));
            for candidate in &candidates {
                prop_assert_eq!(candidate.len(), k - 1);
            }

            let distinct: HashSet<CliqueKey> =
                candidates.iter().map(|c| CliqueKey::of(c)).collect();
            prop_assert_eq!(distinct.len(), candidates.len());
            for key in &distinct {
                prop_assert!(key.members().windows(2).all(|w| w[0] != w[1]));
            }
        }
    }
}
