//! Deduplicated accumulation of cliques found from different anchors

use std::collections::HashSet;
use crate::clique::{Clique, CliqueKey};

/// Global clique list with set-based deduplication.
///
/// Cliques are kept in first-discovery order. A clique whose member set is
/// already present is skipped, whatever order its members are stored in.
#[derive(Debug, Clone, Default)]
pub struct CliqueSet {
    cliques: Vec<Clique>,
    index: HashSet<CliqueKey>,
}

impl CliqueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clique unless its member set is already recorded
    pub fn insert(&mut self, clique: Clique) -> bool {
        if !self.index.insert(clique.key()) {
            return false;
        }
        self.cliques.push(clique);
        true
    }

    /// Fold `incoming` into the set and return how many cliques were new.
    ///
    /// Merging the same cliques again adds nothing.
    pub fn merge<I>(&mut self, incoming: I) -> usize
    where
        I: IntoIterator<Item = Clique>,
    {
        let mut added = 0;
        for clique in incoming {
            if self.insert(clique) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, clique: &Clique) -> bool {
        self.index.contains(&clique.key())
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    pub fn as_slice(&self) -> &[Clique] {
        &self.cliques
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clique> {
        self.cliques.iter()
    }

    pub fn into_vec(self) -> Vec<Clique> {
        self.cliques
    }
}

impl FromIterator<Clique> for CliqueSet {
    fn from_iter<I: IntoIterator<Item = Clique>>(iter: I) -> Self {
        let mut set = CliqueSet::new();
        set.merge(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CliqueSet {
    type Item = &'a Clique;
    type IntoIter = std::slice::Iter<'a, Clique>;

    fn into_iter(self) -> Self::IntoIter {
        self.cliques.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;
    use proptest::prelude::*;

    fn clique(ids: &[u32]) -> Clique {
        Clique::new(ids.iter().copied().map(NodeId).collect())
    }

    #[test]
    fn skips_permuted_duplicates() {
        let mut set = CliqueSet::new();
        assert_eq!(set.merge(vec![clique(&[1, 2, 3]), clique(&[3, 4, 5])]), 2);
        assert_eq!(set.merge(vec![clique(&[3, 2, 1]), clique(&[4, 5, 6])]), 1);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&clique(&[5, 3, 4])));
        assert_eq!(set.as_slice()[0].members(), &[NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn empty_sides() {
        let mut set = CliqueSet::new();
        assert_eq!(set.merge(Vec::new()), 0);
        assert!(set.is_empty());

        assert_eq!(set.merge(vec![clique(&[1, 2])]), 1);
        assert_eq!(set.merge(Vec::new()), 0);
        assert_eq!(set.into_vec().len(), 1);
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(
            lists in prop::collection::vec(
                prop::collection::vec(prop::collection::hash_set(0u32..6, 3), 0..6),
                0..5,
            )
        ) {
            let mut set = CliqueSet::new();
            for list in &lists {
                set.merge(list.iter().map(|members| {
                    Clique::new(members.iter().copied().map(NodeId).collect())
                }));
            }

            let keys: HashSet<CliqueKey> = set.iter().map(Clique::key).collect();
            prop_assert_eq!(keys.len(), set.len());

            let snapshot: Vec<Clique> = set.as_slice().to_vec();
            prop_assert_eq!(set.merge(snapshot.clone()), 0);
            prop_assert_eq!(set.as_slice(), &snapshot[..]);
        }
    }
}
