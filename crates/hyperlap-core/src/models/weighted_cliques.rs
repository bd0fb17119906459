use std::collections::btree_map;
use std::collections::BTreeMap;

use super::Clique;

/// Multiset of cliques: clique → number of snapshots in which it was observed
/// as a maximal clique.
///
/// Every stored weight is at least 1. Iteration is in ascending clique order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedCliques {
    weights: BTreeMap<Clique, usize>,
}

impl WeightedCliques {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `clique`.
    pub fn observe(&mut self, clique: Clique) {
        *self.weights.entry(clique).or_insert(0) += 1;
    }

    /// Store `clique` with an explicit weight. A zero weight is ignored.
    pub fn insert(&mut self, clique: Clique, weight: usize) {
        if weight > 0 {
            self.weights.insert(clique, weight);
        }
    }

    pub fn weight(&self, clique: &Clique) -> Option<usize> {
        self.weights.get(clique).copied()
    }

    pub fn contains(&self, clique: &Clique) -> bool {
        self.weights.contains_key(clique)
    }

    /// Number of distinct cliques.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> usize {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Clique, usize> {
        self.weights.iter()
    }

    pub fn cliques(&self) -> btree_map::Keys<'_, Clique, usize> {
        self.weights.keys()
    }
}

impl FromIterator<Clique> for WeightedCliques {
    fn from_iter<I: IntoIterator<Item = Clique>>(iter: I) -> Self {
        let mut weighted = Self::new();
        for clique in iter {
            weighted.observe(clique);
        }
        weighted
    }
}

impl<'a> IntoIterator for &'a WeightedCliques {
    type Item = (&'a Clique, &'a usize);
    type IntoIter = btree_map::Iter<'a, Clique, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.iter()
    }
}

impl IntoIterator for WeightedCliques {
    type Item = (Clique, usize);
    type IntoIter = btree_map::IntoIter<Clique, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.into_iter()
    }
}
