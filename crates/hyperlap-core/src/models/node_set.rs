use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An immutable, order-independent set of nodes.
///
/// Members are stored sorted and deduplicated, so two sets built from the
/// same nodes in any order compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct NodeSet(Box<[NodeId]>);

/// A clique is a node set produced by maximal-clique enumeration.
pub type Clique = NodeSet;

impl NodeSet {
    pub fn new(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut nodes: Vec<NodeId> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();
        Self(nodes.into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Order of the set seen as a hyperedge: `len - 1`, or `None` when empty.
    pub fn order(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Members in ascending order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.binary_search(&node).is_ok()
    }

    /// `self ⊆ other`, by a linear merge over both sorted member lists.
    pub fn is_subset_of(&self, other: &NodeSet) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut theirs = other.0.iter();
        'outer: for mine in self.0.iter() {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// `self ⊂ other` (strict).
    pub fn is_proper_subset_of(&self, other: &NodeSet) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Members as raw integer labels.
    pub fn to_labels(&self) -> Vec<u64> {
        self.0.iter().map(|n| n.value()).collect()
    }
}

impl From<Vec<NodeId>> for NodeSet {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::new(nodes)
    }
}

impl From<NodeSet> for Vec<NodeId> {
    fn from(set: NodeSet) -> Self {
        set.0.into_vec()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl FromIterator<u64> for NodeSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(NodeId))
    }
}
