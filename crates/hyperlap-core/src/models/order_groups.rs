use std::collections::BTreeMap;

use super::NodeSet;

/// Hyperedge member sets partitioned by order (`size - 1`).
///
/// Covers every order in `[min_order, max_order]`; orders without edges map
/// to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderGroups {
    min_order: usize,
    max_order: usize,
    groups: BTreeMap<usize, Vec<NodeSet>>,
}

impl OrderGroups {
    /// Empty groups for every order in `[min_order, max_order]`.
    pub fn with_range(min_order: usize, max_order: usize) -> Self {
        let groups = (min_order..=max_order).map(|order| (order, Vec::new())).collect();
        Self {
            min_order,
            max_order,
            groups,
        }
    }

    /// Append `members` to the group of `order`. Returns `false` (and drops
    /// the edge) when `order` is outside the covered range.
    pub fn push(&mut self, order: usize, members: NodeSet) -> bool {
        match self.groups.get_mut(&order) {
            Some(group) => {
                group.push(members);
                true
            }
            None => false,
        }
    }

    /// Edges of exactly `order`. Empty for orders outside the range.
    pub fn get(&self, order: usize) -> &[NodeSet] {
        self.groups.get(&order).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn min_order(&self) -> usize {
        self.min_order
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Total number of grouped edges.
    pub fn edge_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[NodeSet])> {
        self.groups.iter().map(|(order, edges)| (*order, edges.as_slice()))
    }
}
