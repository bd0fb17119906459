//! Clique structure of the snapshot series: per-snapshot maximal cliques,
//! their weighted multiset across snapshots, and the maximality filter.

pub mod extract;
pub mod maximal;
pub mod weights;

pub use extract::{extract_cliques, maximal_cliques, CliquesBySnapshot};
pub use maximal::clean_non_maximal;
pub use weights::{average_clique_size, clique_weights, select_by_threshold};
