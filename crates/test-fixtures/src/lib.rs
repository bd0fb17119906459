//! Bundled inputs for hyperlap tests and benches.
//!
//! `contacts/` holds `t i j` edge lists, `hypergraphs/` holds node-list
//! artifacts in the export format.

use std::path::{Path, PathBuf};

/// Absolute path of a bundled fixture, e.g. `contacts/classroom.dat`.
///
/// Resolved against this crate's manifest directory at compile time, so the
/// path is valid from any crate's tests or benches.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

/// Hypergraph fixture as a list of node lists.
///
/// # Panics
/// Panics if the fixture is missing or malformed.
pub fn load_edge_lists(relative_path: &str) -> Vec<Vec<u64>> {
    let path = fixture_path(relative_path);
    hyperlap_core::artifact::read_node_lists(&path)
        .unwrap_or_else(|e| panic!("bad hypergraph fixture {}: {e}", path.display()))
}
