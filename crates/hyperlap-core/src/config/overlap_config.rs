use serde::{Deserialize, Serialize};

/// Inter-order overlap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Cap on the largest order considered. `None` uses the hypergraph's maximum.
    pub max_order: Option<usize>,
}
