use serde::{Deserialize, Serialize};

use super::defaults;

/// Clique export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving exported artifacts.
    pub data_dir: String,
    /// Prefix prepended to every artifact file name.
    pub file_prefix: String,
    /// Minimum clique weight to export. `None` exports every clique.
    pub threshold: Option<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::DEFAULT_DATA_DIR.to_string(),
            file_prefix: defaults::DEFAULT_FILE_PREFIX.to_string(),
            threshold: None,
        }
    }
}
