//! List-of-lists export of weighted cliques.
//!
//! Artifact names encode the aggregation window, the weight threshold and the
//! dataset: `{prefix}{minutes}min_cliques_thr{threshold|None}_{dataset}.json`.

use std::path::{Path, PathBuf};

use hyperlap_core::config::ExportConfig;
use hyperlap_core::constants::EXPORT_EXTENSION;
use hyperlap_core::artifact;
use hyperlap_core::errors::HyperlapResult;
use hyperlap_core::models::{Clique, WeightedCliques};
use tracing::info;

use crate::cliques::select_by_threshold;

/// Everything that determines where and what an export writes.
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub data_dir: PathBuf,
    pub file_prefix: String,
    pub dataset: String,
    /// Rendered with `Display`, so whole minutes carry no fractional part.
    pub window_minutes: f64,
    pub threshold: Option<usize>,
}

impl ExportParams {
    /// Params for `dataset` at `window_minutes`, the rest taken from `config`.
    pub fn from_config(config: &ExportConfig, dataset: &str, window_minutes: f64) -> Self {
        Self {
            data_dir: PathBuf::from(&config.data_dir),
            file_prefix: config.file_prefix.clone(),
            dataset: dataset.to_string(),
            window_minutes,
            threshold: config.threshold,
        }
    }

    pub fn file_name(&self) -> String {
        let threshold = self
            .threshold
            .map_or_else(|| "None".to_string(), |thr| thr.to_string());
        format!(
            "{}{}min_cliques_thr{}_{}.{}",
            self.file_prefix, self.window_minutes, threshold, self.dataset, EXPORT_EXTENSION
        )
    }

    pub fn path(&self) -> PathBuf {
        self.data_dir.join(self.file_name())
    }
}

/// Write the cliques passing `params.threshold` as a JSON list of node lists.
/// Returns the written path.
pub fn save_cliques(weights: &WeightedCliques, params: &ExportParams) -> HyperlapResult<PathBuf> {
    let path = params.path();
    let lists: Vec<Vec<u64>> = select_by_threshold(weights, params.threshold)
        .into_iter()
        .map(Clique::to_labels)
        .collect();

    artifact::write_node_lists(&path, &lists)?;

    info!(path = %path.display(), cliques = lists.len(), "cliques exported");
    Ok(path)
}

/// Read an exported artifact back as canonical cliques, in file order.
pub fn load_cliques(path: &Path) -> HyperlapResult<Vec<Clique>> {
    let lists = artifact::read_node_lists(path)?;
    Ok(lists.into_iter().map(|l| l.into_iter().collect()).collect())
}
