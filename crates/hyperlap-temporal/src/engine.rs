use std::path::{Path, PathBuf};

use hyperlap_core::config::HyperlapConfig;
use hyperlap_core::errors::HyperlapResult;
use hyperlap_core::models::{Timestamp, WeightedCliques};
use tracing::info;

use crate::cliques::{self, CliquesBySnapshot};
use crate::edgelist::{self, ContactEvent};
use crate::export::{self, ExportParams};
use crate::snapshot::{self, AggregationResult};

/// Everything one run of the temporal pipeline produced.
#[derive(Debug, Clone)]
pub struct TemporalReport {
    /// Anchor of the last aggregation window.
    pub last_aggtime: Timestamp,
    /// Number of aggregated snapshots.
    pub snapshot_count: usize,
    /// Maximal cliques of every aggregated snapshot.
    pub cliques: CliquesBySnapshot,
    /// Clique → number of snapshots it was maximal in.
    pub weights: WeightedCliques,
    /// `weights` without cliques contained in another observed clique.
    pub maximal: WeightedCliques,
    /// Weighted mean size over `weights`.
    pub average_clique_size: f64,
}

/// Temporal clique pipeline: aggregation → extraction → weighting →
/// maximality filter → optional export.
pub struct TemporalEngine {
    config: HyperlapConfig,
}

impl TemporalEngine {
    pub fn new(config: HyperlapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HyperlapConfig {
        &self.config
    }

    /// Aggregate events into snapshots using the configured window.
    pub fn aggregate<I>(&self, events: I, source_name: &str) -> HyperlapResult<AggregationResult>
    where
        I: IntoIterator<Item = ContactEvent>,
    {
        snapshot::aggregate(events, &self.config.aggregation, source_name)
    }

    /// Run the pipeline over in-memory events.
    pub fn run<I>(&self, events: I, source_name: &str) -> HyperlapResult<TemporalReport>
    where
        I: IntoIterator<Item = ContactEvent>,
    {
        let aggregation = self.aggregate(events, source_name)?;
        Ok(self.analyze(&aggregation))
    }

    /// Run the pipeline over a `t i j` file.
    pub fn run_file(&self, path: &Path) -> HyperlapResult<TemporalReport> {
        let events = edgelist::read_file(path)?;
        self.run(events, &path.display().to_string())
    }

    /// Clique extraction, weighting, and filtering over aggregated snapshots.
    pub fn analyze(&self, aggregation: &AggregationResult) -> TemporalReport {
        let _span = hyperlap_observability::clique_span!(aggregation.aggregated.len()).entered();

        let per_snapshot = cliques::extract_cliques(&aggregation.aggregated);
        let weights = cliques::clique_weights(&per_snapshot);
        let maximal = cliques::clean_non_maximal(&weights);
        let average_clique_size = cliques::average_clique_size(&weights);

        info!(
            distinct = weights.len(),
            maximal = maximal.len(),
            average_clique_size,
            "clique weighting complete"
        );

        TemporalReport {
            last_aggtime: aggregation.last_aggtime,
            snapshot_count: aggregation.aggregated.len(),
            cliques: per_snapshot,
            weights,
            maximal,
            average_clique_size,
        }
    }

    /// Export params for `dataset` under this engine's window and export config.
    pub fn export_params(&self, dataset: &str) -> ExportParams {
        ExportParams::from_config(
            &self.config.export,
            dataset,
            self.config.aggregation.window_minutes,
        )
    }

    /// Write the report's maximal cliques for `dataset`. Returns the path.
    pub fn export(&self, report: &TemporalReport, dataset: &str) -> HyperlapResult<PathBuf> {
        export::save_cliques(&report.maximal, &self.export_params(dataset))
    }
}

impl Default for TemporalEngine {
    fn default() -> Self {
        Self::new(HyperlapConfig::default())
    }
}
