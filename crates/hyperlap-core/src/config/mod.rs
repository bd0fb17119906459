//! TOML configuration for the temporal clique pipeline and the overlap engine.
//!
//! Every section and field has a default, so an empty document is valid.

mod aggregation_config;
pub mod defaults;
mod export_config;
mod observability_config;
mod overlap_config;

pub use aggregation_config::{AdvanceMode, AggregationConfig};
pub use export_config::ExportConfig;
pub use observability_config::ObservabilityConfig;
pub use overlap_config::OverlapConfig;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperlapConfig {
    pub aggregation: AggregationConfig,
    pub export: ExportConfig,
    pub overlap: OverlapConfig,
    pub observability: ObservabilityConfig,
}

impl HyperlapConfig {
    /// Parse a TOML document. Missing sections fall back to their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &std::path::Path) -> crate::HyperlapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| crate::HyperlapError::ConfigError(e.to_string()))
    }
}
