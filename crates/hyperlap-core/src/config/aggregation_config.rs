use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::SECONDS_PER_MINUTE;

/// How the aggregation anchor moves when a record crosses the current window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceMode {
    /// Advance by exactly one window per crossing record, even when the
    /// record lies several windows ahead.
    #[default]
    SingleStep,
    /// Advance by as many whole windows as needed to contain the record.
    CatchUp,
}

/// Snapshot aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Window width in minutes, possibly fractional. `delta_t` is this times
    /// 60 seconds.
    pub window_minutes: f64,
    /// Also keep one non-aggregated snapshot per raw timestamp.
    pub keep_originals: bool,
    /// Anchor advancement rule.
    pub advance: AdvanceMode,
}

impl AggregationConfig {
    /// Window width in timestamp units (seconds).
    pub fn delta_t(&self) -> f64 {
        SECONDS_PER_MINUTE * self.window_minutes
    }

    /// Whether the window is a finite, strictly positive width.
    pub fn has_valid_window(&self) -> bool {
        self.window_minutes.is_finite() && self.window_minutes > 0.0
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window_minutes: defaults::DEFAULT_WINDOW_MINUTES,
            keep_originals: defaults::DEFAULT_KEEP_ORIGINALS,
            advance: AdvanceMode::default(),
        }
    }
}
