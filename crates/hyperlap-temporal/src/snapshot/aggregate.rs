//! Snapshot aggregation: group a contact stream into fixed-width windows
//! anchored at the first observed timestamp.

use std::path::Path;

use hyperlap_core::config::{AdvanceMode, AggregationConfig};
use hyperlap_core::errors::{HyperlapResult, InputError};
use hyperlap_core::models::Timestamp;
use tracing::{debug, info};

use super::{Snapshot, Snapshots};
use crate::edgelist::{self, ContactEvent};

/// Output of one aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// One snapshot per window, keyed by the window anchor.
    pub aggregated: Snapshots,
    /// One snapshot per raw timestamp, when `keep_originals` is set.
    pub originals: Option<Snapshots>,
    /// Anchor of the last window reached.
    pub last_aggtime: Timestamp,
}

/// Aggregate `events` (in arrival order) into windows of `config.delta_t()`.
///
/// Under [`AdvanceMode::SingleStep`] a record at or beyond the current window
/// end moves the anchor forward by exactly one width, however far ahead the
/// record is. [`AdvanceMode::CatchUp`] moves it by as many widths as needed.
pub fn aggregate<I>(
    events: I,
    config: &AggregationConfig,
    source_name: &str,
) -> HyperlapResult<AggregationResult>
where
    I: IntoIterator<Item = ContactEvent>,
{
    if !config.has_valid_window() {
        return Err(InputError::InvalidWindow {
            minutes: config.window_minutes,
        }
        .into());
    }
    let delta_t = config.delta_t();
    let _span = hyperlap_observability::aggregation_span!(source_name, delta_t).entered();

    let mut events = events.into_iter().peekable();
    let t0 = match events.peek() {
        Some(first) => first.t.value(),
        None => {
            return Err(InputError::EmptyStream {
                source_name: source_name.to_string(),
            }
            .into())
        }
    };

    let mut aggtime = t0;
    let mut aggregated = Snapshots::new();
    let mut originals = config.keep_originals.then(Snapshots::new);
    let mut records = 0usize;

    for event in events {
        records += 1;
        if let Some(originals) = originals.as_mut() {
            originals
                .entry(event.t)
                .or_insert_with(Snapshot::new)
                .add_edge(event.i, event.j);
        }

        aggtime = advance(aggtime, event.t.value(), delta_t, config.advance);
        aggregated
            .entry(Timestamp(aggtime))
            .or_insert_with(Snapshot::new)
            .add_edge(event.i, event.j);
    }

    debug!(records, "aggregation consumed records");
    info!(
        last_aggtime = aggtime,
        windows = aggregated.len(),
        "aggregation complete"
    );

    Ok(AggregationResult {
        aggregated,
        originals,
        last_aggtime: Timestamp(aggtime),
    })
}

/// Read a `t i j` file and aggregate it.
pub fn aggregate_file(path: &Path, config: &AggregationConfig) -> HyperlapResult<AggregationResult> {
    let events = edgelist::read_file(path)?;
    aggregate(events, config, &path.display().to_string())
}

/// New anchor for a record at `t`.
fn advance(aggtime: f64, t: f64, delta_t: f64, mode: AdvanceMode) -> f64 {
    if t < aggtime + delta_t {
        return aggtime;
    }
    match mode {
        AdvanceMode::SingleStep => aggtime + delta_t,
        AdvanceMode::CatchUp => {
            let mut next = aggtime + ((t - aggtime) / delta_t).floor() * delta_t;
            // Float rounding can leave the record one window short.
            while t >= next + delta_t {
                next += delta_t;
            }
            next
        }
    }
}
