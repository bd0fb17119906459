//! Span definitions per pipeline stage: aggregation, clique extraction, overlap.

/// Create a snapshot aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($source:expr, $delta_t:expr) => {
        tracing::info_span!("hyperlap.aggregation", source = %$source, delta_t = $delta_t)
    };
}

/// Create a clique extraction/weighting span.
#[macro_export]
macro_rules! clique_span {
    ($snapshot_count:expr) => {
        tracing::info_span!("hyperlap.cliques", snapshot_count = $snapshot_count)
    };
}

/// Create an inter-order overlap span.
#[macro_export]
macro_rules! overlap_span {
    ($edge_count:expr, $max_order:expr) => {
        tracing::info_span!("hyperlap.overlap", edge_count = $edge_count, max_order = ?$max_order)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AGGREGATION: &str = "hyperlap.aggregation";
    pub const CLIQUES: &str = "hyperlap.cliques";
    pub const OVERLAP: &str = "hyperlap.overlap";
}
