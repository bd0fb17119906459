/// Hyperlap version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds per aggregation minute. `delta_t = SECONDS_PER_MINUTE * window_minutes`.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Default aggregation window width in minutes.
pub const DEFAULT_WINDOW_MINUTES: f64 = 15.0;

/// Default prefix of exported clique artifacts.
pub const DEFAULT_EXPORT_PREFIX: &str = "25daysaggr_";

/// Extension of input edge-list files.
pub const EDGE_LIST_EXTENSION: &str = "dat";

/// Extension of exported clique artifacts.
pub const EXPORT_EXTENSION: &str = "json";
