use crate::constants;

// Aggregation
pub const DEFAULT_WINDOW_MINUTES: f64 = constants::DEFAULT_WINDOW_MINUTES;
pub const DEFAULT_KEEP_ORIGINALS: bool = false;

// Export
pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_FILE_PREFIX: &str = constants::DEFAULT_EXPORT_PREFIX;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
