/// Errors raised while reading or aggregating a contact edge stream.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("empty edge stream from {source_name}: no initial timestamp")]
    EmptyStream { source_name: String },

    #[error("malformed edge record at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid aggregation window: {minutes} minutes")]
    InvalidWindow { minutes: f64 },
}
