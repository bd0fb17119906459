/// Errors raised while writing or reading clique artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
}
