use super::{ExportError, InputError};

/// Top-level error for every hyperlap operation.
#[derive(Debug, thiserror::Error)]
pub enum HyperlapError {
    #[error("input error: {0}")]
    InputError(#[from] InputError),

    #[error("export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type HyperlapResult<T> = Result<T, HyperlapError>;
