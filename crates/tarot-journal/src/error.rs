//! Error types for the reading journal.

use thiserror::Error;

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;

/// Errors that can occur while storing, importing or exporting readings.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Reading or writing durable storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding history or preferences failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An import document does not have the archive shape.
    #[error("invalid import format: {0}")]
    InvalidImportFormat(String),

    /// A storage backend refused the operation.
    #[error("storage error: {0}")]
    Store(String),

    /// Draw engine error.
    #[error("{0}")]
    Core(#[from] tarot_core::CoreError),
}
