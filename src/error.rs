//! Error types.

use thiserror::Error;

/// Result type for saver operations.
pub type Result<T> = std::result::Result<T, SaverError>;

/// Errors surfaced by savers and their storage backend.
#[derive(Debug, Error)]
pub enum SaverError {
    /// The wrapped saver failed to capture or persist a snapshot.
    #[error("Save error: {0}")]
    Save(String),

    /// Object storage rejected or failed an upload.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error reading a saved artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SaverError {
    /// Check if this is a storage backend error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
