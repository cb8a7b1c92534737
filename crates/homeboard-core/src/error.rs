//! Core error types for homeboard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for homeboard-core.
///
/// Missing or corrupt persisted data is deliberately *not* represented here:
/// the store absorbs both into a seeded default document. Only genuine I/O or
/// serialization failures surface.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error at {path}: {message}")]
    Storage { path: PathBuf, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
