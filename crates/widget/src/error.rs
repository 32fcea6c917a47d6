//! Error types for the widget runtime.

use thiserror::Error;

/// Errors produced by a [`StorageBackend`](crate::storage::StorageBackend).
///
/// The store itself never propagates these to the user: a failed read during
/// rehydration falls back to an empty cart and a failed write is logged and
/// otherwise ignored (the in-memory cart stays authoritative for the
/// session).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}
