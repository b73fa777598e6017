//! Unified error handling for the cart.
//!
//! The public cart operations never return these errors: `load`, `save`,
//! `mutate` and `render` log them and fall back to a safe state. The `try_*`
//! variants expose them to hosts that want to react.

use thiserror::Error;

/// Errors reported by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled or not reachable (private mode, sandboxed frame).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The write would exceed the storage quota.
    #[error("Storage quota exceeded")]
    QuotaExceeded,

    /// Any other backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// Reading or writing the storage slot failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A table template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
