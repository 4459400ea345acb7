use thiserror::Error;

pub type StoreResult<T> = core::result::Result<T, StorageError>;

/// Failures at the storage seam. These never cross into callers of the
/// higher-level stores; `Persisted` and the gates contain them by logging
/// and degrading to memory-only behavior.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
