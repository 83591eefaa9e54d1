/// Errors from snapshot store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to atomically replace the snapshot file.
    #[error("could not replace snapshot file: {0}")]
    Replace(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
