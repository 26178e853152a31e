//! Store error types.

use thiserror::Error;

/// Errors that can occur in the state stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to access the backing file.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or parse a stored value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Key would escape the data directory.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Domain operation failed.
    #[error(transparent)]
    Commerce(#[from] vitrine_commerce::CommerceError),
}
