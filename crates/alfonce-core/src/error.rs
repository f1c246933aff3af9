//! Storage error type
//!
//! Every storage operation reports failure through `StorageError` instead of
//! swallowing it; the caller decides whether the user should hear about it.

use thiserror::Error;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persistence backend cannot be reached (no window, storage disabled)
    #[error("persistent storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the operation (quota exceeded, security error)
    #[error("backend failed for key `{key}`: {message}")]
    Backend { key: String, message: String },

    /// The value could not be encoded as JSON
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored JSON does not decode into the requested type
    #[error("failed to decode `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Slideshow slot outside `slideshowImage0..6`
    #[error("slideshow slot {0} out of range")]
    InvalidSlot(usize),

    /// A record referenced by id does not exist under its key
    #[error("not found: {0}")]
    NotFound(String),
}

impl StorageError {
    pub fn backend(key: &str, message: impl Into<String>) -> Self {
        StorageError::Backend {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// True when the value still lives in the session-only memory copy.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, StorageError::Unavailable(_) | StorageError::Backend { .. })
    }
}
