//! Error types for local storage.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while reading or writing persisted blobs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A persisted blob exists but does not deserialize.
    #[error("stored value for '{key}' is corrupt: {reason}")]
    StorageCorrupt {
        /// Key of the unreadable blob.
        key: String,
        /// Deserializer message.
        reason: String,
    },

    /// A value could not be serialized for writing.
    #[error("could not encode value for '{key}': {reason}")]
    Encode {
        /// Key being written.
        key: String,
        /// Serializer message.
        reason: String,
    },

    /// The underlying key-value backend failed.
    #[error("storage I/O error for '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// The I/O failure.
        #[source]
        source: std::io::Error,
    },
}
