//! Error types for the pack layer.

use thiserror::Error;

/// Result type for pack operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur when opening, mutating, or serializing a data pack.
///
/// Only structural failures surface here. Per-document anomalies (duplicate
/// writes, malformed entries read back) are logged and absorbed so one bad
/// document never aborts work on the rest of the archive.
#[derive(Debug, Error)]
pub enum PackError {
    /// The byte stream is not a readable zip container. Fatal for the
    /// affected pack instance.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// Encoding the in-memory archive back to bytes failed. Fatal for the
    /// save attempt; any previously saved file is left untouched.
    #[error("archive serialization failed: {0}")]
    SerializationFailed(String),

    /// The entity id is empty or not usable as an archive path segment.
    /// Rejected before the pack is touched.
    #[error("invalid entity id: {0:?}")]
    InvalidId(String),

    /// Filesystem error while loading or saving a pack file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
