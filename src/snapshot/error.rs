//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while exporting or reading snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
