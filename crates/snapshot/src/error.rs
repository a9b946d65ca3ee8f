//! Error types for the snapshot model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building, loading or reading snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A lookup for a key the collection stage never populated.
    #[error("Snapshot key not found: {0}")]
    MissingKey(String),

    /// A key that does not follow the dotted naming convention.
    #[error("Invalid snapshot key: {0:?}")]
    InvalidKey(String),

    /// A value that is not an unsigned 256-bit integer.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// A snapshot that lacks keys its schema declares.
    #[error("Snapshot is missing {} declared key(s): {}", .missing.len(), .missing.join(", "))]
    IncompleteSnapshot { missing: Vec<String> },

    /// Before and after snapshots were taken over different key sets.
    #[error(
        "Snapshots cover different keys (only before: [{}], only after: [{}])",
        .only_before.join(", "),
        .only_after.join(", ")
    )]
    MismatchedKeys {
        only_before: Vec<String>,
        only_after: Vec<String>,
    },

    /// The after snapshot is not later than the before snapshot.
    #[error("After snapshot (block {after}) is not later than before snapshot (block {before})")]
    NotChronological { before: u64, after: u64 },

    /// Reading a snapshot file failed.
    #[error("Failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A snapshot document could not be parsed.
    #[error("Failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
