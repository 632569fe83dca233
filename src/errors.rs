//! Error types for snapshot loading and report configuration.
//!
//! The engine itself is total over well-formed snapshots: empty histories are
//! skipped, zero denominators are guarded. Failures only arise at the data
//! boundary (unreadable or malformed snapshot and option files), and those
//! propagate to the caller unretried — the computation is deterministic, so a
//! retry on the same input cannot succeed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaremapError {
    #[error("failed to read snapshot {}", path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot {}: {source}", path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed snapshot: {0}")]
    SnapshotDecode(#[from] serde_json::Error),

    #[error("failed to read report options {}", path.display())]
    OptionsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed report options {}: {source}", path.display())]
    OptionsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid report options: {0}")]
    InvalidOptions(String),
}
