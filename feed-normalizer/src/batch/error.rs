//! Batch driver error types.

use std::fmt;

use serde::Serialize;

use crate::domain::NormalizeError;

/// Which input list a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Route,
    Trip,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Route => f.write_str("route"),
            RecordKind::Trip => f.write_str("trip"),
        }
    }
}

/// Errors that abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// A route record had no matching rule
    #[error("route #{index}: {source}")]
    Route {
        index: usize,
        #[source]
        source: NormalizeError,
    },

    /// A trip record had no matching rule
    #[error("trip #{index}: {source}")]
    Trip {
        index: usize,
        #[source]
        source: NormalizeError,
    },

    /// A worker task panicked or was cancelled
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl BatchError {
    pub(crate) fn record(kind: RecordKind, index: usize, source: NormalizeError) -> Self {
        match kind {
            RecordKind::Route => BatchError::Route { index, source },
            RecordKind::Trip => BatchError::Trip { index, source },
        }
    }
}

/// Errors reading or writing a feed file.
#[derive(Debug, thiserror::Error)]
pub enum FeedIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
