/// Error taxonomy for a scan.
///
/// Only configuration problems surface as `ScanError`. Per-entry failures
/// (unreadable directories, missing metadata, unreadable timestamps) are
/// absorbed by the collector and reported through
/// [`ScanProgress::Error`](crate::scanner::progress::ScanProgress::Error).
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The configured root does not exist or is not a directory.
    #[error("scan root {} does not exist or is not a directory", path.display())]
    InvalidRoot { path: PathBuf },

    /// Threshold text is not a non-negative integer.
    #[error("similarity threshold must be a non-negative integer, got {value:?}")]
    InvalidThreshold { value: String },

    /// Minimum size (in MB) is negative, NaN or infinite.
    #[error("minimum file size must be a finite, non-negative number of MB, got {value}")]
    InvalidMinimumSize { value: f64 },

    /// The background scan thread could not be started.
    #[error("failed to spawn scan thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The background scan thread terminated without producing a result.
    #[error("scan thread terminated unexpectedly")]
    WorkerPanicked,
}

/// Returned by the `FromStr` impls of the option enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
