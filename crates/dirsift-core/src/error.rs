/// Fatal error taxonomy for the scanning engine.
///
/// Per-entry I/O failures during a scan are deliberately NOT represented
/// here: they are swallowed by the engine, counted in
/// `ScanResult::error_count`, and never retried. Only pre-scan validation
/// failures and a root that cannot be traversed at all abort a run.
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan before or at its very start.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("incorrect path — `{0}` does not exist")]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("incorrect path — `{0}` should be a directory")]
    RootNotDirectory(PathBuf),

    /// The root directory itself could not be opened for traversal.
    /// Failures *below* the root are recoverable; this one is fatal.
    #[error("cannot traverse `{path}`: {source}")]
    RootTraversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A negative size threshold was supplied.
    #[error("size threshold must be non-negative, got {0} GiB")]
    InvalidThreshold(f64),

    /// The scan was cancelled before completion; partial results are
    /// discarded rather than returned as if they were complete.
    #[error("scan cancelled")]
    Cancelled,
}

/// Errors raised while loading or validating the configuration file.
/// Always fatal and always pre-scan.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config must define at least one searchable type")]
    NoCategories,

    #[error("duplicate searchable type name `{0}`")]
    DuplicateName(String),

    #[error("searchable type `{0}` has an empty name or tag")]
    EmptyField(String),

    #[error("directory for output path `{0}` does not exist")]
    MissingOutputDirectory(PathBuf),

    #[error("no write access to `{0}`")]
    NotWritable(PathBuf),
}
