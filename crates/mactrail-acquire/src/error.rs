use std::path::Path;
use thiserror::Error;

/// Result type alias for acquisition operations
pub type Result<T> = std::result::Result<T, AcquireError>;

/// Errors that can occur while scanning a live tree
#[derive(Error, Debug)]
pub enum AcquireError {
    /// Scan root does not exist or is not a directory
    #[error("scan root not found: {0}")]
    RootNotFound(String),

    /// Metadata read failed for an entry
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the entry that failed
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AcquireError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
