use thiserror::Error;

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Errors that can occur when constructing timeline data
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Timestamp kind label not one of CRTIME/MTIME/ATIME/CTIME
    #[error("unknown timestamp kind: {0:?}")]
    UnknownKind(String),
}
