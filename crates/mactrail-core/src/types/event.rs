//! Raw timeline events as delivered by acquisition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TimelineError;

/// The four timestamp kinds a filesystem entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimestampKind {
    /// Creation (birth) time
    Crtime,
    /// Last content modification time
    Mtime,
    /// Last access time
    Atime,
    /// Last metadata change time
    Ctime,
}

impl TimestampKind {
    /// All kinds, in the slot order used by record fields and reports.
    pub const ALL: [Self; 4] = [Self::Crtime, Self::Mtime, Self::Atime, Self::Ctime];

    /// Canonical uppercase label, as written in the timeline CSV.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crtime => "CRTIME",
            Self::Mtime => "MTIME",
            Self::Atime => "ATIME",
            Self::Ctime => "CTIME",
        }
    }
}

impl FromStr for TimestampKind {
    type Err = TimelineError;

    /// Parse a kind label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRTIME" => Ok(Self::Crtime),
            "MTIME" => Ok(Self::Mtime),
            "ATIME" => Ok(Self::Atime),
            "CTIME" => Ok(Self::Ctime),
            _ => Err(TimelineError::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed timestamp for one filesystem entry.
///
/// Events are produced once by acquisition and never mutated. An event
/// with no valid time is never constructed; unparseable times are
/// dropped at ingestion before they reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Absolute UTC instant of the observation
    pub time: DateTime<Utc>,
    /// Which of the four timestamps this event observes
    #[serde(rename = "type")]
    pub kind: TimestampKind,
    /// Filesystem path; the grouping key. Distinct strings are distinct
    /// files even when they resolve to the same inode.
    pub path: String,
    /// Descriptive label of the source volume
    pub partition: String,
    /// Filesystem entry address
    pub inode: u64,
    /// Byte size at observation time (0 if unknown)
    pub size: u64,
    /// True if the entry was unallocated when observed
    pub deleted: bool,
}
