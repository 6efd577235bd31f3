//! Consolidated per-file records and detection findings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::event::{RawEvent, TimestampKind};

/// A detection finding. Serializes as its presentation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anomaly {
    /// Access timestamp earlier than creation
    #[serde(rename = "Access before creation")]
    AccessBeforeCreation,
    /// Modification timestamp earlier than creation
    #[serde(rename = "Modified before creation")]
    ModifiedBeforeCreation,
    /// Three or more timestamps clustered inside a two-second window
    #[serde(rename = "Rapid timestamp activity (<2s)")]
    RapidTimestampActivity,
    /// Access timestamp on an unallocated entry
    #[serde(rename = "Deleted file accessed")]
    DeletedFileAccessed,
}

impl Anomaly {
    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AccessBeforeCreation => "Access before creation",
            Self::ModifiedBeforeCreation => "Modified before creation",
            Self::RapidTimestampActivity => "Rapid timestamp activity (<2s)",
            Self::DeletedFileAccessed => "Deleted file accessed",
        }
    }
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry's consolidated timeline, keyed by path.
///
/// Identity fields (`partition`, `inode`, `size`, `deleted`) come from
/// whichever event the active [`SeedPolicy`](crate::SeedPolicy) selects.
/// A timestamp slot is `Some` iff at least one event of that kind was
/// observed for the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Filesystem path; the grouping key
    pub path: String,
    /// Descriptive label of the source volume
    pub partition: String,
    /// Filesystem entry address
    pub inode: u64,
    /// Byte size at observation time
    pub size: u64,
    /// True if the entry was unallocated when observed
    pub deleted: bool,

    /// Creation (birth) time, if observed
    #[serde(default)]
    pub crtime: Option<DateTime<Utc>>,
    /// Last content modification time, if observed
    #[serde(default)]
    pub mtime: Option<DateTime<Utc>>,
    /// Last access time, if observed
    #[serde(default)]
    pub atime: Option<DateTime<Utc>>,
    /// Last metadata change time, if observed
    #[serde(default)]
    pub ctime: Option<DateTime<Utc>>,

    /// Findings in rule order; empty until detection runs
    #[serde(default)]
    pub flags: Vec<Anomaly>,
    /// True iff `flags` is non-empty
    #[serde(default)]
    pub suspicious: bool,
}

impl FileRecord {
    /// Create a record seeded from an event's identity fields, with all
    /// timestamp slots empty.
    #[must_use]
    pub fn seeded_from(event: &RawEvent) -> Self {
        Self {
            path: event.path.clone(),
            partition: event.partition.clone(),
            inode: event.inode,
            size: event.size,
            deleted: event.deleted,
            crtime: None,
            mtime: None,
            atime: None,
            ctime: None,
            flags: Vec::new(),
            suspicious: false,
        }
    }

    /// Overwrite the identity fields from a later event for the same
    /// path. `path` itself is the key and never changes.
    pub fn reseed_from(&mut self, event: &RawEvent) {
        self.partition.clone_from(&event.partition);
        self.inode = event.inode;
        self.size = event.size;
        self.deleted = event.deleted;
    }

    /// The timestamp slot for `kind`.
    #[must_use]
    pub const fn timestamp(&self, kind: TimestampKind) -> Option<DateTime<Utc>> {
        match kind {
            TimestampKind::Crtime => self.crtime,
            TimestampKind::Mtime => self.mtime,
            TimestampKind::Atime => self.atime,
            TimestampKind::Ctime => self.ctime,
        }
    }

    /// Set the timestamp slot for `kind`, overwriting any prior value.
    pub fn set_timestamp(&mut self, kind: TimestampKind, time: DateTime<Utc>) {
        match kind {
            TimestampKind::Crtime => self.crtime = Some(time),
            TimestampKind::Mtime => self.mtime = Some(time),
            TimestampKind::Atime => self.atime = Some(time),
            TimestampKind::Ctime => self.ctime = Some(time),
        }
    }

    /// All populated timestamps, in slot order.
    #[must_use]
    pub fn present_timestamps(&self) -> Vec<DateTime<Utc>> {
        TimestampKind::ALL
            .iter()
            .filter_map(|&kind| self.timestamp(kind))
            .collect()
    }
}

/// Consolidated records keyed by path. `BTreeMap` keeps iteration in
/// path order, which is the order reporting wants.
pub type FileTable = BTreeMap<String, FileRecord>;
