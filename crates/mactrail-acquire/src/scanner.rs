//! Tree walking and per-file timestamp collection.

use chrono::{DateTime, TimeZone, Utc};
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};
use walkdir::WalkDir;

use mactrail_core::{RawEvent, TimestampKind};

use crate::error::{AcquireError, Result};

/// Default cap on the number of files examined in one scan.
pub const DEFAULT_SCAN_LIMIT: usize = 10_000;

/// Default volume label stamped on events from a live tree.
pub const DEFAULT_PARTITION_LABEL: &str = "Live Filesystem";

/// What to scan and how far.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the tree to walk
    pub root: PathBuf,
    /// Maximum number of files to examine
    pub limit: usize,
    /// Volume label stamped on every event
    pub partition_label: String,
}

impl ScanConfig {
    /// Config for `root` with the default limit and partition label.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            limit: DEFAULT_SCAN_LIMIT,
            partition_label: DEFAULT_PARTITION_LABEL.to_string(),
        }
    }
}

/// Walk the tree under `config.root` and collect timestamp events.
///
/// Files only, symlinks not followed, at most `config.limit` files
/// examined. Unreadable entries are skipped with a warning, never
/// fatal. The result is sorted by time ascending, the order the
/// downstream timeline file conventionally carries.
pub async fn scan_tree(config: &ScanConfig) -> Result<Vec<RawEvent>> {
    if !config.root.is_dir() {
        return Err(AcquireError::RootNotFound(
            config.root.display().to_string(),
        ));
    }

    let mut events = Vec::new();
    let mut examined = 0usize;

    for entry in WalkDir::new(&config.root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if examined >= config.limit {
            debug!(limit = config.limit, "scan limit reached");
            break;
        }
        examined += 1;

        match collect_file_events(entry.path(), &config.partition_label).await {
            Ok(mut file_events) => events.append(&mut file_events),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping file");
            }
        }
    }

    events.sort_by_key(|event| event.time);
    debug!(
        files = examined,
        events = events.len(),
        root = %config.root.display(),
        "scan complete"
    );

    Ok(events)
}

/// Collect up to four events for a single file, one per timestamp the
/// filesystem actually reports. A zero or absent timestamp never
/// becomes an event.
async fn collect_file_events(path: &Path, partition: &str) -> Result<Vec<RawEvent>> {
    let meta = tokio::fs::symlink_metadata(path)
        .await
        .map_err(|e| AcquireError::io(path, e))?;

    let path_str = path.display().to_string();
    let inode = meta.ino();
    let size = meta.len();

    let timestamps = [
        (TimestampKind::Atime, epoch_to_utc(meta.atime(), meta.atime_nsec())),
        (TimestampKind::Mtime, epoch_to_utc(meta.mtime(), meta.mtime_nsec())),
        (TimestampKind::Ctime, epoch_to_utc(meta.ctime(), meta.ctime_nsec())),
        (TimestampKind::Crtime, birth_time(&meta)),
    ];

    let mut events = Vec::with_capacity(4);
    for (kind, time) in timestamps {
        let Some(time) = time else { continue };
        events.push(RawEvent {
            time,
            kind,
            path: path_str.clone(),
            partition: partition.to_string(),
            inode,
            size,
            deleted: false,
        });
    }

    Ok(events)
}

/// Convert epoch seconds + nanos to `DateTime<Utc>`. Zero and negative
/// seconds are treated as "not recorded".
fn epoch_to_utc(secs: i64, nsecs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    Utc.timestamp_opt(secs, u32::try_from(nsecs).unwrap_or(0))
        .single()
}

/// Birth time (btime via statx), where the filesystem records one.
fn birth_time(meta: &Metadata) -> Option<DateTime<Utc>> {
    let created = meta.created().ok()?;
    let dur = created.duration_since(UNIX_EPOCH).ok()?;
    epoch_to_utc(i64::try_from(dur.as_secs()).ok()?, i64::from(dur.subsec_nanos()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tree(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(name), b"evidence").unwrap();
        }
    }

    #[tokio::test]
    async fn scan_emits_events_per_file() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), &["a.txt", "b.txt"]);

        let events = scan_tree(&ScanConfig::new(dir.path())).await.unwrap();

        // Every live file reports at least atime/mtime/ctime.
        assert!(events.len() >= 6);
        assert!(events.iter().all(|e| !e.deleted));
        assert!(events.iter().all(|e| e.partition == DEFAULT_PARTITION_LABEL));
        assert!(events
            .iter()
            .any(|e| e.kind == TimestampKind::Mtime && e.path.ends_with("a.txt")));
    }

    #[tokio::test]
    async fn events_are_time_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), &["a.txt", "b.txt", "c.txt"]);

        let events = scan_tree(&ScanConfig::new(dir.path())).await.unwrap();

        assert!(events.windows(2).all(|pair| pair[0].time <= pair[1].time));
    }

    #[tokio::test]
    async fn scan_limit_caps_examined_files() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), &["a", "b", "c", "d", "e"]);

        let mut config = ScanConfig::new(dir.path());
        config.limit = 2;
        let events = scan_tree(&config).await.unwrap();

        let mut paths: Vec<_> = events.iter().map(|e| e.path.clone()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 2);
    }

    #[tokio::test]
    async fn missing_root_is_an_error() {
        let err = scan_tree(&ScanConfig::new("/nonexistent/mactrail-test"))
            .await
            .unwrap_err();
        assert!(matches!(err, AcquireError::RootNotFound(_)));
    }

    #[test]
    fn zero_epoch_is_not_an_event() {
        assert_eq!(epoch_to_utc(0, 0), None);
        assert_eq!(epoch_to_utc(-5, 0), None);
        assert!(epoch_to_utc(1_672_531_200, 0).is_some());
    }
}
