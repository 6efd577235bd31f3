//! Validating timeline reader.

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use mactrail_core::{RawEvent, TimestampKind};

use crate::error::{CsvError, Result};

/// Columns every timeline CSV must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] =
    ["time", "type", "path", "partition", "inode", "size", "deleted"];

/// Resolved column positions for one file's header.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    time: usize,
    kind: usize,
    path: usize,
    partition: usize,
    inode: usize,
    size: usize,
    deleted: usize,
}

impl ColumnMap {
    /// Resolve the required columns against a header row, reporting
    /// every absent column at once.
    fn from_header(header: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            header
                .iter()
                .position(|field| field.trim().eq_ignore_ascii_case(name))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CsvError::MissingColumns { columns: missing });
        }

        // All positions verified present above.
        let at = |name: &str| position(name).unwrap_or(0);
        Ok(Self {
            time: at("time"),
            kind: at("type"),
            path: at("path"),
            partition: at("partition"),
            inode: at("inode"),
            size: at("size"),
            deleted: at("deleted"),
        })
    }
}

/// Read raw events from a timeline CSV.
///
/// The header is validated before any row is touched; a missing column
/// aborts the whole run with [`CsvError::MissingColumns`]. Individual
/// rows are never fatal after that: an unparseable time or unknown
/// timestamp kind drops the row.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<RawEvent>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let header = rdr.headers()?.clone();
    let columns = ColumnMap::from_header(&header)?;

    let mut events = Vec::new();
    let mut dropped = 0usize;

    for row in rdr.records() {
        let row = row?;
        match parse_row(columns, &row) {
            Some(event) => events.push(event),
            None => {
                dropped += 1;
                debug!(row = ?row, "dropping malformed timeline row");
            }
        }
    }

    debug!(events = events.len(), dropped, "timeline loaded");
    Ok(events)
}

/// [`read_events`] from a file on disk.
pub fn read_events_from_path(path: impl AsRef<Path>) -> Result<Vec<RawEvent>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| CsvError::io(path.display().to_string(), e))?;
    read_events(file)
}

/// Parse one data row. `None` means the row cannot contribute to any
/// file record and is dropped.
fn parse_row(columns: ColumnMap, row: &StringRecord) -> Option<RawEvent> {
    let time = parse_time(row.get(columns.time)?)?;
    let kind: TimestampKind = row.get(columns.kind)?.parse().ok()?;
    let path = row.get(columns.path)?;
    if path.is_empty() {
        return None;
    }

    Some(RawEvent {
        time,
        kind,
        path: path.to_string(),
        partition: row.get(columns.partition).unwrap_or_default().to_string(),
        inode: parse_count(row.get(columns.inode)),
        size: parse_count(row.get(columns.size)),
        deleted: parse_deleted(row.get(columns.deleted).unwrap_or_default()),
    })
}

/// Parse a timestamp: RFC 3339 (offset or `Z`), falling back to a
/// space-separated naive form read as UTC.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Lenient non-negative integer: identity fields are descriptive, so a
/// malformed value degrades to "unknown" (0) rather than dropping the
/// row's timestamp evidence.
fn parse_count(field: Option<&str>) -> u64 {
    field
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

/// "true"/"1"/"yes" in any case parse as deleted; everything else does not.
fn parse_deleted(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
