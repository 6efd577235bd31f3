//! Canonical timeline writer.

use std::io::Write;
use std::path::Path;
use tracing::debug;

use mactrail_core::RawEvent;

use crate::error::{CsvError, Result};
use crate::read::REQUIRED_COLUMNS;

/// Write events as a timeline CSV: canonical column order, RFC 3339
/// times, lowercase booleans.
pub fn write_events<W: Write>(writer: W, events: &[RawEvent]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(REQUIRED_COLUMNS)?;
    for event in events {
        wtr.write_record([
            event.time.to_rfc3339(),
            event.kind.to_string(),
            event.path.clone(),
            event.partition.clone(),
            event.inode.to_string(),
            event.size.to_string(),
            event.deleted.to_string(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    debug!(events = events.len(), "timeline written");
    Ok(())
}

/// [`write_events`] to a file on disk, creating or truncating it.
pub fn write_events_to_path(path: impl AsRef<Path>, events: &[RawEvent]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .map_err(|e| CsvError::io(path.display().to_string(), e))?;
    write_events(file, events)
}
