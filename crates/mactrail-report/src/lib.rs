//! # mactrail-report
//!
//! Render a consolidated, annotated timeline as a standalone HTML
//! document. Three views over the same engine output:
//!
//! - **Suspicious** -- flagged records only, path + findings
//! - **Files** -- every record's full per-file timeline
//! - **Events** -- the raw, unconsolidated event list
//!
//! View selection happens here; the engine's output feeds all three
//! without modification.

use chrono::{DateTime, Utc};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use mactrail_core::{FileRecord, FileTable, RawEvent};

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// View label not one of suspicious/files/events
    #[error("unknown report view: {0:?} (expected suspicious, files, or events)")]
    UnknownView(String),

    /// Filesystem failure writing the report
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the report being written
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Which presentation mode to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportView {
    /// Flagged records only
    #[default]
    Suspicious,
    /// Full per-file timeline
    Files,
    /// Raw event list
    Events,
}

impl ReportView {
    /// Page heading for this view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Suspicious => "Suspicious Files",
            Self::Files => "Full File Timeline",
            Self::Events => "Raw Timeline Events",
        }
    }
}

impl FromStr for ReportView {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suspicious" => Ok(Self::Suspicious),
            "files" => Ok(Self::Files),
            "events" => Ok(Self::Events),
            _ => Err(ReportError::UnknownView(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspicious => f.write_str("suspicious"),
            Self::Files => f.write_str("files"),
            Self::Events => f.write_str("events"),
        }
    }
}

const PAGE_STYLE: &str = "\
body {font-family: Arial, sans-serif; background: #f5f6f7; padding: 30px}\n\
h1 {text-align: center}\n\
.section {background: white; padding: 20px; margin-bottom: 25px; border-radius: 8px}\n\
table {width: 100%; border-collapse: collapse; font-size: 13px}\n\
th {background: #111; color: white; padding: 8px; text-align: left}\n\
td {padding: 6px; border-bottom: 1px solid #ddd}\n\
.bad {color: #c0392b; font-weight: bold}\n";

/// Render one view as a complete HTML document.
#[must_use]
pub fn render(view: ReportView, events: &[RawEvent], table: &FileTable) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>mactrail report</title>\n<style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", view.title()));
    html.push_str("<div class=\"section\">\n<table>\n");

    match view {
        ReportView::Suspicious => render_suspicious(&mut html, table),
        ReportView::Files => render_files(&mut html, table),
        ReportView::Events => render_events(&mut html, events),
    }

    html.push_str("</table>\n</div>\n</body>\n</html>\n");
    html
}

/// Render a view and write it to `path`.
pub fn write_report(
    path: impl AsRef<Path>,
    view: ReportView,
    events: &[RawEvent],
    table: &FileTable,
) -> Result<()> {
    let path = path.as_ref();
    let html = render(view, events, table);
    std::fs::write(path, html).map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), %view, "report written");
    Ok(())
}

fn render_suspicious(html: &mut String, table: &FileTable) {
    html.push_str("<tr><th>Path</th><th>Flags</th></tr>\n");
    for record in table.values().filter(|r| r.suspicious) {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"bad\">{}</td></tr>\n",
            escape(&record.path),
            escape(&join_flags(record)),
        ));
    }
}

fn render_files(html: &mut String, table: &FileTable) {
    html.push_str(
        "<tr><th>Path</th><th>CRTIME</th><th>MTIME</th><th>ATIME</th>\
         <th>CTIME</th><th>Deleted</th><th>Flags</th></tr>\n",
    );
    for record in table.values() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td></tr>\n",
            escape(&record.path),
            fmt_time(record.crtime),
            fmt_time(record.mtime),
            fmt_time(record.atime),
            fmt_time(record.ctime),
            record.deleted,
            escape(&join_flags(record)),
        ));
    }
}

fn render_events(html: &mut String, events: &[RawEvent]) {
    html.push_str(
        "<tr><th>Time</th><th>Type</th><th>Path</th><th>Partition</th>\
         <th>Deleted</th></tr>\n",
    );
    for event in events {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            fmt_time(Some(event.time)),
            event.kind,
            escape(&event.path),
            escape(&event.partition),
            event.deleted,
        ));
    }
}

fn join_flags(record: &FileRecord) -> String {
    record
        .flags
        .iter()
        .map(|flag| flag.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_default()
}

/// Minimal HTML entity escaping for untrusted path/label strings.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mactrail_core::{Anomaly, TimestampKind};

    fn fixture() -> (Vec<RawEvent>, FileTable) {
        let time = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let event = RawEvent {
            time,
            kind: TimestampKind::Atime,
            path: "/tmp/<evil>&file".into(),
            partition: "part0".into(),
            inode: 1,
            size: 10,
            deleted: true,
        };

        let mut flagged = FileRecord::seeded_from(&event);
        flagged.atime = Some(time);
        flagged.flags = vec![Anomaly::DeletedFileAccessed];
        flagged.suspicious = true;

        let clean_event = RawEvent {
            path: "/home/ok.txt".into(),
            deleted: false,
            ..event.clone()
        };
        let mut clean = FileRecord::seeded_from(&clean_event);
        clean.mtime = Some(time);

        let mut table = FileTable::new();
        table.insert(flagged.path.clone(), flagged);
        table.insert(clean.path.clone(), clean);

        (vec![event, clean_event], table)
    }

    #[test]
    fn suspicious_view_includes_only_flagged_records() {
        let (events, table) = fixture();
        let html = render(ReportView::Suspicious, &events, &table);

        assert!(html.contains("Suspicious Files"));
        assert!(html.contains("Deleted file accessed"));
        assert!(!html.contains("/home/ok.txt"));
    }

    #[test]
    fn files_view_lists_every_record_with_empty_absent_slots() {
        let (events, table) = fixture();
        let html = render(ReportView::Files, &events, &table);

        assert!(html.contains("/home/ok.txt"));
        assert!(html.contains("<th>CRTIME</th>"));
        // Clean record has no crtime; its row starts with an empty cell.
        assert!(html.contains("<tr><td>/home/ok.txt</td><td></td>"));
    }

    #[test]
    fn events_view_lists_raw_rows() {
        let (events, table) = fixture();
        let html = render(ReportView::Events, &events, &table);

        assert!(html.contains("Raw Timeline Events"));
        assert!(html.contains("ATIME"));
        assert_eq!(html.matches("<tr><td>2023-01-01").count(), events.len());
    }

    #[test]
    fn paths_are_html_escaped() {
        let (events, table) = fixture();
        let html = render(ReportView::Suspicious, &events, &table);

        assert!(html.contains("/tmp/&lt;evil&gt;&amp;file"));
        assert!(!html.contains("<evil>"));
    }

    #[test]
    fn view_labels_round_trip() {
        for view in [ReportView::Suspicious, ReportView::Files, ReportView::Events] {
            assert_eq!(view.to_string().parse::<ReportView>().ok(), Some(view));
        }
        assert!("pdf".parse::<ReportView>().is_err());
    }
}
