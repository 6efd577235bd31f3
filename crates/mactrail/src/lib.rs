//! Filesystem timeline consolidation and anomaly detection for digital
//! forensics.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mactrail::{consolidate, detect};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load the raw timeline a disk walk produced.
//!     let events = mactrail::csv::read_events_from_path("timeline.csv")?;
//!
//!     // One record per path, then the four tamper rules per record.
//!     let mut table = consolidate(&events);
//!     detect(&mut table);
//!
//!     for record in table.values().filter(|r| r.suspicious) {
//!         println!("{}: {:?}", record.path, record.flags);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine ([`consolidate`] / [`detect`]) is pure and synchronous;
//! acquisition, CSV persistence, and HTML rendering are adapters that
//! can be swapped without touching it.

// Re-export the engine surface
pub use mactrail_core::*;

// Re-export the adapters under their own namespaces
pub use mactrail_acquire as acquire;
pub use mactrail_csv as csv;
pub use mactrail_report as report;

// Re-export runtime and serialization for convenience
pub use chrono;
pub use serde;
pub use serde_json;
pub use tokio;
