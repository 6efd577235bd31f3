//! # mactrail-core
//!
//! Timeline consolidation and anomaly detection for filesystem forensics.
//!
//! A disk walk produces one raw event per observed timestamp (creation,
//! modification, access, metadata change). This crate collapses those
//! events into one record per path and evaluates each record against a
//! fixed set of temporal-consistency rules, flagging patterns consistent
//! with timestamp tampering or post-deletion access.
//!
//! ## Data Flow
//!
//! ```text
//! Phase 1: Consolidation
//!   consolidate() groups RawEvents by path
//!   -> FileTable (one FileRecord per path, four optional timestamp slots)
//!
//! Phase 2: Detection
//!   detect() evaluates four rules per record, independently:
//!     1. access before creation
//!     2. modification before creation
//!     3. rapid timestamp activity (>=3 timestamps inside 2s)
//!     4. deleted file with an access timestamp
//!   -> same FileTable, flags + suspicious populated
//! ```
//!
//! Both phases are pure, synchronous, and total over their inputs:
//! an absent timestamp makes a rule inapplicable, never a failure.
//! Acquisition, persistence, and rendering live in the sibling adapter
//! crates; nothing here performs I/O.

pub mod consolidate;
pub mod detect;
mod error;
pub mod types;

pub use consolidate::{consolidate, consolidate_with, SeedPolicy, DEFAULT_SEED_POLICY};
pub use detect::{detect, evaluate};
pub use error::{Result, TimelineError};
pub use types::*;
