//! # mactrail-acquire
//!
//! Live-tree acquisition: walk a mounted directory and emit one
//! [`RawEvent`](mactrail_core::RawEvent) per timestamp the filesystem
//! reports for each file. The adapter owns everything the engine must
//! not care about -- scan limits, partition labels, unreadable entries,
//! zero timestamps -- and hands the engine a time-sorted event list in
//! which every event carries a valid time by construction.
//!
//! Parsing disk images and unallocated entries is a different
//! acquisition component entirely; on a live tree every observed entry
//! is allocated, so `deleted` is always false here.

mod error;
mod scanner;

pub use error::{AcquireError, Result};
pub use scanner::{scan_tree, ScanConfig, DEFAULT_PARTITION_LABEL, DEFAULT_SCAN_LIMIT};
