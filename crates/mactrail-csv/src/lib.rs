//! # mactrail-csv
//!
//! The timeline interchange format: a delimited tabular file with one
//! row per observed timestamp, columns `time`, `type`, `path`,
//! `partition`, `inode`, `size`, `deleted`.
//!
//! Reading validates the header once and fails fast with every missing
//! column by name; after that, nothing in a row is fatal. Rows whose
//! `time` does not parse (or whose `type` is not one of the four
//! timestamp kinds) are dropped with a debug log -- they cannot
//! contribute to any file record. Column order is free.

mod error;
mod read;
mod write;

pub use error::{CsvError, Result};
pub use read::{read_events, read_events_from_path, REQUIRED_COLUMNS};
pub use write::{write_events, write_events_to_path};
