//! Event consolidation -- collapse raw events into one record per path.

use tracing::debug;

use crate::types::{FileRecord, FileTable, RawEvent};

/// Which event's identity fields (`partition`, `inode`, `size`,
/// `deleted`) a record keeps when a path has several events.
///
/// Timestamp slots are unaffected: the last event of each kind always
/// wins, whatever the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Keep the first event encountered in input order.
    #[default]
    FirstSeen,
    /// Keep the last event encountered in input order.
    LastSeen,
}

/// The policy [`consolidate`] applies: first occurrence in input order.
pub const DEFAULT_SEED_POLICY: SeedPolicy = SeedPolicy::FirstSeen;

/// Group raw events into one [`FileRecord`] per distinct path, using
/// [`DEFAULT_SEED_POLICY`] for the shared identity fields.
///
/// Input order is arbitrary; acquisition happens to deliver events
/// time-sorted but nothing here relies on it. Empty input yields an
/// empty table.
#[must_use]
pub fn consolidate(events: &[RawEvent]) -> FileTable {
    consolidate_with(events, DEFAULT_SEED_POLICY)
}

/// [`consolidate`] with an explicit seed policy.
#[must_use]
pub fn consolidate_with(events: &[RawEvent], policy: SeedPolicy) -> FileTable {
    let mut table = FileTable::new();

    for event in events {
        let record = table
            .entry(event.path.clone())
            .or_insert_with(|| FileRecord::seeded_from(event));

        if policy == SeedPolicy::LastSeen {
            record.reseed_from(event);
        }

        // Duplicate (path, kind) pairs are unexpected from acquisition
        // but tolerated: most recently processed wins.
        record.set_timestamp(event.kind, event.time);
    }

    debug!(
        events = events.len(),
        files = table.len(),
        "consolidated timeline"
    );

    table
}
