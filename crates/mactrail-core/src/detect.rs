//! Anomaly detection -- temporal-consistency rules over file records.

use chrono::Duration;
use tracing::debug;

use crate::types::{Anomaly, FileRecord, FileTable};

/// Minimum number of populated timestamp slots for the rapid-activity
/// rule to apply.
const RAPID_ACTIVITY_MIN_TIMESTAMPS: usize = 3;

/// Evaluate the detection rules against one record.
///
/// Returns findings in presentation order. Pure and total: an absent
/// timestamp makes a rule inapplicable, never a failure. Two records
/// never influence each other.
#[must_use]
pub fn evaluate(record: &FileRecord) -> Vec<Anomaly> {
    let mut flags = Vec::new();

    // Rule 1: access before creation.
    if let (Some(crtime), Some(atime)) = (record.crtime, record.atime) {
        if atime < crtime {
            flags.push(Anomaly::AccessBeforeCreation);
        }
    }

    // Rule 2: modification before creation.
    if let (Some(crtime), Some(mtime)) = (record.crtime, record.mtime) {
        if mtime < crtime {
            flags.push(Anomaly::ModifiedBeforeCreation);
        }
    }

    // Rule 3: rapid timestamp activity. Three or more timestamps inside
    // a strict two-second window is a known signature of bulk copy or
    // timestamp-stomping tools.
    let times = record.present_timestamps();
    if times.len() >= RAPID_ACTIVITY_MIN_TIMESTAMPS {
        if let (Some(min), Some(max)) = (times.iter().min(), times.iter().max()) {
            if *max - *min < Duration::seconds(2) {
                flags.push(Anomaly::RapidTimestampActivity);
            }
        }
    }

    // Rule 4: access timestamp on an unallocated entry.
    if record.deleted && record.atime.is_some() {
        flags.push(Anomaly::DeletedFileAccessed);
    }

    flags
}

/// Run detection over every record in the table, populating `flags`
/// and `suspicious` in place.
///
/// Flags are replaced, not appended, so running detection twice yields
/// identical results.
pub fn detect(table: &mut FileTable) {
    for record in table.values_mut() {
        record.flags = evaluate(record);
        record.suspicious = !record.flags.is_empty();
    }

    let suspicious = table.values().filter(|r| r.suspicious).count();
    debug!(files = table.len(), suspicious, "detection complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consolidate::consolidate;
    use crate::types::{RawEvent, TimestampKind};
    use chrono::{DateTime, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    fn make_record() -> FileRecord {
        FileRecord::seeded_from(&RawEvent {
            time: base(),
            kind: TimestampKind::Mtime,
            path: "/home/user/doc.txt".into(),
            partition: "part0".into(),
            inode: 9,
            size: 4096,
            deleted: false,
        })
    }

    #[test]
    fn access_one_nanosecond_before_creation_fires() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.atime = Some(base() - Duration::nanoseconds(1));

        assert_eq!(evaluate(&record), vec![Anomaly::AccessBeforeCreation]);
    }

    #[test]
    fn access_equal_to_creation_does_not_fire() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.atime = Some(base());

        assert!(evaluate(&record).is_empty());
    }

    #[test]
    fn modification_before_creation_fires() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.mtime = Some(base() - Duration::seconds(30));

        assert_eq!(evaluate(&record), vec![Anomaly::ModifiedBeforeCreation]);
    }

    #[test]
    fn rule_is_inapplicable_without_crtime() {
        let mut record = make_record();
        record.atime = Some(base() - Duration::days(365));
        record.mtime = Some(base() - Duration::days(365));

        // Only two timestamps present, so the rapid rule is out too.
        assert!(evaluate(&record).is_empty());
    }

    #[test]
    fn rapid_activity_inside_window_fires() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.mtime = Some(base() + Duration::milliseconds(500));
        record.atime = Some(base() + Duration::milliseconds(900));
        record.ctime = Some(base() + Duration::milliseconds(1999));

        assert_eq!(evaluate(&record), vec![Anomaly::RapidTimestampActivity]);
    }

    #[test]
    fn rapid_activity_spread_of_exactly_two_seconds_does_not_fire() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.mtime = Some(base() + Duration::seconds(1));
        record.atime = Some(base() + Duration::seconds(2));

        assert!(evaluate(&record).is_empty());
    }

    #[test]
    fn rapid_activity_needs_three_timestamps() {
        let mut record = make_record();
        record.crtime = Some(base());
        record.mtime = Some(base() + Duration::milliseconds(10));

        assert!(evaluate(&record).is_empty());
    }

    #[test]
    fn deleted_without_atime_does_not_fire() {
        let mut record = make_record();
        record.deleted = true;
        record.mtime = Some(base());

        assert!(evaluate(&record).is_empty());
    }

    #[test]
    fn deleted_with_atime_fires_regardless_of_other_timestamps() {
        let mut record = make_record();
        record.deleted = true;
        record.atime = Some(base());

        assert_eq!(evaluate(&record), vec![Anomaly::DeletedFileAccessed]);
    }

    #[test]
    fn stomped_document_scenario() {
        // Access predates creation and all four timestamps sit inside
        // a 1.9s window, so rules 1 and 3 both fire, in that order.
        let path = "/home/user/doc.txt";
        let mk = |kind, time| RawEvent {
            time,
            kind,
            path: path.into(),
            partition: "part0".into(),
            inode: 9,
            size: 4096,
            deleted: false,
        };
        let events = vec![
            mk(TimestampKind::Crtime, base()),
            mk(TimestampKind::Mtime, base() + Duration::milliseconds(500)),
            mk(TimestampKind::Atime, base() - Duration::seconds(1)),
            mk(TimestampKind::Ctime, base() + Duration::milliseconds(900)),
        ];

        let mut table = consolidate(&events);
        detect(&mut table);

        let record = &table[path];
        assert_eq!(
            record.flags,
            vec![
                Anomaly::AccessBeforeCreation,
                Anomaly::RapidTimestampActivity
            ]
        );
        assert!(record.suspicious);
    }

    #[test]
    fn single_mtime_record_is_clean() {
        let mut record = make_record();
        record.mtime = Some(base());

        let mut table = FileTable::new();
        table.insert(record.path.clone(), record);
        detect(&mut table);

        let record = table.values().next().unwrap();
        assert!(record.flags.is_empty());
        assert!(!record.suspicious);
    }

    #[test]
    fn detection_is_idempotent() {
        let mut record = make_record();
        record.deleted = true;
        record.atime = Some(base());

        let mut table = FileTable::new();
        table.insert(record.path.clone(), record);

        detect(&mut table);
        let first: Vec<_> = table.values().cloned().collect();
        detect(&mut table);
        let second: Vec<_> = table.values().cloned().collect();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.flags, b.flags);
            assert_eq!(a.suspicious, b.suspicious);
        }
    }
}
