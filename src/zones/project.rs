use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use log::debug;

use crate::time::{ClockTime, Instant};
use crate::zones::{ZoneRule, ZoneTable};

/// One output row: a display label and the wall-clock time in that zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRow {
    pub label: String,
    pub time: ClockTime,
}

impl ZoneRow {
    fn new(label: String, time: ClockTime) -> Self {
        Self { label, time }
    }
}

/// Project an instant through a zone table.
///
/// The first row is always the anchor itself: labeled with its zone's live
/// abbreviation when the anchor is a named zone, or with the table's
/// configured anchor label when it is a fixed offset. Every table entry then
/// contributes one row, in table order. Entries that resolve to the same
/// label all appear; nothing is de-duplicated.
///
/// Fixed-offset entries add their delta to the anchor's wall clock directly
/// (the delta-from-anchor invariant on [`ZoneRule::FixedOffset`]). Named
/// entries convert the absolute instant, so their times and labels reflect
/// whether DST is in effect today.
pub fn project(instant: &Instant, table: &ZoneTable) -> Vec<ZoneRow> {
    let naive = instant.naive();
    let anchor_utc = anchor_to_utc(instant);

    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(ZoneRow::new(anchor_label(instant, table), instant.time()));

    for entry in &table.entries {
        let row = match entry.rule {
            ZoneRule::FixedOffset(minutes) => {
                let shifted = naive + Duration::minutes(i64::from(minutes));
                ZoneRow::new(entry.label.clone(), ClockTime::from(shifted.time()))
            }
            ZoneRule::NamedZone(tz) => {
                let local = anchor_utc.with_timezone(&tz);
                let label = local.format("%Z").to_string();
                ZoneRow::new(label, ClockTime::from(local.time()))
            }
        };
        debug!("projected {} -> {} {}", entry.label, row.label, row.time);
        rows.push(row);
    }

    rows
}

fn anchor_label(instant: &Instant, table: &ZoneTable) -> String {
    match instant.anchor() {
        ZoneRule::NamedZone(tz) => {
            anchor_to_utc(instant).with_timezone(tz).format("%Z").to_string()
        }
        ZoneRule::FixedOffset(_) => table.anchor_label.clone(),
    }
}

// Resolve the anchor wall clock to an absolute instant. A fixed-offset
// anchor has no zone of its own, so its wall clock is read as machine-local
// time; an input falling in a DST gap resolves to the earlier candidate.
fn anchor_to_utc(instant: &Instant) -> DateTime<Utc> {
    let naive = instant.naive();
    match instant.anchor() {
        ZoneRule::NamedZone(tz) => tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
        ZoneRule::FixedOffset(_) => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}
