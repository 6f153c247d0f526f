//! Zone tables and projection. A table is read-only configuration loaded
//! once at startup; conversion never mutates it.

pub mod project;

use chrono::Utc;
use chrono_tz::Tz;

use crate::error::TimeError;

pub use project::{project, ZoneRow};

/// How a zone entry maps the anchor instant to its own wall clock.
///
/// `FixedOffset` is a delta in minutes from the *anchor zone's* wall clock,
/// not from UTC. The legacy offset tables were written relative to Mountain
/// time, and the projector adds the delta to the anchor time directly
/// without normalizing through a common reference. `NamedZone` carries an
/// IANA zone and converts through the absolute instant, so it reflects the
/// DST state of today's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRule {
    FixedOffset(i32),
    NamedZone(Tz),
}

impl ZoneRule {
    /// The anchor rule used when nothing else is configured: zero delta
    /// from itself.
    pub fn anchor_default() -> Self {
        ZoneRule::FixedOffset(0)
    }
}

/// One row of a zone table: a display label and the rule that produces the
/// zone's wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub label: String,
    pub rule: ZoneRule,
}

impl ZoneEntry {
    pub fn fixed(label: &str, hours: i32, minutes: i32) -> Self {
        Self { label: label.to_string(), rule: ZoneRule::FixedOffset(hours * 60 + minutes) }
    }

    pub fn named(label: &str, tz: Tz) -> Self {
        Self { label: label.to_string(), rule: ZoneRule::NamedZone(tz) }
    }
}

/// Which half of the legacy fixed-offset configuration a table represents.
/// Selected structurally, never by comparing table identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Standard,
    Daylight,
}

/// An ordered fixed-offset table tagged with its DST half. Entry order is
/// significant: output rows appear in exactly this order.
#[derive(Debug, Clone)]
pub struct OffsetTable {
    pub kind: TableKind,
    pub entries: Vec<ZoneEntry>,
}

impl OffsetTable {
    pub fn new(kind: TableKind, entries: Vec<ZoneEntry>) -> Self {
        Self { kind, entries }
    }

    /// Turn the offset table into a projectable zone table, labeling the
    /// anchor row with the anchor zone's abbreviation for this table's
    /// DST half.
    pub fn to_zone_table(&self, anchor: &AnchorZone) -> ZoneTable {
        let label = match self.kind {
            TableKind::Standard => anchor.standard_abbrev.clone(),
            TableKind::Daylight => anchor.daylight_abbrev.clone(),
        };
        ZoneTable { anchor_label: label, entries: self.entries.clone() }
    }
}

/// The projection input: an anchor label (used when the anchor rule is a
/// fixed offset) and the ordered entries to project through.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    pub anchor_label: String,
    pub entries: Vec<ZoneEntry>,
}

impl ZoneTable {
    pub fn named(anchor_label: String, entries: Vec<ZoneEntry>) -> Result<Self, TimeError> {
        if entries.is_empty() {
            return Err(TimeError::ZoneData("the named zone table is empty".to_string()));
        }
        Ok(Self { anchor_label, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The zone the entered time is assumed to be in before projection.
#[derive(Debug, Clone)]
pub struct AnchorZone {
    pub name: String,
    pub standard_abbrev: String,
    pub daylight_abbrev: String,
    pub tz: Tz,
}

// Friendly anchor names with their standard/daylight abbreviations. Anything
// not listed here must be a full IANA identifier.
const ANCHOR_ALIASES: &[(&str, &str, &str, &str)] = &[
    ("Mountain", "MST", "MDT", "America/Denver"),
    ("Pacific", "PST", "PDT", "America/Los_Angeles"),
    ("Central", "CST", "CDT", "America/Chicago"),
    ("Eastern", "EST", "EDT", "America/New_York"),
    ("UTC", "UTC", "UTC", "UTC"),
];

/// Resolve an anchor zone name: either a friendly alias ("Mountain") or a
/// full IANA identifier ("America/Denver"). Unknown names fail with
/// [`TimeError::ZoneData`].
pub fn resolve_anchor(name: &str) -> Result<AnchorZone, TimeError> {
    for (alias, std_abbrev, dst_abbrev, iana) in ANCHOR_ALIASES {
        if alias.eq_ignore_ascii_case(name) {
            let tz: Tz = iana
                .parse()
                .map_err(|e| TimeError::ZoneData(format!("cannot resolve '{}': {}", iana, e)))?;
            return Ok(AnchorZone {
                name: alias.to_string(),
                standard_abbrev: std_abbrev.to_string(),
                daylight_abbrev: dst_abbrev.to_string(),
                tz,
            });
        }
    }

    let tz: Tz = name
        .parse()
        .map_err(|_| TimeError::ZoneData(format!("unknown time zone '{}'", name)))?;
    // No alias entry, so both halves get the zone's live abbreviation.
    let abbrev = Utc::now().with_timezone(&tz).format("%Z").to_string();
    Ok(AnchorZone {
        name: name.to_string(),
        standard_abbrev: abbrev.clone(),
        daylight_abbrev: abbrev,
        tz,
    })
}
