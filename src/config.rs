use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::TimeError;
use crate::zones::{OffsetTable, TableKind, ZoneEntry};

/// Zone-table configuration. Loaded once at startup and treated as
/// read-only for the rest of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Anchor zone the entered time is assumed to be in. Either a friendly
    /// alias ("Mountain") or an IANA identifier.
    #[serde(default = "default_anchor_zone")]
    pub anchor_zone: String,
    /// Fixed-offset table for the standard (winter) half of the year.
    /// Offsets are deltas from the anchor zone's wall clock.
    #[serde(default = "default_standard")]
    pub standard: Vec<OffsetEntry>,
    /// Fixed-offset table for the daylight half of the year.
    #[serde(default = "default_daylight")]
    pub daylight: Vec<OffsetEntry>,
    /// IANA zones for named-zone mode.
    #[serde(default = "default_named")]
    pub named: Vec<NamedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetEntry {
    pub label: String,
    pub hours: i32,
    #[serde(default)]
    pub minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntry {
    pub zone: String,
}

fn default_anchor_zone() -> String {
    "Mountain".to_string()
}

fn offset(label: &str, hours: i32, minutes: i32) -> OffsetEntry {
    OffsetEntry { label: label.to_string(), hours, minutes }
}

fn default_standard() -> Vec<OffsetEntry> {
    vec![
        offset("CST", 1, 0),
        offset("EST", 2, 0),
        offset("PST", -1, 0),
        offset("IST", 12, 30),
        offset("GMT", 7, 0),
        offset("UTC", 7, 0),
    ]
}

fn default_daylight() -> Vec<OffsetEntry> {
    vec![
        offset("CDT", 1, 0),
        offset("EDT", 2, 0),
        offset("PDT", -1, 0),
        offset("MST", -1, 0),
        offset("BST", 7, 0),
        offset("IST", 11, 30),
        offset("UTC", 6, 0),
    ]
}

fn default_named() -> Vec<NamedEntry> {
    [
        "America/Los_Angeles",
        "America/Chicago",
        "America/New_York",
        "Europe/London",
        "Asia/Kolkata",
        "UTC",
    ]
    .iter()
    .map(|zone| NamedEntry { zone: zone.to_string() })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor_zone: default_anchor_zone(),
            standard: default_standard(),
            daylight: default_daylight(),
            named: default_named(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// The fixed-offset table for one DST half, in configuration order.
    pub fn offset_table(&self, kind: TableKind) -> OffsetTable {
        let entries = match kind {
            TableKind::Standard => &self.standard,
            TableKind::Daylight => &self.daylight,
        };
        OffsetTable::new(
            kind,
            entries.iter().map(|e| ZoneEntry::fixed(&e.label, e.hours, e.minutes)).collect(),
        )
    }

    /// Resolve the named-zone table. Fails with [`TimeError::ZoneData`] if
    /// the table is empty or any identifier is unknown to the zone
    /// database; that failure is fatal before any conversion runs.
    pub fn named_entries(&self) -> std::result::Result<Vec<ZoneEntry>, TimeError> {
        if self.named.is_empty() {
            return Err(TimeError::ZoneData("no named zones configured".to_string()));
        }
        self.named
            .iter()
            .map(|entry| {
                entry.zone.parse().map(|tz| ZoneEntry::named(&entry.zone, tz)).map_err(|_| {
                    TimeError::ZoneData(format!("unknown time zone '{}'", entry.zone))
                })
            })
            .collect()
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "timezoner", "timezoner")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
