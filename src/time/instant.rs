use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::zones::ZoneRule;

/// A wall-clock time of day with its range invariant enforced at
/// construction: hour 0-23, minute 0-59. Only ever built from validated
/// input or from chrono values that already satisfy the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl From<NaiveTime> for ClockTime {
    // chrono clock fields already satisfy the range invariant.
    fn from(time: NaiveTime) -> Self {
        Self { hour: time.hour(), minute: time.minute() }
    }
}

impl std::fmt::Display for ClockTime {
    /// Zero-padded `HH:MM`, the form every output row uses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A concrete point in time: today's calendar date, a validated clock time,
/// and the anchor zone rule the time was entered in. Built once per
/// conversion request and never mutated.
#[derive(Debug, Clone)]
pub struct Instant {
    date: NaiveDate,
    time: ClockTime,
    anchor: ZoneRule,
}

impl Instant {
    /// Combine a normalized `H:MM`/`HH:MM` string with today's date and the
    /// anchor zone rule.
    ///
    /// The split-and-parse failure path is defensive: any string that passed
    /// validation also parses here, and a test pins that down.
    pub fn build(normalized: &str, anchor: ZoneRule) -> Result<Self, TimeError> {
        let mut parts = normalized.splitn(2, ':');
        let hour = parts
            .next()
            .and_then(|h| h.parse::<u32>().ok())
            .ok_or_else(|| TimeError::Parse(normalized.to_string()))?;
        let minute = parts
            .next()
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(|| TimeError::Parse(normalized.to_string()))?;
        let time = ClockTime::new(hour, minute)
            .ok_or_else(|| TimeError::Parse(normalized.to_string()))?;

        Ok(Self { date: Local::now().date_naive(), time, anchor })
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn anchor(&self) -> &ZoneRule {
        &self.anchor
    }

    pub fn naive(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.time.hour, self.time.minute, 0)
            .unwrap_or(NaiveTime::MIN);
        self.date.and_time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_from_normalized_string() {
        let instant = Instant::build("21:05", ZoneRule::anchor_default()).unwrap();
        assert_eq!(instant.time().hour(), 21);
        assert_eq!(instant.time().minute(), 5);
        assert_eq!(instant.naive().date(), Local::now().date_naive());
    }

    #[test]
    fn rejects_malformed_split() {
        assert!(Instant::build("2105", ZoneRule::anchor_default()).is_err());
        assert!(Instant::build("21:xx", ZoneRule::anchor_default()).is_err());
        assert!(Instant::build("", ZoneRule::anchor_default()).is_err());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(Instant::build("24:00", ZoneRule::anchor_default()).is_err());
        assert!(Instant::build("12:60", ZoneRule::anchor_default()).is_err());
    }

    #[test]
    fn clock_time_display_is_zero_padded() {
        let time = ClockTime::new(9, 5).unwrap();
        assert_eq!(time.to_string(), "09:05");
    }
}
