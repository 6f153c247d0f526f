use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TimeError;

// Hour 0-23 (leading zero optional), minute always two digits.
static MILITARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]?\d|2[0-3]):[0-5]\d$").unwrap());

// Hour 1-12, minute two digits, then AM/PM with zero or one preceding space.
static AMPM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:0?[1-9]|1[0-2]):[0-5]\d ?[ap]m$").unwrap());

/// Check a raw input string against the accepted time grammar.
///
/// Two forms are accepted, and the whole trimmed string must match one of
/// them exactly:
///
/// * 24-hour: `21:00`, `9:05`, `09:05`
/// * 12-hour: `9:00 PM`, `9:00PM`, `12:30 am`
///
/// Anything else (out-of-range hour or minute, a 12-hour time without its
/// AM/PM suffix, trailing garbage) is rejected with
/// [`TimeError::InvalidFormat`].
pub fn validate(raw: &str) -> Result<(), TimeError> {
    let trimmed = raw.trim();
    if MILITARY_RE.is_match(trimmed) || AMPM_RE.is_match(trimmed) {
        Ok(())
    } else {
        Err(TimeError::InvalidFormat(raw.to_string()))
    }
}
