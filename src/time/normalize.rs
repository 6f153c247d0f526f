/// Rewrite a validated 12-hour time string into 24-hour (military) form.
///
/// Must only be called on input that has already passed
/// [`validate`](super::validate::validate). Input that is already in
/// 24-hour form is returned unchanged, which makes the function idempotent.
///
/// Mapping: `12:xx AM` becomes `0:xx`, other AM hours keep their hour;
/// `12:xx PM` stays `12:xx`, other PM hours gain 12.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    if let Some(stripped) = lower.strip_suffix("am") {
        let bare = stripped.trim();
        let (hour, minute) = split_hour_minute(bare);
        let hour = if hour == 12 { 0 } else { hour };
        format!("{}:{:02}", hour, minute)
    } else if let Some(stripped) = lower.strip_suffix("pm") {
        let bare = stripped.trim();
        let (hour, minute) = split_hour_minute(bare);
        let hour = if hour < 12 { hour + 12 } else { hour };
        format!("{}:{:02}", hour, minute)
    } else {
        raw.trim().to_string()
    }
}

// Validated input always has exactly one colon with numeric halves.
fn split_hour_minute(bare: &str) -> (u32, u32) {
    let mut parts = bare.splitn(2, ':');
    let hour = parts.next().and_then(|h| h.trim().parse().ok()).unwrap_or(0);
    let minute = parts.next().and_then(|m| m.trim().parse().ok()).unwrap_or(0);
    (hour, minute)
}
