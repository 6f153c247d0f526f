/// Custom error type for time conversion operations
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    #[error("'{0}' is not a valid time. Some examples to try: '21:00' or '9:00 PM'")]
    InvalidFormat(String),
    #[error("Failed to parse normalized time '{0}'")]
    Parse(String),
    #[error("Time zone data unavailable: {0}")]
    ZoneData(String),
}
