use time::OffsetDateTime;
use time::macros::format_description;

/// Returns the current instant for transcript timestamps.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Formats a timestamp as a short `HH:MM` clock label for display next to
/// transcript entries.
pub fn clock_label(timestamp: OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]");
    timestamp.format(&format).unwrap_or_default()
}
