use chrono::{DateTime, Datelike, Timelike};

/// "H:MM" clock label for the last-updated line. Hours are not padded,
/// minutes are.
pub fn clock_label<T: Timelike>(time: &T) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// "D/M" chart axis label for an epoch-millisecond timestamp. Month is
/// 1-based, no leading zeros, no year.
///
/// Labels are computed in UTC: daily history points sit on 00:00 UTC
/// boundaries, so a local-time conversion would name the wrong day for
/// half the planet.
pub fn day_month_label(epoch_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(epoch_ms).expect("invalid timestamp");
    format!("{}/{}", dt.day(), dt.month())
}
