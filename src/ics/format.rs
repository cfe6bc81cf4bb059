//! Compact iCalendar timestamps and the fixed-offset UTC conversion.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// `YYYYMMDDTHHMMSS` for an instant already in UTC. The caller appends the
/// literal `Z` when serializing.
pub fn format_ics_utc(dt: DateTime<Utc>) -> String {
    format_ics_naive(dt.naive_utc())
}

/// `YYYYMMDDTHHMMSS` for a naive value; the caller guarantees it is already
/// in the desired reference frame.
pub fn format_ics_naive(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Local to UTC by constant subtraction. No timezone database: the seasonal
/// offset comes from configuration (2 for Berlin summer time, 1 in winter).
pub fn to_utc(local: NaiveDateTime, offset_hours: i64) -> NaiveDateTime {
    local - Duration::hours(offset_hours)
}
