//! Time parsing: single clock values (HH, H:MM, HH:MM) and START-ENDE ranges.

use chrono::NaiveTime;
use regex::Regex;

/// Shown when a range entry has no `-` separator.
pub const RANGE_FORMAT_HINT: &str =
    "❌ Bitte im Format 'Start-Ende' eingeben, z.B. 17-21 oder 16:30-21:45";

/// Shown when either side of a range is not a valid clock time.
pub const CLOCK_FORMAT_HINT: &str = "❌ Ungültige Zeitangabe! Beispiel: 17-21 oder 16:30-21:45";

/// Parse a clock value. A bare hour (`17`) means `17:00`.
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    let val = input.trim();
    let re = Regex::new(r"^\d{1,2}(:\d{2})?$").unwrap();
    if !re.is_match(val) {
        return None;
    }
    let candidate = if val.contains(':') {
        val.to_string()
    } else {
        format!("{val}:00")
    };
    NaiveTime::parse_from_str(&candidate, "%H:%M").ok()
}

/// Parse `START-ENDE`, splitting at the FIRST `-` (the end side must not
/// itself contain one). No ordering check: an end before the start is
/// accepted. Err carries the localized hint for the re-prompt loop.
pub fn parse_time_range(input: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let val = input.trim();
    let Some((start_str, end_str)) = val.split_once('-') else {
        return Err(RANGE_FORMAT_HINT.to_string());
    };
    let (Some(start), Some(end)) = (parse_clock(start_str), parse_clock(end_str)) else {
        return Err(CLOCK_FORMAT_HINT.to_string());
    };
    Ok((start, end))
}
