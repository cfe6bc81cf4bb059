//! Date parsing for the interactive `TT.MM[.JJJJ]` prompt format.

use chrono::{Datelike, NaiveDate};

/// Shown between attempts when a date entry cannot be parsed.
pub const DATE_FORMAT_HINT: &str =
    "❌ Ungültiges Datum! Bitte im Format TT.MM, TT.MM. oder TT.MM.JJJJ eingeben.";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Parse `TT.MM`, `TT.MM.` (trailing dot trimmed) or `TT.MM.JJJJ`.
/// When the year is omitted, `current_year` is substituted.
/// Err carries the localized hint for the re-prompt loop.
pub fn parse_shift_date(input: &str, current_year: i32) -> Result<NaiveDate, String> {
    let mut val = input.trim();
    if let Some(stripped) = val.strip_suffix('.') {
        val = stripped.trim();
    }

    let candidate = if val.split('.').count() == 2 {
        format!("{val}.{current_year}")
    } else {
        val.to_string()
    };

    NaiveDate::parse_from_str(&candidate, "%d.%m.%Y").map_err(|_| DATE_FORMAT_HINT.to_string())
}
