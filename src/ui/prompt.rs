//! Interactive re-prompt loops. Validation lives in `utils::date` and
//! `utils::time`; these loops only read lines and ask again until a parse
//! succeeds, so the rules stay testable without a console.

use crate::errors::AppResult;
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Error, ErrorKind, Write};

/// Read one trimmed line, or None on end of input.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn eof() -> Error {
    Error::new(ErrorKind::UnexpectedEof, "Eingabe wurde geschlossen")
}

/// Ask for a date until one parses. Years default to `current_year`.
pub fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current_year: i32,
) -> AppResult<NaiveDate> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;
        let val = read_line(input)?.ok_or_else(eof)?;
        match date::parse_shift_date(&val, current_year) {
            Ok(d) => return Ok(d),
            Err(hint) => writeln!(out, "{hint}")?,
        }
    }
}

/// Ask for a `START-ENDE` range until one parses.
pub fn prompt_time_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> AppResult<(NaiveTime, NaiveTime)> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;
        let val = read_line(input)?.ok_or_else(eof)?;
        match time::parse_time_range(&val) {
            Ok(range) => return Ok(range),
            Err(hint) => writeln!(out, "{hint}")?,
        }
    }
}

/// Like [`prompt_time_range`], but an empty entry means "no range" and
/// short-circuits without validation.
pub fn prompt_optional_time_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> AppResult<Option<(NaiveTime, NaiveTime)>> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;
        let val = read_line(input)?.ok_or_else(eof)?;
        if val.is_empty() {
            return Ok(None);
        }
        match time::parse_time_range(&val) {
            Ok(range) => return Ok(Some(range)),
            Err(hint) => writeln!(out, "{hint}")?,
        }
    }
}

/// Ask a free-form question once. End of input counts as an empty answer,
/// which every caller treats as "no".
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> AppResult<String> {
    write!(out, "{label}")?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}
