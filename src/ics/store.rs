//! Loads and saves the calendar file. Existing events are kept as opaque
//! text blocks; the tool never re-parses a block it wrote or read.

use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;
use std::path::Path;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

const CALENDAR_HEADER: &str =
    "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Arbeit ICS Generator//DE\r\n";
const CALENDAR_FOOTER: &str = "\r\nEND:VCALENDAR\r\n";

/// Linear scan for BEGIN/END pairs. Each block is the inclusive span with
/// surrounding whitespace trimmed; scanning resumes after the consumed end
/// marker. Contract: stops silently at the first BEGIN without a matching
/// END; the dangling fragment is discarded, blocks found before it are
/// still returned.
pub fn extract_event_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(found) = content[pos..].find(BEGIN_EVENT) {
        let start = pos + found;
        let Some(found_end) = content[start..].find(END_EVENT) else {
            break;
        };
        let end = start + found_end + END_EVENT.len();
        blocks.push(content[start..end].trim().to_string());
        pos = end;
    }

    blocks
}

/// Read all event blocks from the calendar file. A missing file means no
/// events; a read failure is reported and degrades to no events.
pub fn load_events(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => extract_event_blocks(&content),
        Err(e) => {
            messages::warning(format!("Fehler beim Lesen der Datei: {e}"));
            Vec::new()
        }
    }
}

/// Overwrite the calendar file with header, all blocks separated by blank
/// CRLF lines, and footer.
pub fn write_calendar(path: &Path, blocks: &[String]) -> AppResult<()> {
    let content = format!(
        "{CALENDAR_HEADER}{}{CALENDAR_FOOTER}",
        blocks.join("\r\n\r\n")
    );
    fs::write(path, content)?;
    Ok(())
}
