//! Interactive session: collect shifts until the user stops, then save the
//! whole calendar in one write.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ics::{event, store};
use crate::models::shift::WorkShift;
use crate::ui::{messages, prompt};
use crate::utils::date;
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::Path;

/// Token that continues the entry loop; anything else finalizes.
const CONTINUE_TOKEN: &str = "y";

pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
    path: &Path,
) -> AppResult<()> {
    let mut blocks = store::load_events(path);
    if !blocks.is_empty() {
        messages::info(format!("{} bestehende Termine geladen.", blocks.len()));
    }

    let year = date::current_year();

    loop {
        writeln!(out, "\n=== Neuen Arbeitstermin eingeben ===")?;

        let datum = prompt::prompt_date(
            input,
            out,
            "Datum (TT.MM, TT.MM. oder TT.MM.JJJJ): ",
            year,
        )?;
        let (start, end) = prompt::prompt_time_range(
            input,
            out,
            "Arbeitszeit (z.B. 17-21 oder 16:30-21:45): ",
        )?;
        let pause = prompt::prompt_optional_time_range(
            input,
            out,
            "Pause (z.B. 12-12:30) oder leer lassen: ",
        )?;

        let shift = WorkShift::new(datum, start, end, pause);
        blocks.push(event::build_event(&shift, cfg.utc_offset_hours, Utc::now()));

        let again = prompt::prompt_line(
            input,
            out,
            "Weitere Termine eingeben? (y für ja, Enter für nein): ",
        )?;
        if again.to_lowercase() != CONTINUE_TOKEN {
            break;
        }
    }

    store::write_calendar(path, &blocks)?;
    messages::success(format!(
        "Alle Termine wurden in '{}' gespeichert. Importiere sie in Google Calendar.",
        path.display()
    ));
    Ok(())
}
