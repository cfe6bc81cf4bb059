//! Composes one VEVENT block with its two reminder VALARMs.

use crate::ics::format::{format_ics_naive, format_ics_utc, to_utc};
use crate::models::shift::WorkShift;
use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Build the full VEVENT text for one shift. `now_utc` becomes DTSTAMP;
/// it is passed in so the output is deterministic under test. The blank
/// CRLF line before `END:VEVENT` is part of the wire format this tool has
/// always produced and must survive round-trips byte-identically.
pub fn build_event(shift: &WorkShift, offset_hours: i64, now_utc: DateTime<Utc>) -> String {
    let start_utc = to_utc(shift.date.and_time(shift.start), offset_hours);
    let end_utc = to_utc(shift.date.and_time(shift.end), offset_hours);

    // Reminders: 15:00 the day before and 07:00 the same day, local time.
    let eve = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
    let morning = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
    let reminder1_utc = to_utc((shift.date - Duration::days(1)).and_time(eve), offset_hours);
    let reminder2_utc = to_utc(shift.date.and_time(morning), offset_hours);

    format!(
        "BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{stamp}Z\r\n\
         DTSTART:{start}Z\r\n\
         DTEND:{end}Z\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         BEGIN:VALARM\r\n\
         TRIGGER;VALUE=DATE-TIME:{reminder1}Z\r\n\
         DESCRIPTION:Erinnerung an Arbeit - 15:00 Uhr am Vortag\r\n\
         ACTION:DISPLAY\r\n\
         END:VALARM\r\n\
         BEGIN:VALARM\r\n\
         TRIGGER;VALUE=DATE-TIME:{reminder2}Z\r\n\
         DESCRIPTION:Erinnerung an Arbeit - 07:00 Uhr am Tag\r\n\
         ACTION:DISPLAY\r\n\
         END:VALARM\r\n\
         \r\n\
         END:VEVENT",
        uid = shift.uid(),
        stamp = format_ics_utc(now_utc),
        start = format_ics_naive(start_utc),
        end = format_ics_naive(end_utc),
        summary = shift.summary(),
        description = shift.description(),
        reminder1 = format_ics_naive(reminder1_utc),
        reminder2 = format_ics_naive(reminder2_utc),
    )
}
