use arbeitskal::ics::event::build_event;
use arbeitskal::ics::format::{format_ics_naive, format_ics_utc, to_utc};
use arbeitskal::ics::store::{extract_event_blocks, load_events, write_calendar};
use arbeitskal::models::shift::WorkShift;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use std::path::Path;

mod common;
use common::temp_ics;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sample_shift() -> WorkShift {
    WorkShift::new(d(2024, 6, 1), t(17, 0), t(21, 0), None)
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap()
}

#[test]
fn timestamp_format_is_compact_iso() {
    assert_eq!(format_ics_utc(fixed_now()), "20240530T120000");
    assert_eq!(
        format_ics_naive(d(2024, 6, 1).and_time(t(17, 0))),
        "20240601T170000"
    );
}

#[test]
fn utc_conversion_subtracts_configured_offset() {
    let local = d(2024, 6, 1).and_time(t(17, 0));
    assert_eq!(format_ics_naive(to_utc(local, 2)), "20240601T150000");
    assert_eq!(format_ics_naive(to_utc(local, 1)), "20240601T160000");
}

#[test]
fn utc_conversion_crosses_midnight() {
    let local = d(2024, 6, 1).and_time(t(0, 30));
    assert_eq!(format_ics_naive(to_utc(local, 2)), "20240531T223000");
}

#[test]
fn uid_is_deterministic() {
    assert_eq!(sample_shift().uid(), "20240601-1700-2100@local");
}

#[test]
fn summary_uses_local_times() {
    assert_eq!(sample_shift().summary(), "Arbeit 17:00-21:00");
}

#[test]
fn description_empty_without_break() {
    assert_eq!(sample_shift().description(), "");
}

#[test]
fn description_carries_local_break_times() {
    let shift = WorkShift::new(d(2024, 6, 1), t(9, 0), t(17, 0), Some((t(12, 0), t(12, 30))));
    assert_eq!(shift.description(), "Pause: 12:00-12:30");
}

#[test]
fn event_block_fields_are_utc_with_z_suffix() {
    let block = build_event(&sample_shift(), 2, fixed_now());

    assert!(block.starts_with("BEGIN:VEVENT\r\n"));
    assert!(block.ends_with("END:VEVENT"));
    assert!(block.contains("UID:20240601-1700-2100@local\r\n"));
    assert!(block.contains("DTSTAMP:20240530T120000Z\r\n"));
    assert!(block.contains("DTSTART:20240601T150000Z\r\n"));
    assert!(block.contains("DTEND:20240601T190000Z\r\n"));
    assert!(block.contains("SUMMARY:Arbeit 17:00-21:00\r\n"));
    assert!(block.contains("DESCRIPTION:\r\n"));
}

#[test]
fn event_block_carries_both_reminders() {
    let block = build_event(&sample_shift(), 2, fixed_now());

    // 15:00 the day before and 07:00 the same day, both shifted to UTC
    assert!(block.contains("TRIGGER;VALUE=DATE-TIME:20240531T130000Z\r\n"));
    assert!(block.contains("DESCRIPTION:Erinnerung an Arbeit - 15:00 Uhr am Vortag\r\n"));
    assert!(block.contains("TRIGGER;VALUE=DATE-TIME:20240601T050000Z\r\n"));
    assert!(block.contains("DESCRIPTION:Erinnerung an Arbeit - 07:00 Uhr am Tag\r\n"));
    assert_eq!(block.matches("BEGIN:VALARM\r\n").count(), 2);
    assert_eq!(block.matches("END:VALARM\r\n").count(), 2);
    assert!(block.contains("ACTION:DISPLAY\r\n"));
}

#[test]
fn event_block_keeps_blank_line_before_terminator() {
    let block = build_event(&sample_shift(), 2, fixed_now());
    assert!(block.ends_with("END:VALARM\r\n\r\nEND:VEVENT"));
}

#[test]
fn extract_returns_blocks_in_order() {
    let content = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT\r\n\r\nBEGIN:VEVENT\r\nUID:b\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
    let blocks = extract_event_blocks(content);
    assert_eq!(
        blocks,
        vec![
            "BEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT".to_string(),
            "BEGIN:VEVENT\r\nUID:b\r\nEND:VEVENT".to_string(),
        ]
    );
}

#[test]
fn extract_discards_dangling_fragment_but_keeps_earlier_blocks() {
    let content = "BEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT\r\n\r\nBEGIN:VEVENT\r\nUID:dangling\r\n";
    let blocks = extract_event_blocks(content);
    assert_eq!(blocks, vec!["BEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT".to_string()]);
}

#[test]
fn extract_on_empty_or_markerless_input() {
    assert!(extract_event_blocks("").is_empty());
    assert!(extract_event_blocks("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").is_empty());
}

#[test]
fn load_missing_file_yields_no_events() {
    let path = temp_ics("load_missing");
    assert!(load_events(Path::new(&path)).is_empty());
}

#[test]
fn calendar_round_trip_is_byte_identical() {
    let path = temp_ics("round_trip");
    let shift2 = WorkShift::new(d(2024, 6, 2), t(9, 0), t(17, 0), Some((t(12, 0), t(12, 30))));
    let blocks = vec![
        build_event(&sample_shift(), 2, fixed_now()),
        build_event(&shift2, 2, fixed_now()),
    ];

    write_calendar(Path::new(&path), &blocks).unwrap();
    let reread = load_events(Path::new(&path));
    assert_eq!(reread, blocks);

    // a second write of the reread blocks must reproduce the same file
    let first = std::fs::read_to_string(&path).unwrap();
    write_calendar(Path::new(&path), &reread).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn calendar_document_layout() {
    let path = temp_ics("layout");
    let blocks = vec![build_event(&sample_shift(), 2, fixed_now())];
    write_calendar(Path::new(&path), &blocks).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Arbeit ICS Generator//DE\r\nBEGIN:VEVENT\r\n"
    ));
    assert!(content.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
}
