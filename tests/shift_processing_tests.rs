mod common;
use common::{calendar, utc, vevent};

use chrono::FixedOffset;
use shiftlogger::core::shifts::calendar::parse_calendar;
use shiftlogger::core::shifts::grouping::group_shifts;
use shiftlogger::core::shifts::split::split_at_midnight;
use shiftlogger::core::shifts::window::{
    ShiftStatus, current_and_next, highlighted_index, status,
};
use shiftlogger::core::shifts::build_schedule;
use shiftlogger::models::shift::{GroupedShift, ShiftEvent, SplitPart};

fn pst() -> FixedOffset {
    FixedOffset::west_opt(8 * 3600).expect("valid offset")
}

fn event(label: &str, start: &str, end: &str) -> ShiftEvent {
    ShiftEvent {
        label: label.to_string(),
        start: utc(start),
        end: utc(end),
    }
}

#[test]
fn test_parse_calendar_reads_local_and_utc_timestamps() {
    let text = calendar(&[
        vevent("20250310T220000", "20250311T000000", "Fab Queue"),
        vevent("20250311T000000", "20250311T020000", "  Fab Queue  "),
        "BEGIN:VEVENT\r\nDTSTART:20250312T100000Z\r\nDTEND:20250312T120000Z\r\nSUMMARY:Utc block\r\nEND:VEVENT\r\n"
            .to_string(),
    ]);

    let parsed = parse_calendar(&text, &pst());

    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.events.len(), 3);
    assert_eq!(parsed.events[0].start, utc("2025-03-11T06:00:00Z"));
    assert_eq!(parsed.events[0].end, utc("2025-03-11T08:00:00Z"));
    assert_eq!(parsed.events[1].label, "Fab Queue");
    assert_eq!(parsed.events[2].start, utc("2025-03-12T10:00:00Z"));
    assert_eq!(parsed.events[2].label, "Utc block");
}

#[test]
fn test_parse_calendar_skips_incomplete_blocks() {
    let text = calendar(&[
        vevent("20250310T090000", "20250310T170000", "Day shift"),
        "BEGIN:VEVENT\r\nDTSTART:20250311T090000\r\nSUMMARY:No end\r\nEND:VEVENT\r\n".to_string(),
        "BEGIN:VEVENT\r\nDTSTART:20250311T090000\r\nDTEND:20250311T100000\r\nEND:VEVENT\r\n"
            .to_string(),
        vevent("20250312T170000", "20250312T090000", "Backwards"),
        vevent("20250313T090000", "20250313T090000", "Empty interval"),
    ]);

    let parsed = parse_calendar(&text, &pst());

    assert_eq!(parsed.events.len(), 1);
    assert_eq!(parsed.events[0].label, "Day shift");
    assert_eq!(parsed.skipped, 4);
}

#[test]
fn test_parse_calendar_without_blocks_is_empty() {
    let parsed = parse_calendar("nothing to see here", &pst());
    assert!(parsed.events.is_empty());
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn test_group_merges_back_to_back_events_with_same_label() {
    let events = vec![
        event("Queue", "2025-03-10T18:00:00Z", "2025-03-10T19:00:00Z"),
        event("Queue", "2025-03-10T17:00:00Z", "2025-03-10T18:00:00Z"),
        event("Queue", "2025-03-10T19:00:00Z", "2025-03-10T20:00:00Z"),
        event("Other", "2025-03-10T20:00:00Z", "2025-03-10T21:00:00Z"),
        event("Queue", "2025-03-10T22:00:00Z", "2025-03-10T23:00:00Z"),
    ];

    let grouped = group_shifts(&events);

    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped[0].label, "Queue");
    assert_eq!(grouped[0].start, utc("2025-03-10T17:00:00Z"));
    assert_eq!(grouped[0].end, utc("2025-03-10T20:00:00Z"));
    assert_eq!(grouped[1].label, "Other");
    assert_eq!(grouped[2].start, utc("2025-03-10T22:00:00Z"));
}

#[test]
fn test_group_preserves_covered_time_and_is_idempotent() {
    let events = vec![
        event("A", "2025-03-10T08:00:00Z", "2025-03-10T10:00:00Z"),
        event("A", "2025-03-10T10:00:00Z", "2025-03-10T12:30:00Z"),
        event("B", "2025-03-10T13:00:00Z", "2025-03-10T14:00:00Z"),
        event("A", "2025-03-11T08:00:00Z", "2025-03-11T09:00:00Z"),
    ];

    let grouped = group_shifts(&events);

    let before: f64 = events.iter().map(ShiftEvent::duration_hours).sum();
    let after: f64 = grouped.iter().map(GroupedShift::duration_hours).sum();
    assert!((before - after).abs() < 1e-9);
    assert!(grouped.windows(2).all(|w| w[0].start <= w[1].start));

    let again: Vec<ShiftEvent> = grouped.iter().map(ShiftEvent::from).collect();
    assert_eq!(group_shifts(&again), grouped);
}

#[test]
fn test_group_of_nothing_is_empty() {
    assert!(group_shifts(&[]).is_empty());
}

#[test]
fn test_split_across_reference_midnight() {
    // 22:00 -> 02:00 at UTC-8
    let shift = GroupedShift::new(
        "Night",
        utc("2025-03-11T06:00:00Z"),
        utc("2025-03-11T10:00:00Z"),
    );

    let parts = split_at_midnight(vec![shift], &pst());

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].duration_minutes(), 120);
    assert_eq!(parts[1].duration_minutes(), 120);
    assert_eq!(parts[0].end, utc("2025-03-11T08:00:00Z"));
    assert_eq!(parts[0].end, parts[1].start);
    assert_eq!(parts[0].split_part(), Some(SplitPart::First));
    assert_eq!(parts[1].split_part(), Some(SplitPart::Second));
    assert!(parts[0].continues_into(&parts[1]));
    assert_eq!(parts[0].label, parts[1].label);
}

#[test]
fn test_shift_ending_at_midnight_is_not_split() {
    // 20:00 -> 00:00 at UTC-8
    let shift = GroupedShift::new(
        "Evening",
        utc("2025-03-11T04:00:00Z"),
        utc("2025-03-11T08:00:00Z"),
    );

    let parts = split_at_midnight(vec![shift.clone()], &pst());

    assert_eq!(parts, vec![shift]);
}

#[test]
fn test_split_pairs_get_distinct_ids() {
    let shifts = vec![
        GroupedShift::new("N", utc("2025-03-11T06:00:00Z"), utc("2025-03-11T10:00:00Z")),
        GroupedShift::new("D", utc("2025-03-11T17:00:00Z"), utc("2025-03-11T20:00:00Z")),
        GroupedShift::new("N", utc("2025-03-12T06:00:00Z"), utc("2025-03-12T10:00:00Z")),
    ];

    let parts = split_at_midnight(shifts, &pst());

    assert_eq!(parts.len(), 5);
    assert!(parts[0].continues_into(&parts[1]));
    assert_eq!(parts[2].part_of, None);
    assert!(parts[3].continues_into(&parts[4]));
    assert!(!parts[1].continues_into(&parts[3]));
}

#[test]
fn test_build_schedule_groups_then_splits() {
    let events = vec![
        event("Fab Queue", "2025-03-11T06:00:00Z", "2025-03-11T08:00:00Z"),
        event("Fab Queue", "2025-03-11T08:00:00Z", "2025-03-11T10:00:00Z"),
    ];

    let schedule = build_schedule(&events, &pst());

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].start, utc("2025-03-11T06:00:00Z"));
    assert_eq!(schedule[1].end, utc("2025-03-11T10:00:00Z"));
    assert!(schedule[0].continues_into(&schedule[1]));
}

fn daily_shifts(now: &str, past: i64, future: i64) -> Vec<GroupedShift> {
    let now = utc(now);
    let mut out = Vec::new();
    for i in 1..=past {
        let start = now - chrono::Duration::days(i);
        out.push(GroupedShift::new(
            format!("past {i}"),
            start,
            start + chrono::Duration::hours(2),
        ));
    }
    for i in 1..=future {
        let start = now + chrono::Duration::days(i);
        out.push(GroupedShift::new(
            format!("future {i}"),
            start,
            start + chrono::Duration::hours(2),
        ));
    }
    out
}

#[test]
fn test_window_keeps_recent_past_and_every_future_shift() {
    let now = "2025-03-20T12:00:00Z";
    let shifts = daily_shifts(now, 10, 2);

    let shown = current_and_next(&shifts, 4, utc(now), 30);

    assert_eq!(shown.len(), 5);
    let labels: Vec<&str> = shown.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["past 3", "past 2", "past 1", "future 1", "future 2"]
    );
}

#[test]
fn test_window_without_past_shifts_returns_only_future() {
    let now = "2025-03-20T12:00:00Z";
    let shifts = daily_shifts(now, 0, 2);

    let shown = current_and_next(&shifts, 4, utc(now), 3);

    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|s| s.start > utc(now)));
}

#[test]
fn test_window_drops_shifts_older_than_lookback() {
    let now = "2025-03-20T12:00:00Z";
    let shifts = daily_shifts(now, 5, 0);

    let shown = current_and_next(&shifts, 10, utc(now), 3);

    let labels: Vec<&str> = shown.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["past 3", "past 2", "past 1"]);
}

#[test]
fn test_status_and_highlight() {
    let now = utc("2025-03-20T12:00:00Z");
    let done = GroupedShift::new("done", utc("2025-03-20T06:00:00Z"), utc("2025-03-20T08:00:00Z"));
    let running = GroupedShift::new("running", utc("2025-03-20T11:00:00Z"), utc("2025-03-20T13:00:00Z"));
    let next = GroupedShift::new("next", utc("2025-03-20T15:00:00Z"), utc("2025-03-20T17:00:00Z"));

    assert_eq!(status(&done, now), ShiftStatus::Past);
    assert_eq!(status(&running, now), ShiftStatus::Current);
    assert_eq!(status(&next, now), ShiftStatus::Upcoming);

    let window = vec![done.clone(), running, next.clone()];
    assert_eq!(highlighted_index(&window, now), Some(1));

    let window = vec![done.clone(), next];
    assert_eq!(highlighted_index(&window, now), Some(1));

    assert_eq!(highlighted_index(&[done], now), None);
}
