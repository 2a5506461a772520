//! Merge back-to-back events that share a label.

use crate::models::shift::{GroupedShift, ShiftEvent};

/// Sort events by start and merge each one into the previous group when it
/// starts exactly where that group ends and carries the same label.
pub fn group_shifts(events: &[ShiftEvent]) -> Vec<GroupedShift> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);

    let mut grouped = Vec::new();
    let mut current = GroupedShift::from(&sorted[0]);

    for ev in &sorted[1..] {
        if ev.start == current.end && ev.label == current.label {
            current.end = ev.end;
        } else {
            grouped.push(current);
            current = GroupedShift::from(ev);
        }
    }

    grouped.push(current);
    grouped
}
