//! Shift interval processing: parse, group, split, window.

pub mod calendar;
pub mod grouping;
pub mod split;
pub mod window;

use crate::models::shift::{GroupedShift, ShiftEvent};
use chrono::FixedOffset;

/// Group stored events and split them at the reference midnight.
/// This is the shape every consumer (table, reminders, report) works on.
pub fn build_schedule(events: &[ShiftEvent], reference: &FixedOffset) -> Vec<GroupedShift> {
    split::split_at_midnight(grouping::group_shifts(events), reference)
}
