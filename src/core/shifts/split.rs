//! Split shifts that cross midnight in the reference zone.
//!
//! Shift reports are filed per reference-zone day, so a shift running past
//! midnight there is shown and reported as two linked parts.

use crate::models::shift::{GroupedShift, SplitLink, SplitPart};
use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};

pub fn split_at_midnight(shifts: Vec<GroupedShift>, reference: &FixedOffset) -> Vec<GroupedShift> {
    let mut out = Vec::with_capacity(shifts.len());
    let mut next_pair_id = 1u32;

    for shift in shifts {
        let Some(boundary) = midnight_boundary(&shift, reference) else {
            out.push(shift);
            continue;
        };

        let mut first = shift.clone();
        first.end = boundary;

        let mut second = shift;
        second.start = boundary;

        if second.end <= second.start {
            out.push(first);
            continue;
        }

        first.part_of = Some(SplitLink {
            pair_id: next_pair_id,
            part: SplitPart::First,
        });
        second.part_of = Some(SplitLink {
            pair_id: next_pair_id,
            part: SplitPart::Second,
        });
        next_pair_id += 1;

        out.push(first);
        out.push(second);
    }

    out
}

/// First reference-zone midnight after `start`, when the shift must be split there.
fn midnight_boundary(shift: &GroupedShift, reference: &FixedOffset) -> Option<DateTime<Utc>> {
    let local_start = shift.start.with_timezone(reference);
    let local_end = shift.end.with_timezone(reference);

    if local_start.date_naive() == local_end.date_naive() || local_end.time() == NaiveTime::MIN {
        return None;
    }

    let next_day = local_start.date_naive().succ_opt()?;
    reference
        .from_local_datetime(&next_day.and_time(NaiveTime::MIN))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
