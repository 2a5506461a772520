use crate::models::shift::GroupedShift;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStatus {
    Past,
    Current,
    Upcoming,
}

impl ShiftStatus {
    pub fn label(self) -> &'static str {
        match self {
            ShiftStatus::Past => "",
            ShiftStatus::Current => "Current",
            ShiftStatus::Upcoming => "Next",
        }
    }
}

pub fn status(shift: &GroupedShift, now: DateTime<Utc>) -> ShiftStatus {
    if shift.start > now {
        ShiftStatus::Upcoming
    } else if shift.end >= now {
        ShiftStatus::Current
    } else {
        ShiftStatus::Past
    }
}

/// Bounded display window: the `display_count - 1` most recent past shifts
/// (ending within the lookback) followed by every shift that has not ended.
pub fn current_and_next(
    shifts: &[GroupedShift],
    display_count: usize,
    now: DateTime<Utc>,
    lookback_days: i64,
) -> Vec<GroupedShift> {
    let cutoff = now - Duration::days(lookback_days);

    let mut recent: Vec<GroupedShift> = shifts
        .iter()
        .filter(|s| s.end > cutoff)
        .cloned()
        .collect();
    recent.sort_by_key(|s| s.start);

    let (past, future): (Vec<_>, Vec<_>) = recent.into_iter().partition(|s| s.end <= now);

    let keep = display_count.saturating_sub(1);
    let skip = past.len().saturating_sub(keep);

    past.into_iter().skip(skip).chain(future).collect()
}

/// Row to highlight: the current shift, or the next one when none is running.
pub fn highlighted_index(window: &[GroupedShift], now: DateTime<Utc>) -> Option<usize> {
    window
        .iter()
        .position(|s| status(s, now) == ShiftStatus::Current)
        .or_else(|| {
            window
                .iter()
                .position(|s| status(s, now) == ShiftStatus::Upcoming)
        })
}
