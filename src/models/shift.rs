use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One calendar entry as parsed from the schedule export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEvent {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftEvent {
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }
}

/// Which half of a midnight-split shift a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitPart {
    First,
    Second,
}

impl SplitPart {
    pub fn label(self) -> &'static str {
        match self {
            SplitPart::First => "Part 1",
            SplitPart::Second => "Part 2",
        }
    }
}

/// Link between the two halves of a shift split at the reference midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLink {
    pub pair_id: u32,
    pub part: SplitPart,
}

/// A run of back-to-back events sharing the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedShift {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub part_of: Option<SplitLink>,
}

impl GroupedShift {
    pub fn new(label: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            part_of: None,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    pub fn split_part(&self) -> Option<SplitPart> {
        self.part_of.map(|link| link.part)
    }

    /// True when `next` is the second half of the split this shift starts.
    pub fn continues_into(&self, next: &GroupedShift) -> bool {
        match (self.part_of, next.part_of) {
            (Some(a), Some(b)) => {
                a.part == SplitPart::First
                    && b.part == SplitPart::Second
                    && a.pair_id == b.pair_id
                    && self.end == next.start
            }
            _ => false,
        }
    }
}

impl From<&ShiftEvent> for GroupedShift {
    fn from(ev: &ShiftEvent) -> Self {
        GroupedShift::new(ev.label.clone(), ev.start, ev.end)
    }
}

impl From<&GroupedShift> for ShiftEvent {
    fn from(shift: &GroupedShift) -> Self {
        ShiftEvent {
            label: shift.label.clone(),
            start: shift.start,
            end: shift.end,
        }
    }
}

fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}
