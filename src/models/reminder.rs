use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReminderKind {
    ClockIn,
    ClockOut,
    /// Clock-out of the first half of a midnight-split shift.
    FirstPartEnding,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::ClockIn => "clock-in",
            ReminderKind::ClockOut => "clock-out",
            ReminderKind::FirstPartEnding => "first-part-end",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ReminderKind::ClockIn => {
                "Your shift is starting, remember to:\n\n- Clock-in on the workforce app\n- Clock-in on the team chat"
            }
            ReminderKind::ClockOut => {
                "Your shift is ending, remember to:\n\n- Clock-out on the workforce app\n- Clock-out on the team chat\n- Send your shift report"
            }
            ReminderKind::FirstPartEnding => {
                "First part of your shift is ending.\n\nPlease submit your shift report for this part and continue with the next part of your shift."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub fire_at: DateTime<Utc>,
    pub label: String,
    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,
}
