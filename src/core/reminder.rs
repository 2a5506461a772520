//! Clock-in / clock-out reminders for the current and next shift.

use crate::models::reminder::{Reminder, ReminderKind};
use crate::models::shift::{GroupedShift, SplitPart};
use chrono::{DateTime, Duration, Utc};

/// Reminders held by a scheduler at any one time.
pub const MAX_PENDING: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ReminderPolicy {
    /// How long before the shift boundary the reminder fires.
    pub lead: Duration,
    /// Reminders closer than this to `now` are not scheduled at all.
    pub min_delay: Duration,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            lead: Duration::minutes(2),
            min_delay: Duration::seconds(60),
        }
    }
}

/// Compute the reminders for the active shift (if any) and the next one.
///
/// `shifts` must already be grouped and split. The result is ordered by
/// firing time.
pub fn plan_reminders(
    shifts: &[GroupedShift],
    now: DateTime<Utc>,
    policy: &ReminderPolicy,
) -> Vec<Reminder> {
    let mut relevant: Vec<&GroupedShift> = shifts
        .iter()
        .filter(|s| s.is_active_at(now) || s.start > now)
        .collect();
    relevant.sort_by_key(|s| s.start);
    relevant.truncate(2);

    let mut out = Vec::new();

    for (i, shift) in relevant.iter().enumerate() {
        let part = shift.split_part();

        let clock_in = shift.start - policy.lead;
        if !shift.is_active_at(now)
            && part != Some(SplitPart::Second)
            && clock_in - now > policy.min_delay
        {
            out.push(reminder_for(shift, ReminderKind::ClockIn, clock_in));
        }

        let clock_out = shift.end - policy.lead;
        if clock_out - now > policy.min_delay {
            let continues = relevant.get(i + 1).is_some_and(|next| shift.continues_into(next));
            let kind = if continues {
                ReminderKind::FirstPartEnding
            } else {
                ReminderKind::ClockOut
            };
            out.push(reminder_for(shift, kind, clock_out));
        }
    }

    out.sort_by_key(|r| r.fire_at);
    out
}

fn reminder_for(shift: &GroupedShift, kind: ReminderKind, fire_at: DateTime<Utc>) -> Reminder {
    Reminder {
        kind,
        fire_at,
        label: shift.label.clone(),
        shift_start: shift.start,
        shift_end: shift.end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderHandle(u64);

#[derive(Debug, Clone)]
pub struct ScheduledReminder {
    pub handle: ReminderHandle,
    pub reminder: Reminder,
}

/// Owns the pending reminders.
///
/// Every reschedule cancels what is pending before registering the new
/// plan, so a stale reminder from an older schedule can never fire.
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    pending: Vec<ScheduledReminder>,
    next_handle: u64,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending set with the earliest reminders of `plan`.
    pub fn reschedule(&mut self, plan: Vec<Reminder>) -> &[ScheduledReminder] {
        self.cancel_all();

        let mut plan = plan;
        plan.sort_by_key(|r| r.fire_at);

        for reminder in plan.into_iter().take(MAX_PENDING) {
            self.register(reminder);
        }

        &self.pending
    }

    /// Plan from `shifts` and reschedule in one step.
    pub fn reschedule_from(
        &mut self,
        shifts: &[GroupedShift],
        now: DateTime<Utc>,
        policy: &ReminderPolicy,
    ) -> &[ScheduledReminder] {
        let plan = plan_reminders(shifts, now, policy);
        self.reschedule(plan)
    }

    fn register(&mut self, reminder: Reminder) -> ReminderHandle {
        self.next_handle += 1;
        let handle = ReminderHandle(self.next_handle);
        self.pending.push(ScheduledReminder { handle, reminder });
        handle
    }

    pub fn cancel(&mut self, handle: ReminderHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Cancel everything still pending; returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn pending(&self) -> &[ScheduledReminder] {
        &self.pending
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().map(|p| p.reminder.fire_at).min()
    }

    /// Remove and return every reminder due at `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let (mut due, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.reminder.fire_at <= now);
        self.pending = keep;

        due.sort_by_key(|p| p.reminder.fire_at);
        due.into_iter().map(|p| p.reminder).collect()
    }
}
