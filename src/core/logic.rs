use crate::config::Config;
use crate::core::caselog::CaseLog;
use crate::core::productivity::{self, ProductivityInput, ProductivityReport};
use crate::core::shifts::{self, calendar, window};
use crate::db::store::{KvStore, SCHEDULE_KEY};
use crate::errors::AppResult;
use crate::models::category::PerCategory;
use crate::models::shift::{GroupedShift, ShiftEvent};
use chrono::{DateTime, Utc};

/// Outcome of importing a calendar dump into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

pub struct Core;

impl Core {
    /// Parse `text` and replace the stored schedule with the result.
    /// An import that yields no event keeps the previous schedule.
    pub fn import_schedule(store: &KvStore, cfg: &Config, text: &str) -> AppResult<ImportSummary> {
        let parsed = calendar::parse_calendar(text, &cfg.source_offset()?);

        if !parsed.events.is_empty() {
            store.save_json(SCHEDULE_KEY, &parsed.events)?;
        }

        Ok(ImportSummary {
            imported: parsed.events.len(),
            skipped: parsed.skipped,
        })
    }

    /// Stored events, or `None` when nothing was ever imported.
    pub fn load_events(store: &KvStore) -> AppResult<Option<Vec<ShiftEvent>>> {
        store.load_json(SCHEDULE_KEY)
    }

    /// Grouped and midnight-split schedule; `None` when nothing is stored.
    pub fn load_schedule(store: &KvStore, cfg: &Config) -> AppResult<Option<Vec<GroupedShift>>> {
        let Some(events) = Self::load_events(store)? else {
            return Ok(None);
        };
        Ok(Some(shifts::build_schedule(&events, &cfg.reference_offset()?)))
    }

    pub fn display_window(
        schedule: &[GroupedShift],
        cfg: &Config,
        count: usize,
        now: DateTime<Utc>,
    ) -> Vec<GroupedShift> {
        window::current_and_next(schedule, count, now, cfg.lookback_days)
    }

    /// Productivity of `shift` using the whole case log.
    pub fn shift_report(
        shift: &GroupedShift,
        log: &CaseLog,
        deduction_minutes: i64,
        multipliers: PerCategory<f64>,
    ) -> ProductivityReport {
        let input = ProductivityInput {
            total_minutes: shift.duration_minutes(),
            deduction_minutes,
            counts: log.counts(),
            multipliers,
        };
        productivity::allocate(&input)
    }
}
