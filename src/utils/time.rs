//! Time utilities: fixed-offset zones, clock override, minute formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Utc};

/// Build a fixed UTC offset from a whole number of hours (negative = west).
/// No daylight-saving adjustment is ever applied.
pub fn fixed_offset(hours: i32) -> AppResult<FixedOffset> {
    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| AppError::Config(format!("UTC offset out of range: {hours}h")))
}

/// The schedule's home zone, labelled "PST" but held at UTC-8 all year round.
pub const PST_OFFSET_HOURS: i32 = -8;

/// Resolve "now", honouring the hidden `--now` override used by tests.
pub fn resolve_now(override_now: Option<&str>) -> AppResult<DateTime<Utc>> {
    match override_now {
        Some(s) => parse_instant(s),
        None => Ok(Utc::now()),
    }
}

pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn format_in(dt: DateTime<Utc>, offset: &FixedOffset) -> String {
    dt.with_timezone(offset).format("%Y-%m-%d %H:%M").to_string()
}
