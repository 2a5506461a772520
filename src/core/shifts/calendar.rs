//! Calendar text parsing.
//!
//! The schedule export is a loose iCalendar dump: repeated
//! `BEGIN:VEVENT ... DTSTART ... DTEND ... SUMMARY ...` blocks, often pasted
//! straight from a web page. Anything that is not a complete event block is
//! skipped and only counted.

use crate::models::shift::ShiftEvent;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

static DTSTART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"DTSTART(?:;[^:\r\n]*)?:(\d{8}T\d{6})(Z)?").expect("valid DTSTART pattern")
});
static DTEND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"DTEND(?:;[^:\r\n]*)?:(\d{8}T\d{6})(Z)?").expect("valid DTEND pattern")
});
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SUMMARY:(.+)").expect("valid SUMMARY pattern"));

const BLOCK_MARKER: &str = "BEGIN:VEVENT";

/// Result of parsing a calendar dump.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CalendarParse {
    pub events: Vec<ShiftEvent>,
    /// Blocks that were missing a field or had an unusable interval.
    pub skipped: usize,
}

/// Parse every event block in `text`.
///
/// Local timestamps are read in `source_offset`; a trailing `Z` marks UTC.
/// Output keeps input order.
pub fn parse_calendar(text: &str, source_offset: &FixedOffset) -> CalendarParse {
    let mut out = CalendarParse::default();

    for block in text.split(BLOCK_MARKER).skip(1) {
        match parse_block(block, source_offset) {
            Some(ev) => out.events.push(ev),
            None => out.skipped += 1,
        }
    }

    out
}

fn parse_block(block: &str, source_offset: &FixedOffset) -> Option<ShiftEvent> {
    let start = capture_instant(&DTSTART_RE, block, source_offset)?;
    let end = capture_instant(&DTEND_RE, block, source_offset)?;

    let label = SUMMARY_RE.captures(block)?.get(1)?.as_str().trim();
    if label.is_empty() || end <= start {
        return None;
    }

    Some(ShiftEvent {
        label: label.to_string(),
        start,
        end,
    })
}

fn capture_instant(re: &Regex, block: &str, source_offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let caps = re.captures(block)?;
    let naive = NaiveDateTime::parse_from_str(caps.get(1)?.as_str(), "%Y%m%dT%H%M%S").ok()?;

    if caps.get(2).is_some() {
        return Some(Utc.from_utc_datetime(&naive));
    }

    source_offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
