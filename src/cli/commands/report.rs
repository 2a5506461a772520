use crate::cli::commands::shifts::display_label;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::caselog::CaseLog;
use crate::core::logic::Core;
use crate::core::productivity::{ProductivityReport, sanitize_multiplier};
use crate::core::shifts::window::{self, ShiftStatus};
use crate::db::pool::DbPool;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::category::{CaseCategory, PerCategory};
use crate::models::shift::GroupedShift;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, mins2readable, rate};
use crate::utils::table::Table;
use crate::utils::time::format_in;
use chrono::{DateTime, Utc};

/// Parse one `CATEGORY=VALUE` override.
pub fn parse_multiplier(raw: &str) -> AppResult<(CaseCategory, f64)> {
    let invalid = || AppError::InvalidMultiplier(raw.to_string());

    let (cat, value) = raw.split_once('=').ok_or_else(invalid)?;
    let category = CaseCategory::from_label(cat).ok_or_else(invalid)?;
    let value: f64 = value.trim().parse().map_err(|_| invalid())?;

    Ok((category, value))
}

/// Apply every override on top of the configured multipliers.
pub fn resolve_multipliers(
    base: PerCategory<f64>,
    overrides: &[String],
) -> AppResult<PerCategory<f64>> {
    let mut multipliers = base;
    for raw in overrides {
        let (category, value) = parse_multiplier(raw)?;
        let clamped = sanitize_multiplier(category, value);
        if clamped != value {
            warning(format!(
                "Multiplier for {} adjusted from {} to {}",
                category, value, clamped
            ));
        }
        multipliers.set(category, clamped);
    }
    Ok(multipliers)
}

/// Shift reported on by default: the running one, else the latest finished,
/// else the next upcoming.
fn default_shift(shown: &[GroupedShift], now: DateTime<Utc>) -> Option<&GroupedShift> {
    shown
        .iter()
        .find(|s| window::status(s, now) == ShiftStatus::Current)
        .or_else(|| {
            shown
                .iter()
                .rev()
                .find(|s| window::status(s, now) == ShiftStatus::Past)
        })
        .or_else(|| shown.first())
}

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Report {
        shift,
        deduct,
        multipliers,
    } = cmd
    {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = KvStore::new(&pool.conn);

        let schedule = Core::load_schedule(&store, cfg)?.ok_or(AppError::NoShiftData)?;
        let shown = Core::display_window(&schedule, cfg, cfg.displayed_shifts, now);

        let selected = match shift {
            Some(n) => n
                .checked_sub(1)
                .and_then(|i| shown.get(i))
                .ok_or(AppError::InvalidShiftIndex(*n))?,
            None => default_shift(&shown, now).ok_or(AppError::NoShiftData)?,
        };

        let multipliers =
            resolve_multipliers(cfg.multipliers.to_per_category(), multipliers)?;
        let deduction = deduct.unwrap_or(0);
        if deduction < 0 {
            warning("A negative deduction counts as no deduction");
        }

        let log = CaseLog::load(&store)?;
        let report = Core::shift_report(selected, &log, deduction, multipliers);

        let reference = cfg.reference_offset()?;
        header(format!(
            "PRODUCTIVITY: {} ({} → {})",
            display_label(selected),
            format_in(selected.start, &reference),
            format_in(selected.end, &reference)
        ));

        if log.is_empty() {
            info("Case log is empty, nothing to allocate");
        }

        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ProductivityReport) {
    let mut table = Table::new(["Category", "Cases", "Multiplier", "Time", "Cases/h"]);

    for (category, stats) in report.categories.iter() {
        table.add_row(vec![
            category.to_string(),
            colorize_optional(&stats.count.to_string()),
            format!("{:.2}", stats.multiplier),
            colorize_optional(&mins2readable(stats.minutes(), false, false)),
            colorize_optional(&rate(stats.rate_per_hour)),
        ]);
    }

    print!("{}", table.render('-'));
    println!();
    println!(
        "Effective time : {}",
        mins2readable(report.effective_minutes, false, false)
    );
    println!("Total cases    : {}", report.total_count);
    println!(
        "{} : {}",
        bold("Actions/hour  "),
        bold(&rate(report.actions_per_hour))
    );
}
