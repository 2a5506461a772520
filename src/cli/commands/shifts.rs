use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::reminder::plan_reminders;
use crate::core::shifts::window::{self, ShiftStatus};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::{KvStore, REMINDERS_KEY};
use crate::errors::AppResult;
use crate::models::shift::GroupedShift;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::hours;
use crate::utils::table::Table;
use crate::utils::time::format_in;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::io::Read;
use std::{fs, io};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Shifts { action } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = KvStore::new(&pool.conn);

        match action {
            ShiftAction::Import { file } => import(&pool, &store, cfg, file, now)?,
            ShiftAction::List { count } => {
                let count = count.unwrap_or(cfg.displayed_shifts);
                match Core::load_schedule(&store, cfg)? {
                    None => info("No shift data available"),
                    Some(schedule) => {
                        let shown = Core::display_window(&schedule, cfg, count, now);
                        if shown.is_empty() {
                            info("No current or upcoming shifts");
                        } else {
                            print!("{}", render_window(&shown, now, &cfg.reference_offset()?));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn import(
    pool: &DbPool,
    store: &KvStore,
    cfg: &Config,
    file: &str,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let text = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file)?
    };

    let summary = Core::import_schedule(store, cfg, &text)?;

    if summary.skipped > 0 {
        warning(format!(
            "Skipped {} calendar block(s) without a valid start, end and summary",
            summary.skipped
        ));
    }

    if summary.imported == 0 {
        warning("No shift found in the calendar data, previous schedule kept");
        return Ok(());
    }

    success(format!("Imported {} calendar event(s)", summary.imported));
    ttlog_soft(
        &pool.conn,
        "import",
        file,
        &format!(
            "Imported {} event(s), skipped {}",
            summary.imported, summary.skipped
        ),
    );

    if store.get_flag(REMINDERS_KEY)?
        && let Some(schedule) = Core::load_schedule(store, cfg)?
    {
        let plan = plan_reminders(&schedule, now, &cfg.reminder_policy()?);
        info(format!(
            "Reminders are on: {} reminder(s) planned for the new schedule",
            plan.len()
        ));
    }

    Ok(())
}

/// Shift label with its split half, e.g. `Fab Queue (Part 1)`.
pub(crate) fn display_label(shift: &GroupedShift) -> String {
    match shift.split_part() {
        Some(part) => format!("{} ({})", shift.label, part.label()),
        None => shift.label.clone(),
    }
}

fn format_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Window table; times shown in the reference zone and in local time.
pub(crate) fn render_window(
    shown: &[GroupedShift],
    now: DateTime<Utc>,
    reference: &FixedOffset,
) -> String {
    let highlighted = window::highlighted_index(shown, now);

    let mut table = Table::new([
        "#",
        "Shift",
        "Status",
        "Start (PST)",
        "End (PST)",
        "Start (local)",
        "End (local)",
        "Hours",
    ]);

    for (i, shift) in shown.iter().enumerate() {
        let status = window::status(shift, now);
        let marker = if Some(i) == highlighted && status != ShiftStatus::Past {
            format!("▶ {}", status.label())
        } else {
            status.label().to_string()
        };
        let color = color_for_status(status);

        table.add_row(vec![
            (i + 1).to_string(),
            paint(color, &display_label(shift)),
            paint(color, &marker),
            format_in(shift.start, reference),
            format_in(shift.end, reference),
            format_local(shift.start),
            format_local(shift.end),
            hours(shift.duration_hours()),
        ]);
    }

    table.render('-')
}
