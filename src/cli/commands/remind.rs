use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::reminder::{ReminderPolicy, ReminderScheduler, ScheduledReminder};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::{KvStore, REMINDERS_KEY, SCHEDULE_KEY};
use crate::errors::AppResult;
use crate::models::reminder::Reminder;
use crate::ui::messages::{header, info, reminder_banner, success, warning};
use crate::utils::table::Table;
use crate::utils::time::format_in;
use chrono::{DateTime, FixedOffset, Utc};
use std::thread;
use std::time::Duration as StdDuration;

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Remind { on, off, watch } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = KvStore::new(&pool.conn);
        let policy = cfg.reminder_policy()?;
        let reference = cfg.reference_offset()?;

        if *off {
            store.set_flag(REMINDERS_KEY, false)?;
            ttlog_soft(&pool.conn, "reminders_off", "reminders", "Reminders disabled");
            success("Reminders disabled, pending reminders cancelled");
            return Ok(());
        }

        if *on {
            store.set_flag(REMINDERS_KEY, true)?;
            ttlog_soft(&pool.conn, "reminders_on", "reminders", "Reminders enabled");
            success("Reminders enabled");
        }

        if !store.get_flag(REMINDERS_KEY)? {
            info("Reminders are off. Enable them with `shiftlogger remind --on`.");
            return Ok(());
        }

        if *watch {
            return watch_loop(&pool, &store, cfg, &policy, &reference);
        }

        let mut scheduler = ReminderScheduler::new();
        match Core::load_schedule(&store, cfg)? {
            None => info("No shift data available"),
            Some(schedule) => {
                let pending = scheduler.reschedule_from(&schedule, now, &policy);
                print_pending(pending, &reference);
            }
        }
    }

    Ok(())
}

fn print_pending(pending: &[ScheduledReminder], reference: &FixedOffset) {
    if pending.is_empty() {
        info("No reminder due for the current or next shift");
        return;
    }

    header("PENDING REMINDERS");
    let mut table = Table::new(["Fires at (PST)", "Kind", "Shift"]);
    for p in pending {
        table.add_row(vec![
            format_in(p.reminder.fire_at, reference),
            p.reminder.kind.as_str().to_string(),
            p.reminder.label.clone(),
        ]);
    }
    print!("{}", table.render('-'));
}

fn fire(pool: &DbPool, reminder: &Reminder, reference: &FixedOffset) {
    reminder_banner(
        reminder,
        &format_in(reminder.shift_start, reference),
        &format_in(reminder.shift_end, reference),
    );
    ttlog_soft(
        &pool.conn,
        "reminder",
        reminder.kind.as_str(),
        &format!("{} ({})", reminder.label, reminder.kind.as_str()),
    );
}

/// Foreground loop: fires due reminders and replans whenever the stored
/// schedule changes or the pending set runs dry. Runs on the wall clock.
fn watch_loop(
    pool: &DbPool,
    store: &KvStore,
    cfg: &Config,
    policy: &ReminderPolicy,
    reference: &FixedOffset,
) -> AppResult<()> {
    let poll = StdDuration::from_secs(cfg.watch_poll_seconds.max(1));
    let mut scheduler = ReminderScheduler::new();
    let mut last_raw: Option<String> = None;
    let mut first = true;

    info("Watching for reminders, press Ctrl+C to stop");

    loop {
        let now = Utc::now();

        if !store.get_flag(REMINDERS_KEY)? {
            let dropped = scheduler.cancel_all();
            info(format!(
                "Reminders turned off, {} pending reminder(s) cancelled",
                dropped
            ));
            return Ok(());
        }

        let raw = store.get(SCHEDULE_KEY)?;
        if first || raw != last_raw {
            first = false;
            last_raw = raw;
            match Core::load_schedule(store, cfg)? {
                Some(schedule) => {
                    let pending = scheduler.reschedule_from(&schedule, now, policy);
                    print_pending(pending, reference);
                }
                None => {
                    scheduler.cancel_all();
                    warning("No shift data available, waiting for an import");
                }
            }
        }

        let due = scheduler.take_due(now);
        if !due.is_empty() {
            for reminder in &due {
                fire(pool, reminder, reference);
            }
            if scheduler.pending().is_empty()
                && let Some(schedule) = Core::load_schedule(store, cfg)?
            {
                scheduler.reschedule_from(&schedule, now, policy);
            }
        }

        let sleep_for = scheduler
            .next_due()
            .and_then(|at| (at - Utc::now()).to_std().ok())
            .map_or(poll, |until| until.min(poll));
        thread::sleep(sleep_for);
    }
}
