use crate::cli::ask_confirmation;
use crate::cli::parser::{CaseAction, Commands};
use crate::config::Config;
use crate::core::caselog::CaseLog;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::case_entry::CaseLogEntry;
use crate::models::category::CaseCategory;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::Table;
use chrono::{DateTime, Local, Utc};

fn parse_category(raw: &str) -> AppResult<CaseCategory> {
    CaseCategory::from_label(raw).ok_or_else(|| AppError::InvalidCategory(raw.to_string()))
}

/// `cases list` positions are 1-based.
fn to_zero_based(index: usize) -> AppResult<usize> {
    index.checked_sub(1).ok_or(AppError::InvalidCaseIndex(index))
}

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Cases { action } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = KvStore::new(&pool.conn);
        let mut log = CaseLog::load(&store)?;

        match action {
            CaseAction::Add { case_id, category } => {
                let case_id = case_id.trim();
                if case_id.is_empty() {
                    warning("Case id must not be empty");
                    return Ok(());
                }
                let category = parse_category(category)?;

                if log.insert(CaseLogEntry::new(case_id, category, now)) {
                    log.save(&store)?;
                    ttlog_soft(
                        &pool.conn,
                        "case_add",
                        case_id,
                        &format!("Logged case {} as {}", case_id, category),
                    );
                    success(format!("Case {} logged as {}", case_id, category));
                } else {
                    warning(format!("Case {} is already logged", case_id));
                }
            }

            CaseAction::List => {
                if log.is_empty() {
                    info("Case log is empty");
                } else {
                    header("CASE LOG");
                    let mut table = Table::new(["#", "Case", "Category", "Logged at"]);
                    for (i, e) in log.entries().iter().enumerate() {
                        table.add_row(vec![
                            (i + 1).to_string(),
                            e.case_id.clone(),
                            e.category.to_string(),
                            e.timestamp
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M")
                                .to_string(),
                        ]);
                    }
                    print!("{}", table.render('-'));
                    println!("\nTotal: {} case(s)", log.len());
                }
            }

            CaseAction::Set { index, category } => {
                let category = parse_category(category)?;
                log.set_category(to_zero_based(*index)?, category)?;
                log.save(&store)?;
                ttlog_soft(
                    &pool.conn,
                    "case_edit",
                    &index.to_string(),
                    &format!("Case #{} set to {}", index, category),
                );
                success(format!("Case #{} is now {}", index, category));
            }

            CaseAction::Del { index } => {
                let removed = log.delete(to_zero_based(*index)?)?;
                log.save(&store)?;
                ttlog_soft(
                    &pool.conn,
                    "case_del",
                    &removed.case_id,
                    &format!("Deleted case {}", removed.case_id),
                );
                success(format!("Case {} deleted", removed.case_id));
            }

            CaseAction::Clear { force } => {
                if log.is_empty() {
                    info("Case log is already empty");
                    return Ok(());
                }
                if !*force
                    && !ask_confirmation(&format!("Delete all {} logged case(s)?", log.len()))
                {
                    info("Operation cancelled");
                    return Ok(());
                }
                let n = log.len();
                log.clear();
                log.save(&store)?;
                ttlog_soft(
                    &pool.conn,
                    "case_clear",
                    "case_log",
                    &format!("Cleared {} case(s)", n),
                );
                success(format!("Cleared {} case(s)", n));
            }

            CaseAction::Copy => {
                if log.is_empty() {
                    info("Case log is empty");
                } else {
                    println!("{}", log.clipboard_summary());
                }
            }

            CaseAction::Export {
                format,
                file,
                force,
            } => {
                if log.is_empty() {
                    warning("Case log is empty, nothing to export");
                    return Ok(());
                }
                ExportLogic::export_cases(&log, *format, file, *force)?;
            }
        }
    }

    Ok(())
}
