use crate::db::pool::DbPool;
use crate::db::store::{CASE_LOG_KEY, KvStore, SCHEDULE_KEY};
use crate::errors::AppResult;
use crate::models::case_entry::CaseLogEntry;
use crate::models::shift::ShiftEvent;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let store = KvStore::new(&pool.conn);
    let keys = store.keys()?;
    let fmt_keys = if keys.is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        keys.join(", ")
    };
    println!("{}• Stored keys:{} {}", CYAN, RESET, fmt_keys);

    //
    // 3) SCHEDULE / CASE LOG SIZES
    //
    let events: Vec<ShiftEvent> = store.load_json(SCHEDULE_KEY)?.unwrap_or_default();
    let cases: Vec<CaseLogEntry> = store.load_json(CASE_LOG_KEY)?.unwrap_or_default();
    println!(
        "{}• Shift events:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        events.len(),
        RESET
    );
    println!(
        "{}• Logged cases:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        cases.len(),
        RESET
    );

    //
    // 4) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
