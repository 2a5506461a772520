use crate::cli::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Remove every stored key: schedule, case log and reminder toggle.
/// The audit log is kept.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = KvStore::new(&pool.conn);

        let keys = store.keys()?;
        if keys.is_empty() {
            info("Nothing to reset");
            return Ok(());
        }

        if !*force
            && !ask_confirmation("This removes the stored schedule, case log and reminder state.")
        {
            info("Operation cancelled");
            return Ok(());
        }

        for key in &keys {
            store.remove(key)?;
        }

        ttlog_soft(
            &pool.conn,
            "reset",
            "store",
            &format!("Removed keys: {}", keys.join(", ")),
        );
        success(format!("Reset completed, {} stored value(s) removed", keys.len()));
    }

    Ok(())
}
