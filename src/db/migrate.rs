use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
/// It doubles as the migration ledger (`operation = 'migration_applied'`).
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key/value table holding the schedule, the case log and the reminder flag.
fn migrate_create_store(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_store";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created key/value store table")?;
    success(format!("Migration applied: {} → created 'store' table", version));
    Ok(())
}

/// Index used by `log --print` and the per-operation audit queries.
fn migrate_index_log_operation(conn: &Connection) -> Result<()> {
    let version = "20250412_0002_index_log_operation";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")?;

    mark_applied(conn, version, "Indexed log.operation")?;
    success(format!(
        "Migration applied: {} → indexed log.operation",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_store(conn)?;
    migrate_index_log_operation(conn)?;
    Ok(())
}
