//! Key/value string store on top of the `store` table.
//!
//! Every persisted collection is read and written wholesale as one JSON
//! value under a single key.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parsed calendar events (`Vec<ShiftEvent>`).
pub const SCHEDULE_KEY: &str = "schedule";
/// Case log (`Vec<CaseLogEntry>`).
pub const CASE_LOG_KEY: &str = "case_log";
/// Reminder toggle, `"true"` / `"false"`.
pub const REMINDERS_KEY: &str = "reminders_enabled";

pub struct KvStore<'a> {
    conn: &'a Connection,
}

impl<'a> KvStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Returns true when a value was actually removed.
    pub fn remove(&self, key: &str) -> AppResult<bool> {
        let n = self.conn.execute("DELETE FROM store WHERE key = ?1", [key])?;
        Ok(n > 0)
    }

    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    pub fn get_flag(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some_and(|v| v == "true"))
    }

    pub fn set_flag(&self, key: &str, value: bool) -> AppResult<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}
