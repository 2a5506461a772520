use crate::errors::AppResult;
use crate::models::case_entry::CaseLogEntry;
use std::path::Path;

/// Write the case log as pretty-printed JSON.
pub fn write_json(path: &Path, entries: &[CaseLogEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
