use crate::errors::AppResult;
use crate::models::case_entry::CaseLogEntry;
use ::csv::Writer;
use std::path::Path;

/// Write the case log as CSV.
pub fn write_csv(path: &Path, entries: &[CaseLogEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["case_id", "category", "timestamp"])?;

    for e in entries {
        wtr.write_record([
            e.case_id.as_str(),
            e.category.canonical(),
            e.timestamp.to_rfc3339().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
