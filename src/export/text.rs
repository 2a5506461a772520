use crate::core::caselog::CaseLog;
use crate::errors::AppResult;
use std::path::Path;

pub fn write_text(path: &Path, log: &CaseLog) -> AppResult<()> {
    std::fs::write(path, log.to_text())?;
    Ok(())
}
