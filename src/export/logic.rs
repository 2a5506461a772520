use super::{ExportFormat, csv, fs_utils, json, notify_export_success, text};
use crate::core::caselog::CaseLog;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the case log to `file` in the requested format.
    pub fn export_cases(
        log: &CaseLog,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "directory does not exist: {}",
                parent.display()
            )));
        }

        fs_utils::ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => csv::write_csv(&path, log.entries())?,
            ExportFormat::Json => json::write_json(&path, log.entries())?,
            ExportFormat::Txt => text::write_text(&path, log)?,
        }

        notify_export_success(&format!("Case log ({})", format.as_str()), &path);
        Ok(())
    }
}
