//! Case log: the ordered list of completed cases.

use crate::db::store::{CASE_LOG_KEY, KvStore};
use crate::errors::{AppError, AppResult};
use crate::models::case_entry::CaseLogEntry;
use crate::models::category::{CaseCategory, PerCategory};
use chrono::Local;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseLog {
    entries: Vec<CaseLogEntry>,
}

impl CaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<CaseLogEntry>) -> Self {
        let mut log = Self::new();
        for e in entries {
            log.insert(e);
        }
        log
    }

    pub fn load(store: &KvStore) -> AppResult<Self> {
        let entries: Vec<CaseLogEntry> = store.load_json(CASE_LOG_KEY)?.unwrap_or_default();
        Ok(Self { entries })
    }

    pub fn save(&self, store: &KvStore) -> AppResult<()> {
        store.save_json(CASE_LOG_KEY, &self.entries)
    }

    pub fn entries(&self) -> &[CaseLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, case_id: &str) -> bool {
        self.entries.iter().any(|e| e.case_id == case_id)
    }

    /// Append an entry. A case id already present is ignored; returns
    /// whether the entry was added.
    pub fn insert(&mut self, entry: CaseLogEntry) -> bool {
        if self.contains(&entry.case_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn set_category(&mut self, index: usize, category: CaseCategory) -> AppResult<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(AppError::InvalidCaseIndex(index + 1))?;
        entry.category = category;
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> AppResult<CaseLogEntry> {
        if index >= self.entries.len() {
            return Err(AppError::InvalidCaseIndex(index + 1));
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn counts(&self) -> PerCategory<u32> {
        let mut counts = PerCategory::<u32>::default();
        for e in &self.entries {
            *counts.get_mut(e.category) += 1;
        }
        counts
    }

    /// One line per category with its case ids, ready to paste into a report.
    pub fn clipboard_summary(&self) -> String {
        CaseCategory::ALL
            .iter()
            .filter_map(|&c| {
                let ids: Vec<&str> = self
                    .entries
                    .iter()
                    .filter(|e| e.category == c)
                    .map(|e| e.case_id.as_str())
                    .collect();
                if ids.is_empty() {
                    None
                } else {
                    Some(format!("{}: {}", c, ids.join(", ")))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain-text listing, one block per case, local time.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                format!(
                    "Case Number: {}\nCase Type: {}\nTime: {}",
                    e.case_id,
                    e.category,
                    e.timestamp
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M:%S")
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
