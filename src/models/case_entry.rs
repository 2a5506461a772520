use super::category::CaseCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseLogEntry {
    pub case_id: String,
    pub category: CaseCategory,
    pub timestamp: DateTime<Utc>,
}

impl CaseLogEntry {
    pub fn new(case_id: impl Into<String>, category: CaseCategory, timestamp: DateTime<Utc>) -> Self {
        Self {
            case_id: case_id.into(),
            category,
            timestamp,
        }
    }
}
