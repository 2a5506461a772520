use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of case categories tracked in the case log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseCategory {
    #[serde(rename = "NEW SUBMISSIONS")]
    NewSubmission,
    #[serde(rename = "UPDATE")]
    Update,
    #[serde(rename = "FAB SUPPORT")]
    FabSupport,
}

impl CaseCategory {
    /// Every category, in display order.
    pub const ALL: [CaseCategory; 3] = [
        CaseCategory::NewSubmission,
        CaseCategory::Update,
        CaseCategory::FabSupport,
    ];

    pub fn index(self) -> usize {
        match self {
            CaseCategory::NewSubmission => 0,
            CaseCategory::Update => 1,
            CaseCategory::FabSupport => 2,
        }
    }

    /// Canonical name, also used as the stored representation.
    pub fn canonical(self) -> &'static str {
        match self {
            CaseCategory::NewSubmission => "NEW SUBMISSIONS",
            CaseCategory::Update => "UPDATE",
            CaseCategory::FabSupport => "FAB SUPPORT",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            CaseCategory::NewSubmission => "new",
            CaseCategory::Update => "update",
            CaseCategory::FabSupport => "support",
        }
    }

    /// Multiplier used when the user does not override it.
    pub fn default_multiplier(self) -> f64 {
        match self {
            CaseCategory::NewSubmission => 1.5,
            CaseCategory::Update | CaseCategory::FabSupport => 1.0,
        }
    }

    /// Map a queue label, canonical name or CLI code to a category.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fab submission support new" | "new submissions" | "new" => {
                Some(CaseCategory::NewSubmission)
            }
            "fab submission support update" | "update" | "updates" => Some(CaseCategory::Update),
            "fab support queue" | "fab seller support" | "fab support" | "support" => {
                Some(CaseCategory::FabSupport)
            }
            _ => None,
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// One value per case category.
///
/// Backed by a fixed array so every category always has an entry and the
/// set of keys cannot drift away from [`CaseCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerCategory<T> {
    values: [T; 3],
}

impl<T> PerCategory<T> {
    pub fn from_fn(mut f: impl FnMut(CaseCategory) -> T) -> Self {
        Self {
            values: CaseCategory::ALL.map(&mut f),
        }
    }

    pub fn get(&self, category: CaseCategory) -> &T {
        &self.values[category.index()]
    }

    pub fn get_mut(&mut self, category: CaseCategory) -> &mut T {
        &mut self.values[category.index()]
    }

    pub fn set(&mut self, category: CaseCategory, value: T) {
        self.values[category.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (CaseCategory, &T)> {
        CaseCategory::ALL.into_iter().zip(self.values.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(CaseCategory, &T) -> U) -> PerCategory<U> {
        PerCategory::from_fn(|c| f(c, self.get(c)))
    }
}

impl PerCategory<f64> {
    pub fn default_multipliers() -> Self {
        Self::from_fn(CaseCategory::default_multiplier)
    }
}
