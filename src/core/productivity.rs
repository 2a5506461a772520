//! Weighted allocation of shift time across case categories.

use crate::models::category::{CaseCategory, PerCategory};

pub const MIN_MULTIPLIER: f64 = 0.05;
pub const MAX_MULTIPLIER: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct ProductivityInput {
    /// Whole length of the shift, in minutes.
    pub total_minutes: i64,
    /// Minutes spent on meetings, outages and other non-case work.
    pub deduction_minutes: i64,
    pub counts: PerCategory<u32>,
    pub multipliers: PerCategory<f64>,
}

impl ProductivityInput {
    pub fn new(total_minutes: i64, counts: PerCategory<u32>) -> Self {
        Self {
            total_minutes,
            deduction_minutes: 0,
            counts,
            multipliers: PerCategory::default_multipliers(),
        }
    }

    /// Shift minutes left once the deduction is clamped into `[0, total]`.
    pub fn effective_minutes(&self) -> i64 {
        let total = self.total_minutes.max(0);
        total - self.deduction_minutes.clamp(0, total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryStats {
    pub count: u32,
    pub multiplier: f64,
    pub weighted: f64,
    /// Unrounded share of the effective shift time.
    pub exact_minutes: f64,
    pub rate_per_hour: f64,
}

impl CategoryStats {
    /// Allocated time rounded to the nearest minute, as displayed.
    pub fn minutes(&self) -> i64 {
        self.exact_minutes.round() as i64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityReport {
    pub effective_minutes: i64,
    pub total_count: u32,
    pub total_weighted: f64,
    pub actions_per_hour: f64,
    pub categories: PerCategory<CategoryStats>,
}

/// Clamp a user-supplied multiplier into the accepted range.
/// Non-finite input falls back to the category default.
pub fn sanitize_multiplier(category: CaseCategory, value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
    } else {
        category.default_multiplier()
    }
}

pub fn allocate(input: &ProductivityInput) -> ProductivityReport {
    let effective = input.effective_minutes();

    let weighted = input.counts.map(|c, &count| {
        if count > 0 {
            count as f64 * sanitize_multiplier(c, *input.multipliers.get(c))
        } else {
            0.0
        }
    });
    let total_weighted: f64 = weighted.iter().map(|(_, w)| *w).sum();

    let categories = PerCategory::from_fn(|c| {
        let count = *input.counts.get(c);
        let w = *weighted.get(c);

        let exact_minutes = if total_weighted > 0.0 {
            effective as f64 * w / total_weighted
        } else {
            0.0
        };
        let rate_per_hour = if exact_minutes > 0.0 {
            count as f64 / (exact_minutes / 60.0)
        } else {
            0.0
        };

        CategoryStats {
            count,
            multiplier: sanitize_multiplier(c, *input.multipliers.get(c)),
            weighted: w,
            exact_minutes,
            rate_per_hour,
        }
    });

    let total_count: u32 = input.counts.iter().map(|(_, n)| *n).sum();
    let actions_per_hour = if effective > 0 {
        total_count as f64 / (effective as f64 / 60.0)
    } else {
        0.0
    };

    ProductivityReport {
        effective_minutes: effective,
        total_count,
        total_weighted,
        actions_per_hour,
        categories,
    }
}
