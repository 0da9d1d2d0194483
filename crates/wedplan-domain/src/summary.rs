//! Derived budget summaries. Recomputed on demand, never stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::CategoryTag;
use crate::common::signed_variance;
use crate::item::SelectedItem;

/// Which side of the estimate a total landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Spent less than estimated (variance > 0).
    UnderBudget,
    /// Spent more than estimated (variance < 0).
    OverBudget,
    /// Spent exactly the estimate.
    Exact,
}

impl VarianceStatus {
    pub fn classify(variance: i64) -> Self {
        match variance.signum() {
            1 => VarianceStatus::UnderBudget,
            -1 => VarianceStatus::OverBudget,
            _ => VarianceStatus::Exact,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VarianceStatus::UnderBudget => "under budget",
            VarianceStatus::OverBudget => "over budget",
            VarianceStatus::Exact => "exact",
        }
    }
}

impl fmt::Display for VarianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated and actual spend with the signed variance between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub estimated: u64,
    pub actual: u64,
    pub variance: i64,
    pub status: VarianceStatus,
}

impl BudgetTotals {
    pub fn from_parts(estimated: u64, actual: u64) -> Self {
        let variance = signed_variance(estimated, actual);
        Self {
            estimated,
            actual,
            variance,
            status: VarianceStatus::classify(variance),
        }
    }

    pub fn zero() -> Self {
        Self::from_parts(0, 0)
    }

    /// Adds another set of totals, saturating on overflow.
    pub fn combine(self, other: BudgetTotals) -> Self {
        Self::from_parts(
            self.estimated.saturating_add(other.estimated),
            self.actual.saturating_add(other.actual),
        )
    }
}

impl Default for BudgetTotals {
    fn default() -> Self {
        Self::zero()
    }
}

/// One row of the summary: everything selected within a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: CategoryTag,
    pub display_name: String,
    pub item_count: usize,
    pub totals: BudgetTotals,
    pub items: Vec<SelectedItem>,
}

/// Category rows in first-seen order plus grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub categories: Vec<CategorySummary>,
    pub totals: BudgetTotals,
    pub item_count: usize,
}

impl BudgetSummary {
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            totals: BudgetTotals::zero(),
            item_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, tag: &CategoryTag) -> Option<&CategorySummary> {
        self.categories.iter().find(|row| &row.category == tag)
    }
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self::empty()
    }
}
