//! Shared traits and numeric helpers for budget primitives.

use crate::summary::BudgetTotals;

/// Identifier assigned to catalog entries and selected items.
///
/// Unique only within a category. Seed entries use small integers, entries
/// created at runtime use timestamp-derived values.
pub type ItemId = u64;

/// Supplies the estimated and actual cost of a budget line.
pub trait Costed {
    fn estimated_cost(&self) -> u64;
    fn actual_cost(&self) -> u64;

    /// Signed `estimated - actual`.
    fn variance(&self) -> i64 {
        signed_variance(self.estimated_cost(), self.actual_cost())
    }

    /// Line-level totals with the three-way variance classification.
    fn totals(&self) -> BudgetTotals {
        BudgetTotals::from_parts(self.estimated_cost(), self.actual_cost())
    }
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Computes `estimated - actual`, saturating at the bounds of `i64`.
pub fn signed_variance(estimated: u64, actual: u64) -> i64 {
    let diff = i128::from(estimated) - i128::from(actual);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
