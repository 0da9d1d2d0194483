use wedplan_domain::{BudgetSummary, BudgetTotals, CategorySummary, Costed, SelectedItem};

use crate::ledger::SelectionLedger;

/// Groups selected items into per-category and grand totals.
///
/// Stateless: each call reads its input fresh and keeps nothing between calls.
pub struct BudgetAggregator;

impl BudgetAggregator {
    /// Summarizes whatever the ledger holds right now.
    pub fn summarize_ledger(ledger: &dyn SelectionLedger) -> BudgetSummary {
        Self::summarize(&ledger.list_all())
    }

    /// Categories appear in the order they are first seen in `items`.
    pub fn summarize(items: &[SelectedItem]) -> BudgetSummary {
        let mut categories: Vec<CategorySummary> = Vec::new();

        for item in items {
            let row = match categories
                .iter()
                .position(|row| row.category == item.category)
            {
                Some(index) => &mut categories[index],
                None => {
                    categories.push(CategorySummary {
                        category: item.category.clone(),
                        display_name: item.category.display_name(),
                        item_count: 0,
                        totals: BudgetTotals::zero(),
                        items: Vec::new(),
                    });
                    let last = categories.len() - 1;
                    &mut categories[last]
                }
            };
            row.item_count += 1;
            row.totals = row.totals.combine(item.totals());
            row.items.push(item.clone());
        }

        let totals = categories
            .iter()
            .fold(BudgetTotals::zero(), |acc, row| acc.combine(row.totals));
        let item_count = categories.iter().map(|row| row.item_count).sum();

        BudgetSummary {
            categories,
            totals,
            item_count,
        }
    }

    /// Grand totals summed item by item, skipping the category grouping.
    pub fn direct_totals(items: &[SelectedItem]) -> BudgetTotals {
        items
            .iter()
            .fold(BudgetTotals::zero(), |acc, item| acc.combine(item.totals()))
    }
}
