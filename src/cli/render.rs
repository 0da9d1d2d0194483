//! Text layouts for summaries and listings.

use wedplan_core::{
    format::{format_amount, format_variance},
    CatalogRow,
};
use wedplan_domain::{BudgetSummary, BudgetTotals, Costed, Displayable, SelectedItem};

const LABEL_WIDTH: usize = 16;
const COUNT_WIDTH: usize = 5;
const AMOUNT_WIDTH: usize = 15;

fn summary_row(label: &str, count: &str, estimated: &str, actual: &str, variance: &str) -> String {
    format!(
        "{label:<LABEL_WIDTH$} {count:>COUNT_WIDTH$} {estimated:>AMOUNT_WIDTH$} {actual:>AMOUNT_WIDTH$}  {variance}"
    )
}

fn totals_row(label: &str, count: usize, totals: &BudgetTotals, symbol: &str) -> String {
    summary_row(
        label,
        &count.to_string(),
        &format_amount(totals.estimated, symbol),
        &format_amount(totals.actual, symbol),
        &format_variance(totals, symbol),
    )
}

// `est ₩1,000 / act ₩900` for anything with both costs.
fn cost_pair(line: &impl Costed, symbol: &str) -> String {
    format!(
        "est {} / act {}",
        format_amount(line.estimated_cost(), symbol),
        format_amount(line.actual_cost(), symbol),
    )
}

fn item_row(item: &SelectedItem, symbol: &str) -> String {
    format!(
        "    - {}  {}  {}",
        item.name,
        cost_pair(item, symbol),
        format_variance(&item.totals(), symbol),
    )
}

/// One row per category in first-selected order with its items listed
/// beneath it, then the grand total.
pub fn summary_table(summary: &BudgetSummary, symbol: &str) -> String {
    if summary.is_empty() {
        return "No items selected yet.".to_string();
    }

    let mut lines = Vec::with_capacity(summary.categories.len() + summary.item_count + 2);
    lines.push(summary_row("Category", "Items", "Estimated", "Actual", "Variance"));
    for category in &summary.categories {
        lines.push(totals_row(
            &category.display_name,
            category.item_count,
            &category.totals,
            symbol,
        ));
        lines.extend(category.items.iter().map(|item| item_row(item, symbol)));
    }
    lines.push(totals_row("Total", summary.item_count, &summary.totals, symbol));
    lines.join("\n")
}

pub fn catalog_line(row: &CatalogRow, symbol: &str) -> String {
    let mark = if row.selected { "[x]" } else { "[ ]" };
    let entry = &row.entry;
    let mut line = format!(
        "{mark} #{:<4} {}  {}",
        entry.id,
        entry.name,
        cost_pair(entry, symbol),
    );
    if !entry.details.is_empty() {
        line.push_str(&format!("  ({})", entry.details));
    }
    line
}

pub fn selected_line(item: &SelectedItem, symbol: &str) -> String {
    format!(
        "{:<LABEL_WIDTH$} {}  {}  {}",
        item.category.display_name(),
        item.display_label(),
        cost_pair(item, symbol),
        format_variance(&item.totals(), symbol),
    )
}
