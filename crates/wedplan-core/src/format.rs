//! Plain-text formatting of amounts for summaries and listings.

use wedplan_domain::BudgetTotals;

/// Formats a whole-unit amount with thousands separators, e.g. `₩15,000,000`.
pub fn format_amount(amount: u64, symbol: &str) -> String {
    format!("{symbol}{}", group_thousands(amount))
}

/// Formats the magnitude of a variance together with its direction,
/// e.g. `₩700,000 under budget`.
pub fn format_variance(totals: &BudgetTotals, symbol: &str) -> String {
    let magnitude = format_amount(totals.variance.unsigned_abs(), symbol);
    format!("{magnitude} {}", totals.status)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
