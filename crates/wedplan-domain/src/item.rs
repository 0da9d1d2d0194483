//! Records held by the selection ledger.

use serde::{Deserialize, Serialize};

use crate::category::CategoryTag;
use crate::common::{Costed, Displayable, ItemId};

/// A vendor or option the couple has chosen.
///
/// Built as a snapshot of a catalog entry at selection time. Later edits to
/// the catalog entry do not reach this record unless the editor issues an
/// explicit ledger update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    pub category: CategoryTag,
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub estimated_cost: u64,
    pub actual_cost: u64,
}

impl SelectedItem {
    pub fn new(
        category: impl Into<CategoryTag>,
        id: ItemId,
        name: impl Into<String>,
        estimated_cost: u64,
        actual_cost: u64,
    ) -> Self {
        Self {
            category: category.into(),
            id,
            name: name.into(),
            details: String::new(),
            estimated_cost,
            actual_cost,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn key(&self) -> SelectionKey {
        SelectionKey::new(self.category.clone(), self.id)
    }

    /// Returns `true` when this record occupies the given ledger slot.
    pub fn matches(&self, category: &CategoryTag, id: ItemId) -> bool {
        self.id == id && &self.category == category
    }
}

impl Costed for SelectedItem {
    fn estimated_cost(&self) -> u64 {
        self.estimated_cost
    }

    fn actual_cost(&self) -> u64 {
        self.actual_cost
    }
}

impl Displayable for SelectedItem {
    fn display_label(&self) -> String {
        if self.details.is_empty() {
            format!("{} #{}", self.name, self.id)
        } else {
            format!("{} #{} ({})", self.name, self.id, self.details)
        }
    }
}

/// The (category, id) pair that is unique within the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionKey {
    pub category: CategoryTag,
    pub id: ItemId,
}

impl SelectionKey {
    pub fn new(category: impl Into<CategoryTag>, id: ItemId) -> Self {
        Self {
            category: category.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::summary::VarianceStatus;

    #[test]
    fn serializes_with_camel_case_cost_fields() {
        let item = SelectedItem::new(Category::WeddingHall, 1, "Grand Hall", 15_000_000, 14_500_000)
            .with_details("Gangnam, 200 guests");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "wedding-halls");
        assert_eq!(json["estimatedCost"], 15_000_000);
        assert_eq!(json["actualCost"], 14_500_000);
        assert_eq!(json["details"], "Gangnam, 200 guests");
    }

    #[test]
    fn details_default_to_empty_when_missing() {
        let json = r#"{"category":"household","id":3,"name":"Sofa","estimatedCost":10,"actualCost":12}"#;
        let item: SelectedItem = serde_json::from_str(json).unwrap();
        assert!(item.details.is_empty());
        assert_eq!(item.variance(), -2);
        assert_eq!(item.totals().status, VarianceStatus::OverBudget);
    }

    #[test]
    fn key_and_matches_agree() {
        let item = SelectedItem::new("household", 9, "Washer", 1, 1);
        let key = item.key();
        assert!(item.matches(&key.category, key.id));
        assert!(!item.matches(&CategoryTag::new("honeymoons"), 9));
        assert!(!item.matches(&key.category, 10));
    }
}
