//! Candidate vendors and options offered by a category's catalog.

use serde::{Deserialize, Serialize};

use crate::category::CategoryTag;
use crate::common::{Costed, ItemId};
use crate::item::SelectedItem;

/// A candidate the user may select. `details` is composed by the owning
/// editor and is opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub estimated_cost: u64,
    pub actual_cost: u64,
}

impl CatalogEntry {
    pub fn new(id: ItemId, name: impl Into<String>, estimated_cost: u64, actual_cost: u64) -> Self {
        Self {
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

    /// Copies the entry's current field values into a ledger record.
    pub fn to_selected(&self, category: impl Into<CategoryTag>) -> SelectedItem {
        SelectedItem {
            category: category.into(),
            id: self.id,
            name: self.name.clone(),
            details: self.details.clone(),
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
        }
    }
}

/// Rebuilds an entry from a selection snapshot, used when the catalog no
/// longer holds the entry a saved selection was taken from.
impl From<&SelectedItem> for CatalogEntry {
    fn from(item: &SelectedItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            details: item.details.clone(),
            estimated_cost: item.estimated_cost,
            actual_cost: item.actual_cost,
        }
    }
}

impl Costed for CatalogEntry {
    fn estimated_cost(&self) -> u64 {
        self.estimated_cost
    }

    fn actual_cost(&self) -> u64 {
        self.actual_cost
    }
}

/// Field values for a catalog entry that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub name: String,
    pub details: String,
    pub estimated_cost: u64,
    pub actual_cost: u64,
}

impl CatalogDraft {
    pub fn into_entry(self, id: ItemId) -> CatalogEntry {
        CatalogEntry {
            id,
            name: self.name,
            details: self.details,
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
        }
    }
}

/// One category's entries as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub category: CategoryTag,
    pub entries: Vec<CatalogEntry>,
}
