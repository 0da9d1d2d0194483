//! Keeps a category's catalog and the selection ledger in step.
//!
//! A selection is a snapshot of the catalog entry taken when it was
//! selected. The ledger only sees later catalog edits that go through
//! [`CategoryEditor::save_edit`]; edits made directly on the catalog leave the
//! selected record stale.

use tracing::info;
use wedplan_domain::{CatalogDraft, CatalogEntry, CategoryTag, ItemId};

use crate::catalog::{CatalogProvider, CatalogStore};
use crate::ledger::SelectionLedger;
use crate::CoreError;

/// A catalog entry together with whether the ledger currently holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub entry: CatalogEntry,
    pub selected: bool,
}

/// One category's editing session over a shared catalog and ledger.
pub struct CategoryEditor<'a> {
    category: CategoryTag,
    catalog: &'a dyn CatalogStore,
    ledger: &'a dyn SelectionLedger,
}

impl<'a> CategoryEditor<'a> {
    pub fn new(
        category: impl Into<CategoryTag>,
        catalog: &'a dyn CatalogStore,
        ledger: &'a dyn SelectionLedger,
    ) -> Self {
        Self {
            category: category.into(),
            catalog,
            ledger,
        }
    }

    pub fn category(&self) -> &CategoryTag {
        &self.category
    }

    /// Catalog entries with their selection flag read from the ledger now.
    pub fn rows(&self) -> Vec<CatalogRow> {
        self.catalog
            .entries(&self.category)
            .into_iter()
            .map(|entry| CatalogRow {
                selected: self.ledger.is_selected(&self.category, entry.id),
                entry,
            })
            .collect()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.ledger.is_selected(&self.category, id)
    }

    /// Flips the selection and returns the new state.
    pub fn toggle(&self, id: ItemId) -> Result<bool, CoreError> {
        if self.is_selected(id) {
            self.deselect(id);
            Ok(false)
        } else {
            self.select(id)?;
            Ok(true)
        }
    }

    /// Adds a snapshot of the entry to the ledger. Selecting twice is harmless.
    pub fn select(&self, id: ItemId) -> Result<(), CoreError> {
        let entry = self.require_entry(id)?;
        if self.ledger.add(entry.to_selected(self.category.clone())) {
            info!(category = %self.category, id, name = %entry.name, "selected");
        }
        Ok(())
    }

    /// Drops the selection. Works even when the catalog entry is gone.
    pub fn deselect(&self, id: ItemId) -> bool {
        let removed = self.ledger.remove(&self.category, id);
        if removed {
            info!(category = %self.category, id, "deselected");
        }
        removed
    }

    /// Creates an unselected catalog entry.
    pub fn create(&self, draft: CatalogDraft) -> CatalogEntry {
        self.catalog.create(&self.category, draft)
    }

    /// Stores the edited entry and, if it is selected, refreshes the ledger's
    /// snapshot. Unselected entries are never added by an edit.
    pub fn save_edit(&self, entry: CatalogEntry) -> Result<(), CoreError> {
        self.catalog.edit(&self.category, entry.clone())?;
        if self.is_selected(entry.id) {
            self.ledger.update(entry.to_selected(self.category.clone()));
        }
        Ok(())
    }

    /// Deletes the entry and drops any selection that referenced it.
    pub fn delete(&self, id: ItemId) -> Result<CatalogEntry, CoreError> {
        let removed = self.catalog.delete(&self.category, id)?;
        self.ledger.remove(&self.category, id);
        info!(category = %self.category, id, "catalog entry deleted");
        Ok(removed)
    }

    fn require_entry(&self, id: ItemId) -> Result<CatalogEntry, CoreError> {
        self.catalog
            .entry(&self.category, id)
            .ok_or_else(|| CoreError::CatalogEntryNotFound {
                category: self.category.clone(),
                id,
            })
    }
}
