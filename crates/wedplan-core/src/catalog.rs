//! Catalog providers supply the candidate entries each editor renders.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use wedplan_domain::{CatalogDraft, CatalogEntry, CatalogSection, CategoryTag, ItemId};

use crate::{ids::generate_item_id, CoreError};

/// Read access to per-category candidate entries.
pub trait CatalogProvider: Send + Sync {
    fn entries(&self, category: &CategoryTag) -> Vec<CatalogEntry>;

    fn entry(&self, category: &CategoryTag, id: ItemId) -> Option<CatalogEntry> {
        self.entries(category).into_iter().find(|entry| entry.id == id)
    }
}

/// Catalog that editors may change. Editors hold it as `&dyn CatalogStore`.
pub trait CatalogStore: CatalogProvider {
    /// Adds an entry with a caller-chosen id. Fails if the id is taken.
    fn insert(&self, category: &CategoryTag, entry: CatalogEntry) -> Result<(), CoreError>;

    /// Creates an entry with a freshly generated id.
    fn create(&self, category: &CategoryTag, draft: CatalogDraft) -> CatalogEntry;

    /// Replaces the entry with the same id.
    fn edit(&self, category: &CategoryTag, entry: CatalogEntry) -> Result<(), CoreError>;

    fn delete(&self, category: &CategoryTag, id: ItemId) -> Result<CatalogEntry, CoreError>;
}

/// Editable catalog kept in memory, one list per category.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: RwLock<HashMap<CategoryTag, Vec<CatalogEntry>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every non-empty category, sorted by tag so saved files diff cleanly.
    pub fn sections(&self) -> Vec<CatalogSection> {
        let guard = self.read();
        let mut sections: Vec<CatalogSection> = guard
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, entries)| CatalogSection {
                category: category.clone(),
                entries: entries.clone(),
            })
            .collect();
        sections.sort_by(|a, b| a.category.cmp(&b.category));
        sections
    }

    /// Swaps in a saved catalog. Categories absent from `sections` end up empty.
    pub fn replace_all(&self, sections: Vec<CatalogSection>) -> usize {
        let mut replacement: HashMap<CategoryTag, Vec<CatalogEntry>> = HashMap::new();
        let mut count = 0;
        for section in sections {
            let list = replacement.entry(section.category).or_default();
            for entry in section.entries {
                if list.iter().all(|existing| existing.id != entry.id) {
                    list.push(entry);
                    count += 1;
                }
            }
        }
        *self.write() = replacement;
        debug!(count, "catalog contents replaced");
        count
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<CategoryTag, Vec<CatalogEntry>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CategoryTag, Vec<CatalogEntry>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn entries(&self, category: &CategoryTag) -> Vec<CatalogEntry> {
        self.read().get(category).cloned().unwrap_or_default()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn insert(&self, category: &CategoryTag, entry: CatalogEntry) -> Result<(), CoreError> {
        let mut guard = self.write();
        let list = guard.entry(category.clone()).or_default();
        if list.iter().any(|existing| existing.id == entry.id) {
            return Err(CoreError::Validation(format!(
                "catalog entry {category} #{} already exists",
                entry.id
            )));
        }
        list.push(entry);
        Ok(())
    }

    fn create(&self, category: &CategoryTag, draft: CatalogDraft) -> CatalogEntry {
        let entry = draft.into_entry(generate_item_id());
        self.write()
            .entry(category.clone())
            .or_default()
            .push(entry.clone());
        debug!(%category, id = entry.id, "catalog entry created");
        entry
    }

    fn edit(&self, category: &CategoryTag, entry: CatalogEntry) -> Result<(), CoreError> {
        let mut guard = self.write();
        let slot = guard
            .get_mut(category)
            .and_then(|list| list.iter_mut().find(|existing| existing.id == entry.id))
            .ok_or_else(|| CoreError::CatalogEntryNotFound {
                category: category.clone(),
                id: entry.id,
            })?;
        *slot = entry;
        Ok(())
    }

    fn delete(&self, category: &CategoryTag, id: ItemId) -> Result<CatalogEntry, CoreError> {
        let mut guard = self.write();
        let list = guard.get_mut(category);
        let index = list
            .as_ref()
            .and_then(|list| list.iter().position(|entry| entry.id == id));
        match (list, index) {
            (Some(list), Some(index)) => Ok(list.remove(index)),
            _ => Err(CoreError::CatalogEntryNotFound {
                category: category.clone(),
                id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wedplan_domain::Category;

    fn tag() -> CategoryTag {
        Category::Honeymoon.into()
    }

    #[test]
    fn create_assigns_generated_id() {
        let catalog = InMemoryCatalog::new();
        let entry = catalog.create(
            &tag(),
            CatalogDraft {
                name: "Bali 4N6D".into(),
                estimated_cost: 4_000_000,
                actual_cost: 0,
                ..CatalogDraft::default()
            },
        );
        assert!(entry.id > 1_000);
        assert_eq!(catalog.entry(&tag(), entry.id), Some(entry));
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert(&tag(), CatalogEntry::new(1, "Maldives", 1, 1))
            .unwrap();
        let err = catalog
            .insert(&tag(), CatalogEntry::new(1, "Hawaii", 1, 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn edit_and_delete_report_missing_entries() {
        let catalog = InMemoryCatalog::new();
        let missing = CatalogEntry::new(42, "Nowhere", 0, 0);
        assert!(matches!(
            catalog.edit(&tag(), missing),
            Err(CoreError::CatalogEntryNotFound { id: 42, .. })
        ));
        assert!(matches!(
            catalog.delete(&tag(), 42),
            Err(CoreError::CatalogEntryNotFound { id: 42, .. })
        ));
    }

    #[test]
    fn categories_are_independent() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert(&tag(), CatalogEntry::new(1, "Maldives", 1, 1))
            .unwrap();
        assert!(catalog.entries(&Category::Household.into()).is_empty());
        assert_eq!(catalog.entries(&tag()).len(), 1);
    }

    #[test]
    fn sections_round_trip_through_replace_all() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert(&tag(), CatalogEntry::new(1, "Maldives", 1, 1))
            .unwrap();
        catalog
            .insert(&Category::Household.into(), CatalogEntry::new(2, "TV", 3, 4))
            .unwrap();
        let sections = catalog.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category.as_str(), "honeymoons");

        let restored = InMemoryCatalog::new();
        restored
            .insert(&Category::Meeting.into(), CatalogEntry::new(9, "Stale", 0, 0))
            .unwrap();
        assert_eq!(restored.replace_all(sections.clone()), 2);
        assert_eq!(restored.sections(), sections);
        assert!(restored.entries(&Category::Meeting.into()).is_empty());
    }
}
