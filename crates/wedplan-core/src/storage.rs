use std::collections::HashSet;

use tracing::{debug, info, warn};
use wedplan_domain::{CatalogEntry, CatalogSection, SelectedItem};

use crate::catalog::{CatalogProvider, CatalogStore, InMemoryCatalog};
use crate::ledger::{SelectionLedger, SharedLedger};
use crate::CoreError;

/// Abstraction over backends that keep selections across restarts.
pub trait SelectionStorage: Send + Sync {
    fn load_all(&self) -> Result<Vec<SelectedItem>, CoreError>;
    fn save_all(&self, items: &[SelectedItem]) -> Result<(), CoreError>;
}

/// Backends that keep the editable catalog across restarts.
pub trait CatalogStorage: Send + Sync {
    /// `None` when no catalog has been saved yet.
    fn load_catalog(&self) -> Result<Option<Vec<CatalogSection>>, CoreError>;
    fn save_catalog(&self, sections: &[CatalogSection]) -> Result<(), CoreError>;
}

/// Replaces the ledger's contents with what the backend holds. Returns the
/// number of records kept.
pub fn hydrate(
    ledger: &SharedLedger,
    storage: &dyn SelectionStorage,
) -> Result<usize, CoreError> {
    let items = storage.load_all()?;
    for warning in selection_warnings(&items) {
        warn!("{warning}");
    }
    let count = ledger.replace_all(items);
    info!(count, "selections loaded");
    Ok(count)
}

/// Writes the ledger's current contents to the backend.
pub fn persist(
    ledger: &dyn SelectionLedger,
    storage: &dyn SelectionStorage,
) -> Result<usize, CoreError> {
    let items = ledger.list_all();
    storage.save_all(&items)?;
    info!(count = items.len(), "selections saved");
    Ok(items.len())
}

/// Swaps in the saved catalog. Returns `false` and leaves the catalog as it
/// is when the backend has none.
pub fn hydrate_catalog(
    catalog: &InMemoryCatalog,
    storage: &dyn CatalogStorage,
) -> Result<bool, CoreError> {
    let Some(sections) = storage.load_catalog()? else {
        return Ok(false);
    };
    let count = catalog.replace_all(sections);
    info!(count, "catalog loaded");
    Ok(true)
}

pub fn persist_catalog(
    catalog: &InMemoryCatalog,
    storage: &dyn CatalogStorage,
) -> Result<usize, CoreError> {
    let sections = catalog.sections();
    storage.save_catalog(&sections)?;
    let count = sections.iter().map(|section| section.entries.len()).sum();
    info!(count, "catalog saved");
    Ok(count)
}

/// Puts back a catalog entry for every selection whose entry is missing,
/// using the selection's snapshot. Returns how many entries were rebuilt.
pub fn restore_missing_entries(
    catalog: &dyn CatalogStore,
    ledger: &dyn SelectionLedger,
) -> usize {
    let mut rebuilt = 0;
    for item in ledger.list_all() {
        if catalog.entry(&item.category, item.id).is_some() {
            continue;
        }
        if catalog.insert(&item.category, CatalogEntry::from(&item)).is_ok() {
            debug!(category = %item.category, id = item.id, "catalog entry rebuilt from selection");
            rebuilt += 1;
        }
    }
    if rebuilt > 0 {
        warn!(rebuilt, "selections referenced missing catalog entries");
    }
    rebuilt
}

/// Detects duplicate keys and unrecognised category tags in a loaded set.
pub fn selection_warnings(items: &[SelectedItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for item in items {
        if !seen.insert(item.key()) {
            warnings.push(format!(
                "duplicate selection {} #{} ignored",
                item.category, item.id
            ));
        }
        if item.category.known().is_none() {
            warnings.push(format!(
                "selection {} #{} uses unrecognised category `{}`",
                item.name, item.id, item.category
            ));
        }
    }
    warnings
}
