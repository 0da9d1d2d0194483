//! The selection ledger: the single shared store of selected items.
//!
//! Every category editor and the aggregator read and write the same
//! [`SharedLedger`] instance. All operations are infallible. Duplicate adds,
//! removals of absent records, and updates of absent records are silent no-ops.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};
use wedplan_domain::{CategoryTag, ItemId, SelectedItem};

/// Category-scoped access to the set of selected items.
pub trait SelectionLedger: Send + Sync {
    /// Inserts `item` unless its (category, id) is already present, in which
    /// case the existing record is kept. Returns `true` when inserted.
    fn add(&self, item: SelectedItem) -> bool;

    /// Deletes the matching record. Returns `true` when something was removed.
    fn remove(&self, category: &CategoryTag, id: ItemId) -> bool;

    /// Replaces the record with the same (category, id). Never creates a
    /// record. Returns `true` when a record was replaced.
    fn update(&self, item: SelectedItem) -> bool;

    /// All records for `category` in insertion order.
    fn list_by_category(&self, category: &CategoryTag) -> Vec<SelectedItem>;

    /// Every record in overall insertion order.
    fn list_all(&self) -> Vec<SelectedItem>;

    fn get(&self, category: &CategoryTag, id: ItemId) -> Option<SelectedItem> {
        self.list_by_category(category)
            .into_iter()
            .find(|item| item.id == id)
    }

    fn is_selected(&self, category: &CategoryTag, id: ItemId) -> bool {
        self.get(category, id).is_some()
    }

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock-guarded ledger. Cloning yields another handle to the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    items: Arc<RwLock<Vec<SelectedItem>>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from previously saved records, dropping later
    /// duplicates of the same (category, id).
    pub fn with_items(items: impl IntoIterator<Item = SelectedItem>) -> Self {
        let ledger = Self::new();
        ledger.replace_all(items);
        ledger
    }

    /// Swaps the whole contents in one step. Returns the number of records
    /// kept after duplicate removal.
    pub fn replace_all(&self, items: impl IntoIterator<Item = SelectedItem>) -> usize {
        let mut deduped: Vec<SelectedItem> = Vec::new();
        for item in items {
            if !deduped
                .iter()
                .any(|existing| existing.matches(&item.category, item.id))
            {
                deduped.push(item);
            }
        }
        let count = deduped.len();
        *self.write() = deduped;
        debug!(count, "ledger contents replaced");
        count
    }

    pub fn snapshot(&self) -> Vec<SelectedItem> {
        self.read().clone()
    }

    // Mutations never panic part way through, so a poisoned lock still holds
    // a consistent vector.
    fn read(&self) -> RwLockReadGuard<'_, Vec<SelectedItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<SelectedItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SelectionLedger for SharedLedger {
    fn add(&self, item: SelectedItem) -> bool {
        let mut items = self.write();
        if items
            .iter()
            .any(|existing| existing.matches(&item.category, item.id))
        {
            trace!(category = %item.category, id = item.id, "duplicate add ignored");
            return false;
        }
        debug!(category = %item.category, id = item.id, "item selected");
        items.push(item);
        true
    }

    fn remove(&self, category: &CategoryTag, id: ItemId) -> bool {
        let mut items = self.write();
        let before = items.len();
        items.retain(|item| !item.matches(category, id));
        let removed = items.len() != before;
        if removed {
            debug!(%category, id, "item deselected");
        } else {
            trace!(%category, id, "remove of absent item ignored");
        }
        removed
    }

    fn update(&self, item: SelectedItem) -> bool {
        let mut items = self.write();
        match items
            .iter_mut()
            .find(|existing| existing.matches(&item.category, item.id))
        {
            Some(slot) => {
                debug!(category = %item.category, id = item.id, "selected item updated");
                *slot = item;
                true
            }
            None => {
                trace!(category = %item.category, id = item.id, "update of absent item ignored");
                false
            }
        }
    }

    fn list_by_category(&self, category: &CategoryTag) -> Vec<SelectedItem> {
        self.read()
            .iter()
            .filter(|item| &item.category == category)
            .cloned()
            .collect()
    }

    fn list_all(&self) -> Vec<SelectedItem> {
        self.snapshot()
    }

    fn get(&self, category: &CategoryTag, id: ItemId) -> Option<SelectedItem> {
        self.read()
            .iter()
            .find(|item| item.matches(category, id))
            .cloned()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
