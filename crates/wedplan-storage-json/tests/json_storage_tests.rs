use std::fs;

use tempfile::tempdir;
use wedplan_core::{
    hydrate, persist, CatalogStorage, SelectionLedger, SelectionStorage, SharedLedger,
};
use wedplan_domain::{CatalogEntry, CatalogSection, Category, SelectedItem};
use wedplan_storage_json::{
    load_selections_from_path, JsonSelectionStorage, StoragePaths, CURRENT_SCHEMA_VERSION,
};

fn sample_items() -> Vec<SelectedItem> {
    vec![
        SelectedItem::new(Category::WeddingHall, 1, "Grand Wedding Hall", 15_000_000, 14_500_000)
            .with_details("Gangnam, 200 guests"),
        SelectedItem::new(Category::Household, 1, "Refrigerator - LG", 2_500_000, 2_300_000),
    ]
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");
    assert!(storage.load_all().expect("load").is_empty());
}

#[test]
fn json_storage_can_save_and_load_selections() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");

    storage.save_all(&sample_items()).expect("save");
    let loaded = storage.load_all().expect("load");

    assert_eq!(loaded, sample_items());
    let raw = fs::read_to_string(storage.path()).expect("read file");
    assert!(raw.contains("\"estimatedCost\": 15000000"));
    assert!(raw.contains(&format!("\"schema_version\": {CURRENT_SCHEMA_VERSION}")));
    assert!(!storage.path().with_extension("json.tmp").exists());
}

#[test]
fn saving_over_existing_file_creates_backup() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");

    storage.save_all(&sample_items()).expect("first save");
    assert!(storage.list_backups().expect("list").is_empty());

    storage.save_all(&sample_items()[..1]).expect("second save");
    let backups = storage.list_backups().expect("list");
    assert!(!backups.is_empty());

    let restored = storage.restore_backup(&backups[0].id).expect("restore");
    assert_eq!(restored, sample_items());
    assert_eq!(storage.load_all().expect("reload"), sample_items());
}

#[test]
fn backups_are_pruned_to_retention() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::with_retention(StoragePaths::under(dir.path()), 2)
        .expect("storage");

    for _ in 0..6 {
        storage.save_all(&sample_items()).expect("save");
    }
    assert!(storage.list_backups().expect("list").len() <= 2);
}

#[test]
fn named_backup_keeps_note_in_file_name() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");
    assert!(storage.backup(Some("nothing yet")).expect("backup").is_none());

    storage.save_all(&sample_items()).expect("save");
    let info = storage
        .backup(Some("Before venue change"))
        .expect("backup")
        .expect("file exists");
    assert!(info.id.ends_with("_before-venue-change.json"));
    assert!(info.created_at.is_some());
    assert!(info.path.exists());
}

#[test]
fn restoring_unknown_backup_fails() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");
    let err = storage
        .restore_backup("selections_20250101_000000000.json")
        .expect_err("missing backup");
    assert!(err.to_string().contains("not found"));
}

#[test]
fn plain_array_files_are_accepted() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[{"category":"honeymoons","id":1,"name":"Maldives 5N7D","details":"Resort","estimatedCost":7500000,"actualCost":7200000}]"#,
    )
    .expect("write legacy file");

    let items = load_selections_from_path(&path).expect("load legacy");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category.as_str(), "honeymoons");
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("future.json");
    fs::write(
        &path,
        r#"{"schema_version":99,"saved_at":"2026-01-01T00:00:00Z","items":[]}"#,
    )
    .expect("write file");
    assert!(load_selections_from_path(&path).is_err());
}

#[test]
fn ledger_round_trips_through_storage_deduplicating() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");

    let mut items = sample_items();
    items.push(SelectedItem::new(Category::WeddingHall, 1, "Duplicate", 1, 1));
    storage.save_all(&items).expect("save with duplicate");

    let ledger = SharedLedger::new();
    assert_eq!(hydrate(&ledger, &storage).expect("hydrate"), 2);
    assert_eq!(ledger.list_all(), sample_items());

    ledger.remove(&Category::Household.into(), 1);
    assert_eq!(persist(&ledger, &storage).expect("persist"), 1);
    assert_eq!(storage.load_all().expect("reload").len(), 1);
}

#[test]
fn restore_rejects_names_outside_the_backup_folder() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");
    storage.save_all(&sample_items()).expect("save");

    for name in ["../selections.json", "/etc/passwd", "notes.txt"] {
        let err = storage.restore_backup(name).expect_err("rejected");
        assert!(err.to_string().contains("not a backup name"), "{name}: {err}");
    }
    assert_eq!(storage.load_all().expect("reload"), sample_items());
}

#[test]
fn restore_backs_up_the_file_it_replaces() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::with_retention(StoragePaths::under(dir.path()), 1)
        .expect("storage");

    storage.save_all(&sample_items()).expect("first save");
    storage.save_all(&sample_items()[..1]).expect("second save");
    let original = storage.list_backups().expect("list")[0].id.clone();

    let restored = storage.restore_backup(&original).expect("restore");
    assert_eq!(restored, sample_items());
    assert_eq!(storage.load_all().expect("reload"), sample_items());

    let backups = storage.list_backups().expect("list");
    assert_eq!(backups.len(), 1);
    assert!(backups[0].id.ends_with("_pre-restore.json"));
    let replaced = load_selections_from_path(&backups[0].path).expect("read pre-restore");
    assert_eq!(replaced, sample_items()[..1].to_vec());
}

#[test]
fn catalog_file_round_trips() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonSelectionStorage::new(StoragePaths::under(dir.path())).expect("storage");
    assert!(storage.load_catalog().expect("load").is_none());

    let sections = vec![CatalogSection {
        category: Category::Honeymoon.into(),
        entries: vec![CatalogEntry::new(1_792_058_597_655, "Jeju", 2_000_000, 1_900_000)
            .with_details("Seogwipo")],
    }];
    storage.save_catalog(&sections).expect("save");

    assert_eq!(storage.load_catalog().expect("reload"), Some(sections));
    assert_eq!(storage.catalog_path(), dir.path().join("catalog.json"));
    assert!(storage.list_backups().expect("list").is_empty());
}
