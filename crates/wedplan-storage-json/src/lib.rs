//! wedplan-storage-json
//!
//! Filesystem-backed JSON persistence for the selection ledger and the
//! editable catalog.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wedplan_core::{CatalogStorage, CoreError, SelectionStorage};
use wedplan_domain::{CatalogSection, SelectedItem};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;
pub const SELECTIONS_FILE: &str = "selections.json";
pub const CATALOG_FILE: &str = "catalog.json";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_PREFIX: &str = "selections";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%3f";
const DEFAULT_RETENTION: usize = 5;

/// Where the selections file and its backups live.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub data_root: PathBuf,
    pub backup_root: PathBuf,
}

impl StoragePaths {
    /// Keeps backups in a `backups` folder next to the data file.
    pub fn under(base: &Path) -> Self {
        Self {
            data_root: base.to_path_buf(),
            backup_root: base.join("backups"),
        }
    }
}

/// On-disk document wrapping the saved selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionDocument {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<SelectedItem>,
}

/// On-disk document holding every catalog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub categories: Vec<CatalogSection>,
}

/// Describes a backup copy of the selections file.
#[derive(Debug, Clone)]
pub struct BackupInfo {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// JSON file persistence for selections with rotated backups.
#[derive(Debug, Clone)]
pub struct JsonSelectionStorage {
    file: PathBuf,
    catalog_file: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonSelectionStorage {
    pub fn new(paths: StoragePaths) -> Result<Self, CoreError> {
        Self::with_retention(paths, DEFAULT_RETENTION)
    }

    pub fn with_retention(paths: StoragePaths, retention: usize) -> Result<Self, CoreError> {
        fs::create_dir_all(&paths.data_root)?;
        fs::create_dir_all(&paths.backup_root)?;
        Ok(Self {
            file: paths.data_root.join(SELECTIONS_FILE),
            catalog_file: paths.data_root.join(CATALOG_FILE),
            backups_dir: paths.backup_root,
            retention: retention.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_file
    }

    /// Copies the current selections file into the backup folder.
    pub fn backup(&self, note: Option<&str>) -> Result<Option<BackupInfo>, CoreError> {
        if !self.file.exists() {
            return Ok(None);
        }
        fs::create_dir_all(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{BACKUP_PREFIX}_{timestamp}");
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{stem}.{BACKUP_EXTENSION}");
        let path = self.backups_dir.join(&file_name);
        fs::copy(&self.file, &path)?;
        self.prune_backups()?;
        debug!(backup = %file_name, "selections backed up");
        Ok(Some(BackupInfo {
            created_at: parse_backup_timestamp(&file_name),
            size_bytes: fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0),
            id: file_name,
            path,
        }))
    }

    /// Newest first. Files that do not look like backups are ignored.
    pub fn list_backups(&self) -> Result<Vec<BackupInfo>, CoreError> {
        let listing = match fs::read_dir(&self.backups_dir) {
            Ok(listing) => listing,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut backups: Vec<BackupInfo> = listing
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let id = entry.file_name().into_string().ok()?;
                let created_at = parse_backup_timestamp(&id)?;
                Some(BackupInfo {
                    size_bytes: entry.metadata().map(|meta| meta.len()).unwrap_or(0),
                    path: entry.path(),
                    created_at: Some(created_at),
                    id,
                })
            })
            .collect();
        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(backups)
    }

    /// Makes the named backup the current selections file and returns its
    /// items. The file being replaced is backed up first with a
    /// `pre-restore` note.
    pub fn restore_backup(&self, backup_id: &str) -> Result<Vec<SelectedItem>, CoreError> {
        if backup_id.contains(['/', '\\']) || parse_backup_timestamp(backup_id).is_none() {
            return Err(CoreError::Storage(format!(
                "`{backup_id}` is not a backup name"
            )));
        }
        let source = self.backups_dir.join(backup_id);
        let data = match fs::read_to_string(&source) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CoreError::Storage(format!(
                    "backup `{backup_id}` not found"
                )));
            }
            Err(err) => return Err(err.into()),
        };
        let items = parse_selections(&data)?;
        self.backup(Some("pre-restore"))?;
        replace_file(&self.file, &data)?;
        debug!(backup = %backup_id, count = items.len(), "selections restored");
        Ok(items)
    }

    fn prune_backups(&self) -> Result<(), CoreError> {
        let entries = self.list_backups()?;
        for entry in entries.into_iter().skip(self.retention) {
            if let Err(err) = fs::remove_file(&entry.path) {
                warn!(backup = %entry.id, error = %err, "failed to prune backup");
            }
        }
        Ok(())
    }
}

impl SelectionStorage for JsonSelectionStorage {
    fn load_all(&self) -> Result<Vec<SelectedItem>, CoreError> {
        if !self.file.exists() {
            return Ok(Vec::new());
        }
        let items = load_selections_from_path(&self.file)?;
        debug!(path = %self.file.display(), count = items.len(), "selections file read");
        Ok(items)
    }

    fn save_all(&self, items: &[SelectedItem]) -> Result<(), CoreError> {
        if self.file.exists() {
            self.backup(None)?;
        }
        save_selections_to_path(items, &self.file)
    }
}

impl CatalogStorage for JsonSelectionStorage {
    fn load_catalog(&self) -> Result<Option<Vec<CatalogSection>>, CoreError> {
        let data = match fs::read_to_string(&self.catalog_file) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let document: CatalogDocument = serde_json::from_str(&data)
            .map_err(|err| CoreError::Serialization(err.to_string()))?;
        if document.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(CoreError::Storage(format!(
                "catalog file schema v{} is newer than supported v{}",
                document.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(Some(document.categories))
    }

    fn save_catalog(&self, sections: &[CatalogSection]) -> Result<(), CoreError> {
        let document = CatalogDocument {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            categories: sections.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| CoreError::Serialization(err.to_string()))?;
        replace_file(&self.catalog_file, &json)
    }
}

/// Writes selections to an arbitrary path, replacing the file atomically.
pub fn save_selections_to_path(items: &[SelectedItem], path: &Path) -> Result<(), CoreError> {
    let document = SelectionDocument {
        schema_version: CURRENT_SCHEMA_VERSION,
        saved_at: Utc::now(),
        items: items.to_vec(),
    };
    let json = serde_json::to_string_pretty(&document)
        .map_err(|err| CoreError::Serialization(err.to_string()))?;
    replace_file(path, &json)
}

/// Reads selections from disk. A bare JSON array of items is also accepted.
pub fn load_selections_from_path(path: &Path) -> Result<Vec<SelectedItem>, CoreError> {
    parse_selections(&fs::read_to_string(path)?)
}

fn parse_selections(data: &str) -> Result<Vec<SelectedItem>, CoreError> {
    let value: serde_json::Value =
        serde_json::from_str(data).map_err(|err| CoreError::Serialization(err.to_string()))?;
    if value.is_array() {
        return serde_json::from_value(value)
            .map_err(|err| CoreError::Serialization(err.to_string()));
    }
    let document: SelectionDocument = serde_json::from_value(value)
        .map_err(|err| CoreError::Serialization(err.to_string()))?;
    if document.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(CoreError::Storage(format!(
            "selections file schema v{} is newer than supported v{}",
            document.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(document.items)
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let words: Vec<String> = note?
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join("-"))
    }
}

// Backup names look like `selections_<date>_<time>[_<note>].json`.
fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_suffix(&format!(".{BACKUP_EXTENSION}"))?;
    let mut segments = stem.split('_').skip(1);
    let date = segments.next()?;
    let time = segments.next()?;
    if !is_digits(date, 8) || !is_digits(time, 9) {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{date}{time}"), "%Y%m%d%H%M%S%3f")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// Writes beside the target, then renames over it.
fn replace_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
