use std::{
    cmp::Reverse,
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Config, ConfigError};

/// Overrides the base directory for config and data files.
pub const HOME_ENV: &str = "WEDDING_BUDGET_HOME";
const APP_DIR: &str = "wedding-budget";
const CONFIG_FILE: &str = "config.json";
const SNAPSHOT_PREFIX: &str = "config_";
const SNAPSHOT_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// A saved copy of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Reads and writes [`Config`] under `<base>/config`, keeping dated snapshots.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
    snapshots_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `$WEDDING_BUDGET_HOME`, falling back to the platform data dir.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_base_dir(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let snapshots_dir = config_dir.join("backups");
        fs::create_dir_all(&snapshots_dir)?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE),
            snapshots_dir,
            base_dir: base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.config_path) {
            Ok(raw) => parse_config(&raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        replace_file(&self.config_path, json.as_bytes())
    }

    /// Copies the saved config file into the backups folder.
    ///
    /// Returns `None` when nothing has been saved yet.
    pub fn backup(&self, note: Option<&str>) -> Result<Option<ConfigSnapshot>, ConfigError> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        let stamp = Utc::now().format(SNAPSHOT_TIMESTAMP);
        let name = match note.and_then(slug) {
            Some(label) => format!("{SNAPSHOT_PREFIX}{stamp}_{label}.json"),
            None => format!("{SNAPSHOT_PREFIX}{stamp}.json"),
        };
        fs::copy(&self.config_path, self.snapshots_dir.join(&name))?;
        Ok(Some(ConfigSnapshot {
            created_at: snapshot_time(&name),
            name,
        }))
    }

    /// Loads a snapshot and makes it the active config file.
    pub fn restore(&self, name: &str) -> Result<Config, ConfigError> {
        let source = self.snapshots_dir.join(name);
        let raw = fs::read_to_string(&source).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration backup `{name}` not found"),
            )),
            _ => err.into(),
        })?;
        let config = parse_config(&raw)?;
        self.save(&config)?;
        Ok(config)
    }

    /// Newest first.
    pub fn list_backups(&self) -> Result<Vec<ConfigSnapshot>, ConfigError> {
        let mut snapshots: Vec<ConfigSnapshot> = fs::read_dir(&self.snapshots_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(SNAPSHOT_PREFIX) && name.ends_with(".json"))
            .map(|name| ConfigSnapshot {
                created_at: snapshot_time(&name),
                name,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| Reverse(snapshot.created_at));
        Ok(snapshots)
    }
}

pub fn default_base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_config(raw: &str) -> Result<Config, ConfigError> {
    serde_json::from_str(raw).map_err(|err| ConfigError::Serde(err.to_string()))
}

fn slug(note: &str) -> Option<String> {
    let words: Vec<String> = note
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    (!words.is_empty()).then(|| words.join("-"))
}

fn snapshot_time(name: &str) -> Option<DateTime<Utc>> {
    let stamp = name.strip_prefix(SNAPSHOT_PREFIX)?.get(..15)?;
    NaiveDateTime::parse_from_str(stamp, SNAPSHOT_TIMESTAMP)
        .ok()
        .map(|naive| naive.and_utc())
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
