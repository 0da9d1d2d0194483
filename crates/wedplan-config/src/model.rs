use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::ConfigError;

/// User preferences for the planner shell and its storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    /// Start a new plan with the sample catalog and selections.
    #[serde(default = "Config::default_true")]
    pub seed_demo_data: bool,
    /// Save selections when the shell exits.
    #[serde(default = "Config::default_true")]
    pub autosave: bool,
    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the selections file. Defaults to `<base>/data`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            ui_color_enabled: true,
            seed_demo_data: true,
            autosave: true,
            backup_retention: Self::default_backup_retention(),
            data_root: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 8] = [
        "locale",
        "currency",
        "currency_symbol",
        "theme",
        "ui_color_enabled",
        "seed_demo_data",
        "autosave",
        "backup_retention",
    ];

    pub fn default_locale() -> String {
        "ko-KR".into()
    }

    pub fn default_currency() -> String {
        "KRW".into()
    }

    pub fn default_currency_symbol() -> String {
        "₩".into()
    }

    pub fn default_backup_retention() -> usize {
        5
    }

    fn default_true() -> bool {
        true
    }

    pub fn resolve_data_root(&self, base: &Path) -> PathBuf {
        match &self.data_root {
            Some(path) => path.clone(),
            None => base.join("data"),
        }
    }

    /// Current value of a setting, rendered as text.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "locale" => self.locale.clone(),
            "currency" => self.currency.clone(),
            "currency_symbol" => self.currency_symbol.clone(),
            "theme" => self.theme.to_string(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "seed_demo_data" => self.seed_demo_data.to_string(),
            "autosave" => self.autosave.to_string(),
            "backup_retention" => self.backup_retention.to_string(),
            "data_root" => self
                .data_root
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Updates a setting from its text form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "locale" => self.locale = value.trim().to_string(),
            "currency" => self.currency = value.trim().to_ascii_uppercase(),
            "currency_symbol" => self.currency_symbol = value.trim().to_string(),
            "theme" => self.theme = Theme::parse(value),
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(value).ok_or_else(invalid)?,
            "seed_demo_data" => self.seed_demo_data = parse_bool(value).ok_or_else(invalid)?,
            "autosave" => self.autosave = parse_bool(value).ok_or_else(invalid)?,
            "backup_retention" => {
                let retention: usize = value.trim().parse().map_err(|_| invalid())?;
                if retention == 0 {
                    return Err(invalid());
                }
                self.backup_retention = retention;
            }
            "data_root" => {
                let trimmed = value.trim();
                self.data_root = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Output style for the shell: `plain` drops colors and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    /// Unrecognised names fall back to [`Theme::Iconic`].
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("plain") {
            Theme::Plain
        } else {
            Theme::Iconic
        }
    }

    pub fn is_plain(self) -> bool {
        matches!(self, Theme::Plain)
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::parse(&value)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        })
    }
}
