use std::{fmt, sync::RwLock};

use colored::Colorize;
use once_cell::sync::Lazy;
use wedplan_config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPreferences {
    pub theme: Theme,
    pub color: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Iconic,
            color: true,
        }
    }
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: config.theme,
            color: config.ui_color_enabled && !config.theme.is_plain(),
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn apply_config(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
}

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
    if prefs.color {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, theme: Theme) -> &'static str {
    match (theme, kind) {
        (_, MessageKind::Section) => "",
        (Theme::Plain, MessageKind::Info) => "INFO:",
        (Theme::Plain, MessageKind::Success) => "OK:",
        (Theme::Plain, MessageKind::Warning) => "WARNING:",
        (Theme::Plain, MessageKind::Error) => "ERROR:",
        (Theme::Plain, MessageKind::Hint) => "HINT:",
        (Theme::Iconic, MessageKind::Info) => "[i]",
        (Theme::Iconic, MessageKind::Success) => "[✓]",
        (Theme::Iconic, MessageKind::Warning) => "[!]",
        (Theme::Iconic, MessageKind::Error) => "[x]",
        (Theme::Iconic, MessageKind::Hint) => "[?]",
    }
}

/// Renders a message the way [`print`] shows it, minus the trailing newline.
pub fn style(kind: MessageKind, message: impl fmt::Display, prefs: OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", label(kind, prefs.theme), text),
    };

    if !prefs.color {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = style(kind, message, preferences());
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        MessageKind::Error => eprintln!("{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints pre-rendered text (tables, listings) without a label.
pub fn block(text: &str) {
    println!("{text}");
}
