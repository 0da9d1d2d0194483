//! Shell state, command dispatch, and error reporting.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use tracing::{debug, info};
use wedplan_config::{Config, ConfigError, ConfigManager};
use wedplan_core::{
    demo, hydrate, hydrate_catalog, persist, persist_catalog, restore_missing_entries,
    CategoryEditor, CoreError, InMemoryCatalog, SelectionLedger, SharedLedger,
};
use wedplan_domain::CategoryTag;
use wedplan_storage_json::{JsonSelectionStorage, StoragePaths};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::output;
use super::shell::parse_command_line;
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Everything a command handler can reach: the plan, its storage, and settings.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub catalog: InMemoryCatalog,
    pub ledger: SharedLedger,
    pub storage: JsonSelectionStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::from_env()?)
    }

    /// Opens the plan stored under the manager's base directory.
    ///
    /// A saved catalog wins over the sample one. Sample selections are added
    /// only when `seed_demo_data` is on and nothing has been saved yet.
    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::apply_config(&config);

        let storage = open_storage(&config, &config_manager)?;
        let catalog = InMemoryCatalog::new();
        if !hydrate_catalog(&catalog, &storage)? {
            demo::seed_catalog(&catalog)?;
        }

        let ledger = SharedLedger::new();
        if storage.path().exists() {
            hydrate(&ledger, &storage)?;
        } else if config.seed_demo_data {
            let seeded = ledger.replace_all(demo::initial_selections(&catalog));
            info!(count = seeded, "started new plan from sample selections");
        }
        restore_missing_entries(&catalog, &ledger);

        Ok(Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            catalog,
            ledger,
            storage,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn editor(&self, category: CategoryTag) -> CategoryEditor<'_> {
        CategoryEditor::new(category, &self.catalog, &self.ledger)
    }

    pub fn prompt(&self) -> String {
        format!("wedding-budget [{} selected] > ", self.ledger.len())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Reopens the selections store after `data_root` or retention changes.
    pub(crate) fn reopen_storage(&mut self) -> Result<(), CommandError> {
        self.storage = open_storage(&self.config, &self.config_manager)?;
        Ok(())
    }

    /// Writes selections and the catalog. Returns the number of selections.
    pub(crate) fn save_plan(&self) -> Result<usize, CoreError> {
        let count = persist(&self.ledger, &self.storage)?;
        persist_catalog(&self.catalog, &self.storage)?;
        Ok(count)
    }

    /// Rereads the saved plan, replacing what is in memory.
    pub(crate) fn load_plan(&self) -> Result<usize, CoreError> {
        hydrate_catalog(&self.catalog, &self.storage)?;
        let count = hydrate(&self.ledger, &self.storage)?;
        restore_missing_entries(&self.catalog, &self.ledger);
        Ok(count)
    }

    /// Tokenizes and runs one line of input.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(format!("Could not parse input: {err}"));
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());
        debug!(command = %command, "dispatching");

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|definition| definition.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{name}`?"));
            }
        }
    }

    /// Asks before destructive actions. Scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit the planner?")
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(CoreError::CatalogEntryNotFound { category, id }) => {
                output::error(format!(
                    "No catalog entry #{id} in {}.",
                    category.display_name()
                ));
                output::hint(format!("Try `catalog {category}` to see the ids."));
            }
            other => output::error(other),
        }
    }

    /// Saves selections on the way out when autosave is on.
    pub fn shutdown(&mut self) -> Result<(), CliError> {
        self.running = false;
        if !self.config.autosave {
            return Ok(());
        }
        let count = self.save_plan()?;
        info!(count, "autosaved selections");
        Ok(())
    }
}

fn open_storage(
    config: &Config,
    manager: &ConfigManager,
) -> Result<JsonSelectionStorage, CoreError> {
    let data_root = config.resolve_data_root(manager.base_dir());
    JsonSelectionStorage::with_retention(StoragePaths::under(&data_root), config.backup_retention)
}
