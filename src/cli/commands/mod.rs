use std::collections::HashMap;

pub mod config;
pub mod plan;
pub mod storage;
pub mod system;

use wedplan_domain::{Category, CategoryTag, ItemId};

use crate::cli::context::{CommandError, CommandResult, ShellContext};

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(plan::definitions());
    commands.extend(storage::definitions());
    commands.extend(config::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands by name, remembering registration order for help output.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            if commands.insert(definition.name, definition.clone()).is_none() {
                order.push(definition.name);
            }
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

pub(crate) fn require_args(args: &[&str], count: usize, usage: &str) -> CommandResult {
    if args.len() < count {
        return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
    }
    Ok(())
}

/// Accepts a category tag (`wedding-halls`) or its short alias (`hall`).
pub(crate) fn parse_category(value: &str) -> Result<CategoryTag, CommandError> {
    Category::parse(value)
        .map(CategoryTag::from)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "unknown category `{value}`. Use `categories` to list them."
            ))
        })
}

pub(crate) fn parse_id(value: &str) -> Result<ItemId, CommandError> {
    value
        .trim()
        .trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid id `{value}`")))
}

/// Whole currency units; `,` and `_` separators are ignored.
pub(crate) fn parse_amount(value: &str) -> Result<u64, CommandError> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '_'))
        .collect();
    digits.parse().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid amount `{value}` (use a whole non-negative number)"
        ))
    })
}
