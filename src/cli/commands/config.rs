//! Viewing and changing persisted preferences.

use chrono::Local;
use wedplan_config::Config;

use super::{require_args, CommandDefinition};
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "Show or change preferences",
        "config [show | json | set <key> <value> | backup [note] | backups | restore <name>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied().unwrap_or("show") {
        "show" => show(context),
        "json" => {
            output::block(&serde_json::to_string_pretty(&context.config)?);
            Ok(())
        }
        "set" => {
            require_args(args, 3, "config set <key> <value>")?;
            let value = args[2..].join(" ");
            context.config.set(args[1], &value)?;
            apply(context)?;
            output::success(format!("{} = {}", args[1], context.config.get(args[1])?));
            Ok(())
        }
        "backup" => {
            let note = (args.len() > 1).then(|| args[1..].join(" "));
            context.config_manager.save(&context.config)?;
            if let Some(snapshot) = context.config_manager.backup(note.as_deref())? {
                output::success(format!("Configuration backup `{}` created.", snapshot.name));
            }
            Ok(())
        }
        "backups" => {
            let snapshots = context.config_manager.list_backups()?;
            output::section("Configuration backups");
            if snapshots.is_empty() {
                output::info("No configuration backups yet.");
            }
            for snapshot in snapshots {
                let created = snapshot
                    .created_at
                    .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown time".into());
                output::block(&format!("  {}  {}", snapshot.name, created));
            }
            Ok(())
        }
        "restore" => {
            require_args(args, 2, "config restore <name>")?;
            context.config = context.config_manager.restore(args[1])?;
            apply(context)?;
            output::success(format!("Configuration restored from `{}`.", args[1]));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}` (expected show, json, set, backup, backups, or restore)"
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for key in Config::KEYS.iter().copied().chain(["data_root"]) {
        output::block(&format!("  {key:<17} {}", context.config.get(key)?));
    }
    output::block(&format!(
        "  {:<17} {}",
        "selections file",
        context.storage.path().display()
    ));
    output::block(&format!(
        "  {:<17} {}",
        "config file",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

/// Persists the current config and re-applies its side effects.
fn apply(context: &mut ShellContext) -> CommandResult {
    context.config_manager.save(&context.config)?;
    output::apply_config(&context.config);
    context.reopen_storage()
}
