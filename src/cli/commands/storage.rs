//! Saving, loading, and restoring the plan files.

use chrono::Local;
use wedplan_core::{restore_missing_entries, SelectionLedger};

use super::{require_args, CommandDefinition};
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "save",
            "Write selections and the catalog to disk",
            "save",
            cmd_save,
        ),
        CommandDefinition::new(
            "load",
            "Replace selections and the catalog with the saved files",
            "load",
            cmd_load,
        ),
        CommandDefinition::new(
            "backups",
            "List, create, or restore selection backups",
            "backups [list | create [note] | restore <id>]",
            cmd_backups,
        ),
    ]
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let count = context.save_plan()?;
    output::success(format!(
        "Saved {count} selections to {}.",
        context.storage.path().display()
    ));
    output::info(format!(
        "Catalog written to {}.",
        context.storage.catalog_path().display()
    ));
    Ok(())
}

fn cmd_load(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.storage.path().exists() {
        output::warning("Nothing has been saved yet.");
        return Ok(());
    }
    if !context.ledger.is_empty()
        && !context.confirm("Replace the current selections with the saved file?")?
    {
        output::info("Load cancelled.");
        return Ok(());
    }
    let count = context.load_plan()?;
    output::success(format!("Loaded {count} selections."));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied().unwrap_or("list") {
        "list" => list_backups(context),
        "create" => {
            let note = (args.len() > 1).then(|| args[1..].join(" "));
            match context.storage.backup(note.as_deref())? {
                Some(info) => output::success(format!("Backup `{}` created.", info.id)),
                None => output::warning("Nothing has been saved yet; use `save` first."),
            }
            Ok(())
        }
        "restore" => {
            require_args(args, 2, "backups restore <id>")?;
            let id = args[1];
            if !context.confirm(&format!("Restore `{id}` over the current selections?"))? {
                output::info("Restore cancelled.");
                return Ok(());
            }
            let items = context.storage.restore_backup(id)?;
            let count = context.ledger.replace_all(items);
            restore_missing_entries(&context.catalog, &context.ledger);
            output::success(format!("Restored {count} selections from `{id}`."));
            output::hint("The replaced selections were kept as a `pre-restore` backup.");
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown backups action `{other}` (expected list, create, or restore)"
        ))),
    }
}

fn list_backups(context: &ShellContext) -> CommandResult {
    let backups = context.storage.list_backups()?;
    output::section("Backups");
    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }
    for backup in backups {
        let created = backup
            .created_at
            .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown time".into());
        output::block(&format!(
            "  {}  {}  {} bytes",
            backup.id, created, backup.size_bytes
        ));
    }
    Ok(())
}
