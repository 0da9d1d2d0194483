use wedplan_storage_json::CURRENT_SCHEMA_VERSION;

use super::CommandDefinition;
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::{help, output};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new("exit", "Save (if autosave is on) and quit", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.command(&name.to_lowercase()) {
            Some(definition) => help::print_command(definition),
            None => context.suggest_command(name),
        },
        None => help::print_overview(&context.registry),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Wedding Budget {}", meta.version));
    output::info(format!("  Data schema : v{CURRENT_SCHEMA_VERSION}"));
    output::info(format!("  Build hash  : {} ({})", meta.git_hash, meta.git_status));
    output::info(format!("  Built at    : {}", meta.timestamp));
    output::info(format!("  Target      : {}", meta.target));
    output::info(format!("  Profile     : {}", meta.profile));
    output::info(format!("  Rustc       : {}", meta.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
