use super::commands::{CommandDefinition, CommandRegistry};
use super::output;

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for definition in registry.iter() {
        output::block(&format!(
            "  {:<width$}  {}",
            definition.name, definition.description
        ));
    }
    output::hint("Categories accept a tag or alias, e.g. `catalog hall`.");
}

pub fn print_command(definition: &CommandDefinition) {
    output::section(format!("Help: {}", definition.name));
    output::block(&format!("  {}", definition.description));
    output::block(&format!("  Usage: {}", definition.usage));
}
