//! Catalog browsing, selection, and the budget summary.

use wedplan_core::{BudgetAggregator, CatalogProvider, SelectionLedger};
use wedplan_domain::{CatalogDraft, CatalogEntry, Category, CategoryTag};

use super::{parse_amount, parse_category, parse_id, require_args, CommandDefinition};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::{output, render};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "categories",
            "List budget categories and how many items each has selected",
            "categories",
            cmd_categories,
        ),
        CommandDefinition::new(
            "catalog",
            "Show a category's catalog; [x] marks selected entries",
            "catalog <category>",
            cmd_catalog,
        ),
        CommandDefinition::new(
            "add-entry",
            "Add a catalog entry",
            "add-entry <category> <name> <estimated> <actual> [details]",
            cmd_add_entry,
        ),
        CommandDefinition::new(
            "edit-entry",
            "Edit a catalog entry; a selected entry is refreshed in the plan",
            "edit-entry <category> <id> <name> <estimated> <actual> [details]",
            cmd_edit_entry,
        ),
        CommandDefinition::new(
            "delete-entry",
            "Delete a catalog entry and drop it from the plan",
            "delete-entry <category> <id>",
            cmd_delete_entry,
        ),
        CommandDefinition::new(
            "toggle",
            "Select or deselect a catalog entry",
            "toggle <category> <id>",
            cmd_toggle,
        ),
        CommandDefinition::new(
            "select",
            "Add a catalog entry to the plan",
            "select <category> <id>",
            cmd_select,
        ),
        CommandDefinition::new(
            "deselect",
            "Remove an item from the plan",
            "deselect <category> <id>",
            cmd_deselect,
        ),
        CommandDefinition::new(
            "selected",
            "List selected items, optionally for one category",
            "selected [category]",
            cmd_selected,
        ),
        CommandDefinition::new(
            "summary",
            "Show estimated vs actual totals by category",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for category in Category::ALL {
        let tag = CategoryTag::from(category);
        let selected = context.ledger.list_by_category(&tag).len();
        output::block(&format!(
            "  {:<16} {:<16} alias {:<10} {} selected",
            category.display_name(),
            category.tag(),
            category.alias(),
            selected
        ));
    }
    Ok(())
}

fn cmd_catalog(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, "catalog <category>")?;
    let category = parse_category(args[0])?;
    let rows = context.editor(category.clone()).rows();

    output::section(category.display_name());
    if rows.is_empty() {
        output::info("No catalog entries yet. Use `add-entry` to create one.");
        return Ok(());
    }
    let symbol = &context.config.currency_symbol;
    for row in &rows {
        output::block(&render::catalog_line(row, symbol));
    }
    Ok(())
}

fn cmd_add_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "add-entry <category> <name> <estimated> <actual> [details]";
    require_args(args, 4, USAGE)?;
    let category = parse_category(args[0])?;
    let draft = CatalogDraft {
        name: args[1].to_string(),
        details: args.get(4).map(|details| details.to_string()).unwrap_or_default(),
        estimated_cost: parse_amount(args[2])?,
        actual_cost: parse_amount(args[3])?,
    };

    let entry = context.editor(category.clone()).create(draft);
    output::success(format!(
        "Added #{} {} to {}.",
        entry.id,
        entry.name,
        category.display_name()
    ));
    output::hint(format!("Use `select {} {}` to add it to the plan.", category, entry.id));
    Ok(())
}

fn cmd_edit_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "edit-entry <category> <id> <name> <estimated> <actual> [details]";
    require_args(args, 5, USAGE)?;
    let category = parse_category(args[0])?;
    let id = parse_id(args[1])?;
    let details = match args.get(5) {
        Some(details) => details.to_string(),
        None => context
            .catalog
            .entry(&category, id)
            .map(|existing| existing.details)
            .unwrap_or_default(),
    };
    let entry = CatalogEntry {
        id,
        name: args[2].to_string(),
        details,
        estimated_cost: parse_amount(args[3])?,
        actual_cost: parse_amount(args[4])?,
    };

    let editor = context.editor(category);
    editor.save_edit(entry)?;
    if editor.is_selected(id) {
        output::success(format!("Updated #{id}; the plan now uses the new figures."));
    } else {
        output::success(format!("Updated #{id}."));
    }
    Ok(())
}

fn cmd_delete_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, "delete-entry <category> <id>")?;
    let category = parse_category(args[0])?;
    let id = parse_id(args[1])?;

    let prompt = format!("Delete #{id} from {}?", category.display_name());
    if !context.confirm(&prompt)? {
        output::info("Deletion cancelled.");
        return Ok(());
    }
    let removed = context.editor(category).delete(id)?;
    output::success(format!("Deleted #{} {}.", removed.id, removed.name));
    Ok(())
}

fn cmd_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, "toggle <category> <id>")?;
    let category = parse_category(args[0])?;
    let id = parse_id(args[1])?;

    if context.editor(category.clone()).toggle(id)? {
        output::success(format!("Selected #{id} in {}.", category.display_name()));
    } else {
        output::success(format!("Deselected #{id} in {}.", category.display_name()));
    }
    Ok(())
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, "select <category> <id>")?;
    let category = parse_category(args[0])?;
    let id = parse_id(args[1])?;

    let editor = context.editor(category.clone());
    if editor.is_selected(id) {
        output::info(format!("#{id} is already selected in {}.", category.display_name()));
        return Ok(());
    }
    editor.select(id)?;
    output::success(format!("Selected #{id} in {}.", category.display_name()));
    Ok(())
}

fn cmd_deselect(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, "deselect <category> <id>")?;
    let category = parse_category(args[0])?;
    let id = parse_id(args[1])?;

    if context.editor(category.clone()).deselect(id) {
        output::success(format!("Deselected #{id} in {}.", category.display_name()));
    } else {
        output::warning(format!("#{id} is not selected in {}.", category.display_name()));
    }
    Ok(())
}

fn cmd_selected(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let items = match args.first() {
        Some(value) => context.ledger.list_by_category(&parse_category(value)?),
        None => context.ledger.list_all(),
    };

    output::section("Selected items");
    if items.is_empty() {
        output::info("No items selected.");
        return Ok(());
    }
    for item in &items {
        output::block(&render::selected_line(item, &context.config.currency_symbol));
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = BudgetAggregator::summarize_ledger(&context.ledger);
    output::section("Budget summary");
    output::block(&render::summary_table(
        &summary,
        &context.config.currency_symbol,
    ));
    Ok(())
}
