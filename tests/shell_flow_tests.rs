mod common;

use common::{empty_plan_shell, open_shell, run, temp_base};
use wedding_budget::cli::{CommandError, LoopControl};
use wedplan_core::{BudgetAggregator, CatalogProvider, SelectionLedger};
use wedplan_domain::{Category, CategoryTag, SelectedItem};
use wedplan_storage_json::save_selections_to_path;

fn tag(category: Category) -> CategoryTag {
    category.into()
}

#[test]
fn fresh_plan_starts_from_sample_selections() {
    let shell = open_shell(&temp_base(), None);
    assert_eq!(shell.ledger.len(), 15);
    assert!(shell.ledger.is_selected(&tag(Category::WeddingHall), 1));
    assert_eq!(shell.ledger.list_by_category(&tag(Category::WeddingDay)).len(), 5);
}

#[test]
fn seed_flag_off_starts_empty_but_keeps_catalog() {
    let shell = empty_plan_shell();
    assert!(shell.ledger.is_empty());
    assert!(!shell.catalog.entries(&tag(Category::Honeymoon)).is_empty());
}

#[test]
fn select_toggle_and_deselect_drive_the_ledger() {
    let mut shell = empty_plan_shell();
    let halls = tag(Category::WeddingHall);

    run(&mut shell, &["select hall 2"]);
    assert!(shell.ledger.is_selected(&halls, 2));

    run(&mut shell, &["toggle wedding-halls 2", "toggle hall 1"]);
    assert!(!shell.ledger.is_selected(&halls, 2));
    assert!(shell.ledger.is_selected(&halls, 1));

    run(&mut shell, &["deselect hall 1", "deselect hall 1"]);
    assert!(shell.ledger.is_empty());
}

#[test]
fn editing_a_selected_entry_refreshes_the_plan() {
    let mut shell = empty_plan_shell();
    let halls = tag(Category::WeddingHall);

    run(
        &mut shell,
        &[
            "select hall 1",
            r#"edit-entry hall 1 "Grand Wedding Hall" 15000000 15200000"#,
        ],
    );
    let item = shell.ledger.get(&halls, 1).expect("still selected");
    assert_eq!(item.actual_cost, 15_200_000);
    assert_eq!(item.details, "Gangnam, 200 guests, modern style");

    run(&mut shell, &[r#"edit-entry hall 2 "Royal Wedding Hall" 1 1"#]);
    assert!(!shell.ledger.is_selected(&halls, 2));
}

#[test]
fn deleting_an_entry_drops_its_selection() {
    let mut shell = empty_plan_shell();
    run(&mut shell, &["select photo 1", "delete-entry photo 1"]);

    let photos = tag(Category::WeddingPhoto);
    assert!(shell.ledger.list_by_category(&photos).is_empty());
    assert!(shell.catalog.entry(&photos, 1).is_none());
}

#[test]
fn added_entries_can_be_selected() {
    let mut shell = empty_plan_shell();
    run(
        &mut shell,
        &[r#"add-entry honeymoon "Jeju 3N4D" 1,800,000 1_750_000 "Resort villa""#],
    );
    let honeymoons = tag(Category::Honeymoon);
    let added = shell
        .catalog
        .entries(&honeymoons)
        .into_iter()
        .find(|entry| entry.name == "Jeju 3N4D")
        .expect("entry added");
    assert_eq!(added.estimated_cost, 1_800_000);
    assert_eq!(added.details, "Resort villa");

    let select = format!("select honeymoon {}", added.id);
    run(&mut shell, &[select.as_str()]);
    let summary = BudgetAggregator::summarize_ledger(&shell.ledger);
    assert_eq!(summary.totals.estimated, 1_800_000);
    assert_eq!(summary.totals.variance, 50_000);
}

#[test]
fn bad_arguments_surface_as_invalid_arguments() {
    let mut shell = empty_plan_shell();
    assert!(matches!(
        shell.process_line("select catering 1"),
        Err(CommandError::InvalidArguments(_))
    ));
    assert!(matches!(
        shell.process_line("select hall"),
        Err(CommandError::InvalidArguments(_))
    ));
    assert!(matches!(
        shell.process_line("select hall 99"),
        Err(CommandError::Core(_))
    ));
    assert!(shell.ledger.is_empty());
}

#[test]
fn unknown_commands_do_not_stop_the_shell() {
    let mut shell = empty_plan_shell();
    assert_eq!(shell.process_line("sumary").unwrap(), LoopControl::Continue);
    assert_eq!(shell.process_line("   ").unwrap(), LoopControl::Continue);
    assert_eq!(shell.process_line("exit").unwrap(), LoopControl::Exit);
    assert!(!shell.running);
}

#[test]
fn saved_selections_are_loaded_on_next_start() {
    let base = temp_base();
    let mut shell = open_shell(&base, None);
    run(&mut shell, &["deselect day 1", "save"]);
    let expected = shell.ledger.list_all();
    assert_eq!(expected.len(), 14);

    let reopened = open_shell(&base, None);
    assert_eq!(reopened.ledger.list_all(), expected);
}

#[test]
fn created_and_deleted_entries_survive_a_restart() {
    let base = temp_base();
    let mut shell = open_shell(&base, None);
    run(
        &mut shell,
        &[r#"add-entry honeymoon "Jeju" 2000000 1900000"#, "delete-entry photo 3"],
    );
    let honeymoons = tag(Category::Honeymoon);
    let jeju = shell
        .catalog
        .entries(&honeymoons)
        .into_iter()
        .find(|entry| entry.name == "Jeju")
        .expect("entry added");
    let select = format!("select honeymoon {}", jeju.id);
    run(&mut shell, &[select.as_str(), "save"]);

    let mut reopened = open_shell(&base, None);
    assert_eq!(reopened.catalog.entry(&honeymoons, jeju.id), Some(jeju.clone()));
    assert!(reopened.catalog.entry(&tag(Category::WeddingPhoto), 3).is_none());

    let edit = format!(r#"edit-entry honeymoon {} "Jeju" 2000000 2100000"#, jeju.id);
    let toggle = format!("toggle honeymoon {}", jeju.id);
    run(&mut reopened, &[edit.as_str(), toggle.as_str()]);
    assert!(!reopened.ledger.is_selected(&honeymoons, jeju.id));
    run(&mut reopened, &[toggle.as_str()]);
    let item = reopened.ledger.get(&honeymoons, jeju.id).expect("selected again");
    assert_eq!(item.actual_cost, 2_100_000);
}

#[test]
fn selections_without_a_saved_catalog_get_their_entries_back() {
    let base = temp_base();
    let orphan = SelectedItem::new(
        Category::Honeymoon,
        1_792_058_597_655,
        "Jeju",
        2_000_000,
        1_900_000,
    )
    .with_details("Seogwipo");
    save_selections_to_path(&[orphan.clone()], &base.join("data").join("selections.json"))
        .expect("write selections");

    let mut shell = open_shell(&base, None);
    let honeymoons = tag(Category::Honeymoon);
    let entry = shell.catalog.entry(&honeymoons, orphan.id).expect("entry rebuilt");
    assert_eq!(entry.details, "Seogwipo");
    assert!(shell.catalog.entry(&honeymoons, 1).is_some());

    let delete = format!("delete-entry honeymoon {}", orphan.id);
    run(&mut shell, &[delete.as_str()]);
    assert!(shell.ledger.is_empty());
}

#[test]
fn autosave_on_shutdown_respects_config() {
    let base = temp_base();
    let mut shell = open_shell(&base, None);
    run(&mut shell, &["deselect hall 1"]);
    shell.shutdown().expect("shutdown");
    assert_eq!(open_shell(&base, None).ledger.len(), 14);

    let mut shell = open_shell(&base, None);
    run(&mut shell, &["config set autosave off", "deselect photo 1"]);
    shell.shutdown().expect("shutdown");
    assert_eq!(open_shell(&base, None).ledger.len(), 14);
}

#[test]
fn backups_restore_previous_selections() {
    let base = temp_base();
    let mut shell = open_shell(&base, None);
    run(&mut shell, &["save", "deselect household 10", "save"]);
    assert_eq!(shell.storage.list_backups().expect("list").len(), 1);

    let backup = shell.storage.list_backups().expect("list").remove(0);
    let restore = format!("backups restore {}", backup.id);
    run(&mut shell, &[restore.as_str()]);
    assert_eq!(shell.ledger.len(), 15);
    assert!(shell.ledger.is_selected(&tag(Category::Household), 10));
}

#[test]
fn config_changes_are_persisted() {
    let base = temp_base();
    let mut shell = open_shell(&base, None);
    run(
        &mut shell,
        &["config set currency_symbol $", "config set theme plain", "config backup before"],
    );
    assert_eq!(shell.config.currency_symbol, "$");

    let reopened = open_shell(&base, None);
    assert_eq!(reopened.config.currency_symbol, "$");
    assert_eq!(reopened.config_manager.list_backups().expect("list").len(), 1);
    assert!(matches!(
        shell.process_line("config set volume 11"),
        Err(CommandError::Config(_))
    ));
}
