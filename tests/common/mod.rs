#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;
use wedding_budget::cli::{CliMode, ShellContext};
use wedplan_config::{Config, ConfigManager};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated base directory for one test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a script-mode shell over `base`, writing `config` first when given.
pub fn open_shell(base: &PathBuf, config: Option<Config>) -> ShellContext {
    let manager = ConfigManager::with_base_dir(base.clone()).expect("config manager");
    if let Some(config) = config {
        manager.save(&config).expect("save config");
    }
    ShellContext::with_config_manager(CliMode::Script, manager).expect("open shell")
}

/// A shell with the sample catalog but no preselected items.
pub fn empty_plan_shell() -> ShellContext {
    let config = Config {
        seed_demo_data: false,
        ..Config::default()
    };
    open_shell(&temp_base(), Some(config))
}

pub fn run(shell: &mut ShellContext, lines: &[&str]) {
    for line in lines {
        shell
            .process_line(line)
            .unwrap_or_else(|err| panic!("`{line}` failed: {err}"));
    }
}
