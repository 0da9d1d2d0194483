use tempfile::tempdir;
use wedplan_config::{Config, ConfigManager, Theme};

#[test]
fn load_without_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = manager.load().expect("load");
    assert_eq!(config, Config::default());
    assert!(manager.config_path().starts_with(dir.path()));
}

#[test]
fn save_and_reload_preserves_changes() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.set("theme", "plain").expect("theme");
    config.set("currency_symbol", "$").expect("symbol");
    config.set("seed_demo_data", "false").expect("seed flag");
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.theme, Theme::Plain);
    assert_eq!(loaded.currency_symbol, "$");
    assert!(!loaded.seed_demo_data);
}

#[test]
fn backups_can_be_listed_and_restored() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    assert!(manager.backup(Some("empty")).expect("backup").is_none());

    let mut config = Config::default();
    config.set("locale", "en-US").expect("locale");
    manager.save(&config).expect("save");
    let snapshot = manager
        .backup(Some("Before trip"))
        .expect("backup")
        .expect("config file exists");
    assert!(snapshot.name.starts_with("config_"));
    assert!(snapshot.name.ends_with("_before-trip.json"));
    assert!(snapshot.created_at.is_some());

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![snapshot.clone()]);

    config.set("locale", "ko-KR").expect("locale");
    manager.save(&config).expect("save again");

    let restored = manager.restore(&snapshot.name).expect("restore");
    assert_eq!(restored.locale, "en-US");
    assert_eq!(manager.load().expect("reload").locale, "en-US");
    assert!(manager.restore("config_missing.json").is_err());
}

#[test]
fn hand_written_partial_config_loads_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::create_dir_all(manager.config_path().parent().expect("config dir"))
        .expect("create config dir");
    std::fs::write(manager.config_path(), r#"{ "theme": "plain" }"#).expect("write config");

    let config = manager.load().expect("load");
    assert_eq!(config.theme, Theme::Plain);
    assert_eq!(config.locale, "ko-KR");
    assert_eq!(config.currency, "KRW");
}
