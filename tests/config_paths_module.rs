use serverlogs::config::{
    default_settings_path, default_state_root_path, load_global_settings, ConfigError,
};
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn global_settings_resolve_under_home() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let home = tempdir().expect("tempdir");
    let previous = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());

    let root = default_state_root_path().expect("state root");
    let settings_path = default_settings_path().expect("settings path");
    let missing = load_global_settings().expect_err("no settings yet");

    fs::create_dir_all(&root).expect("mkdir state root");
    fs::write(
        &settings_path,
        format!(
            "error_log: {root}/logs/error.log\naccess_log_dir: {root}/logs/access\n",
            root = root.display()
        ),
    )
    .expect("write settings");
    let loaded = load_global_settings();

    match previous {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }

    assert_eq!(root, home.path().join(".serverlogs"));
    assert_eq!(settings_path, home.path().join(".serverlogs/config.yaml"));
    assert!(matches!(missing, ConfigError::Read { .. }), "{missing}");
    let settings = loaded.expect("load global settings");
    assert_eq!(settings.error_log, root.join("logs/error.log"));
    assert_eq!(settings.access_log_max_age_hours, 168);
}

#[test]
fn global_settings_require_home() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let previous = std::env::var_os("HOME");
    std::env::remove_var("HOME");

    let result = default_state_root_path();

    if let Some(value) = previous {
        std::env::set_var("HOME", value);
    }

    let err = result.expect_err("HOME unset");
    assert!(matches!(err, ConfigError::HomeDirectoryUnavailable), "{err}");
}
