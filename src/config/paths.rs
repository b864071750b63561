use crate::config::ConfigError;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATE_ROOT_DIR: &str = ".serverlogs";
pub const SETTINGS_FILE_NAME: &str = "config.yaml";
pub const LOGS_DIR_NAME: &str = "logs";
pub const ERROR_LOG_FILE_NAME: &str = "error.log";
pub const ACCESS_LOG_DIR_NAME: &str = "access";

pub fn default_state_root_path() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(DEFAULT_STATE_ROOT_DIR))
}

pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    Ok(default_state_root_path()?.join(SETTINGS_FILE_NAME))
}

pub fn error_log_path(state_root: &Path) -> PathBuf {
    state_root.join(LOGS_DIR_NAME).join(ERROR_LOG_FILE_NAME)
}

pub fn access_log_dir(state_root: &Path) -> PathBuf {
    state_root.join(LOGS_DIR_NAME).join(ACCESS_LOG_DIR_NAME)
}
