use super::{default_settings_path, ConfigError, LogSettings};
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<LogSettings, ConfigError> {
    let settings = LogSettings::from_path(path)?;
    settings.validate()?;
    Ok(settings)
}

pub fn load_global_settings() -> Result<LogSettings, ConfigError> {
    let path = default_settings_path()?;
    load_settings(&path)
}
