use super::paths::{access_log_dir, error_log_path};
use super::ConfigError;
use crate::access_log::{
    open_access_log_with, AccessLog, AccessLogPolicy, DEFAULT_ACCESS_LOG_MAX_AGE_HOURS,
};
use crate::error_log::{open_error_log, ErrorLogger};
use crate::shared::LogFileError;
use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    pub error_log: PathBuf,
    pub access_log_dir: PathBuf,
    #[serde(default = "default_access_log_max_age_hours")]
    pub access_log_max_age_hours: u32,
}

fn default_access_log_max_age_hours() -> u32 {
    DEFAULT_ACCESS_LOG_MAX_AGE_HOURS as u32
}

impl LogSettings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// `logs/error.log` and `logs/access` under `state_root`.
    pub fn from_state_root(state_root: &Path) -> Self {
        Self {
            error_log: error_log_path(state_root),
            access_log_dir: access_log_dir(state_root),
            access_log_max_age_hours: default_access_log_max_age_hours(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_log.as_os_str().is_empty() {
            return Err(ConfigError::Settings(
                "`error_log` must be non-empty".to_string(),
            ));
        }
        if self.error_log.file_name().is_none() {
            return Err(ConfigError::Settings(format!(
                "`error_log` must name a file, got `{}`",
                self.error_log.display()
            )));
        }
        if self.access_log_dir.as_os_str().is_empty() {
            return Err(ConfigError::Settings(
                "`access_log_dir` must be non-empty".to_string(),
            ));
        }
        if self.access_log_max_age_hours == 0 {
            return Err(ConfigError::Settings(
                "`access_log_max_age_hours` must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn access_log_policy(&self) -> AccessLogPolicy {
        AccessLogPolicy {
            max_age: Duration::hours(i64::from(self.access_log_max_age_hours)),
        }
    }

    pub fn open_error_log(&self) -> Result<ErrorLogger, LogFileError> {
        open_error_log(&self.error_log)
    }

    pub fn open_access_log(&self) -> Result<AccessLog, LogFileError> {
        open_access_log_with(&self.access_log_dir, &self.access_log_policy(), Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_age_defaults_to_one_week() {
        let settings: LogSettings = serde_yaml::from_str(
            r#"
error_log: /var/log/app/error.log
access_log_dir: /var/log/app/access
"#,
        )
        .expect("parse settings");
        assert_eq!(settings.access_log_max_age_hours, 168);
        assert_eq!(settings.access_log_policy(), AccessLogPolicy::default());
        settings.validate().expect("valid settings");
    }

    #[test]
    fn validate_rejects_zero_max_age() {
        let mut settings = LogSettings::from_state_root(Path::new("/srv/app"));
        settings.access_log_max_age_hours = 0;
        let err = settings.validate().expect_err("zero max age");
        assert!(err.to_string().contains("access_log_max_age_hours"));
    }

    #[test]
    fn validate_rejects_error_log_without_file_name() {
        let mut settings = LogSettings::from_state_root(Path::new("/srv/app"));
        settings.error_log = PathBuf::from("/");
        assert!(settings.validate().is_err());

        settings.error_log = PathBuf::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn state_root_layout() {
        let settings = LogSettings::from_state_root(Path::new("/srv/app"));
        assert_eq!(settings.error_log, PathBuf::from("/srv/app/logs/error.log"));
        assert_eq!(settings.access_log_dir, PathBuf::from("/srv/app/logs/access"));
    }
}
