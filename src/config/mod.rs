pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::{load_global_settings, load_settings};
pub use paths::{
    access_log_dir, default_settings_path, default_state_root_path, error_log_path,
    ACCESS_LOG_DIR_NAME, DEFAULT_STATE_ROOT_DIR, ERROR_LOG_FILE_NAME, LOGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
pub use settings::LogSettings;
