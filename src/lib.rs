pub mod access_log;
pub mod config;
pub mod error_log;
pub mod shared;

pub use access_log::{
    open_access_log, open_access_log_with, AccessLog, AccessLogPolicy, AccessLogSelection,
    AccessRecord,
};
pub use error_log::{open_error_log, ErrorLogger};
pub use shared::LogFileError;
