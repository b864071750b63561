pub mod entries;
pub mod naming;
pub mod record;

pub use entries::{classify_entries, classify_entry, select_current, AccessLogEntry};
pub use naming::{access_log_file_name, parse_access_log_name, ACCESS_LOG_EXTENSION};
pub use record::{append_access_record, AccessRecord};

use crate::shared::fs_open::{create_log_dir, create_new, open_append_existing};
use crate::shared::LogFileError;
use chrono::{DateTime, Duration, Local, Utc};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_ACCESS_LOG_MAX_AGE_HOURS: i64 = 7 * 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessLogPolicy {
    /// Oldest an existing access log may be and still be reused (inclusive).
    pub max_age: Duration,
}

impl Default for AccessLogPolicy {
    fn default() -> Self {
        Self {
            max_age: Duration::hours(DEFAULT_ACCESS_LOG_MAX_AGE_HOURS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLogSelection {
    Reused,
    Created,
}

#[derive(Debug)]
pub struct AccessLog {
    pub path: PathBuf,
    pub file: File,
    pub selection: AccessLogSelection,
}

impl AccessLog {
    pub fn append(&mut self, record: &AccessRecord) -> io::Result<()> {
        append_access_record(&mut self.file, record)
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

/// Opens the current access log in `dir`, or starts a new one.
///
/// An entry whose name parses as a timestamp no older than seven days is
/// reopened for appending. Otherwise `<now>.log` is created.
pub fn open_access_log(dir: impl AsRef<Path>) -> Result<AccessLog, LogFileError> {
    open_access_log_with(dir, &AccessLogPolicy::default(), Local::now())
}

pub fn open_access_log_with(
    dir: impl AsRef<Path>,
    policy: &AccessLogPolicy,
    now: DateTime<Local>,
) -> Result<AccessLog, LogFileError> {
    let dir = dir.as_ref();
    create_log_dir(dir)?;

    let entries = classify_entries(list_entry_names(dir)?);
    if let Some(current) = select_current(&entries, now.with_timezone(&Utc), policy.max_age) {
        let path = dir.join(current.name());
        let file = open_append_existing(&path)?;
        return Ok(AccessLog {
            path,
            file,
            selection: AccessLogSelection::Reused,
        });
    }

    let path = dir.join(access_log_file_name(&now));
    match create_new(&path) {
        Ok(file) => Ok(AccessLog {
            path,
            file,
            selection: AccessLogSelection::Created,
        }),
        // Another opener created this second's file between our listing and
        // our create; it is current by construction.
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            let file = open_append_existing(&path)?;
            Ok(AccessLog {
                path,
                file,
                selection: AccessLogSelection::Reused,
            })
        }
        Err(err) => Err(err),
    }
}

/// Immediate entry names in filesystem order.
pub fn list_entry_names(dir: &Path) -> Result<Vec<OsString>, LogFileError> {
    let list_err = |source| LogFileError::ListDir {
        path: dir.display().to_string(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        names.push(entry.map_err(list_err)?.file_name());
    }
    Ok(names)
}
