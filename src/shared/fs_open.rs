use super::errors::LogFileError;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Permission bits for newly created log files.
pub const LOG_FILE_MODE: u32 = 0o644;

pub fn create_log_dir(path: &Path) -> Result<(), LogFileError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| LogFileError::CreateDir {
        path: path.display().to_string(),
        source,
    })
}

pub fn create_parent_dir(path: &Path) -> Result<(), LogFileError> {
    match path.parent() {
        Some(parent) => create_log_dir(parent),
        None => Ok(()),
    }
}

/// Read/write, append on every write, create when missing.
pub fn open_append_or_create(path: &Path) -> Result<File, LogFileError> {
    open_with(path, log_file_options().append(true).create(true))
}

/// Read/write append on an existing file; a missing file is an error.
pub fn open_append_existing(path: &Path) -> Result<File, LogFileError> {
    open_with(path, log_file_options().append(true))
}

/// Read/write on a file that must not exist yet.
pub fn create_new(path: &Path) -> Result<File, LogFileError> {
    open_with(path, log_file_options().create_new(true))
}

fn log_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true);
    set_mode(&mut options);
    options
}

fn open_with(path: &Path, options: &OpenOptions) -> Result<File, LogFileError> {
    options.open(path).map_err(|source| LogFileError::Open {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(unix)]
fn set_mode(options: &mut OpenOptions) {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(LOG_FILE_MODE);
}

#[cfg(not(unix))]
fn set_mode(_options: &mut OpenOptions) {}
