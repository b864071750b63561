use crate::shared::fs_open::{create_parent_dir, open_append_or_create};
use crate::shared::logging::write_json_line;
use crate::shared::LogFileError;
use chrono::{DateTime, Local, SecondsFormat};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Date and time stamped in front of every plain log line.
pub const ERROR_LOG_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Append-only logger bound to an error-log file.
///
/// The logger owns the handle. Dropping it closes the file; `into_file`
/// hands the handle back to the caller instead.
#[derive(Debug)]
pub struct ErrorLogger {
    file: File,
    path: PathBuf,
    prefix: String,
}

/// Opens (creating if needed) the error log at `path`, creating missing
/// parent directories first.
pub fn open_error_log(path: impl AsRef<Path>) -> Result<ErrorLogger, LogFileError> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    let file = open_append_or_create(path)?;
    Ok(ErrorLogger {
        file,
        path: path.to_path_buf(),
        prefix: String::new(),
    })
}

impl ErrorLogger {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn into_file(self) -> File {
        self.file
    }

    pub fn log(&self, message: &str) -> io::Result<()> {
        self.log_at(Local::now(), message)
    }

    pub fn log_at(&self, at: DateTime<Local>, message: &str) -> io::Result<()> {
        let line = format_line(&self.prefix, &at, message);
        (&self.file).write_all(line.as_bytes())
    }

    /// Writes `{"timestamp","level","event","message"}` as one JSON line.
    pub fn log_event(&self, level: &str, event: &str, message: &str) -> io::Result<()> {
        let payload = serde_json::json!({
            "timestamp": Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "level": level,
            "event": event,
            "message": message,
        });
        write_json_line(&mut &self.file, &payload)
    }
}

impl Write for ErrorLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn format_line(prefix: &str, at: &DateTime<Local>, message: &str) -> String {
    let mut line = format!("{prefix}{} {message}", at.format(ERROR_LOG_TIME_FORMAT));
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}
