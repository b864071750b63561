use std::io;

#[derive(Debug, thiserror::Error)]
pub enum LogFileError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to list log directory {path}: {source}")]
    ListDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LogFileError {
    /// The filesystem error exactly as the OS reported it.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::CreateDir { source, .. }
            | Self::ListDir { source, .. }
            | Self::Open { source, .. } => source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }

    pub fn path(&self) -> &str {
        match self {
            Self::CreateDir { path, .. } | Self::ListDir { path, .. } | Self::Open { path, .. } => {
                path
            }
        }
    }

    pub fn into_io_error(self) -> io::Error {
        match self {
            Self::CreateDir { source, .. }
            | Self::ListDir { source, .. }
            | Self::Open { source, .. } => source,
        }
    }
}

impl From<LogFileError> for io::Error {
    fn from(err: LogFileError) -> Self {
        err.into_io_error()
    }
}
