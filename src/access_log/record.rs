use crate::shared::logging::write_json_line;
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;

/// One served request, written to the access log as a JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub timestamp: String,
    pub remote_addr: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl AccessRecord {
    /// Stamped with the current local time.
    pub fn new(
        remote_addr: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            remote_addr: remote_addr.into(),
            method: method.into(),
            path: path.into(),
            status,
            bytes: 0,
            duration_ms: 0,
            user_agent: None,
        }
    }

    pub fn with_bytes(mut self, bytes: u64) -> Self {
        self.bytes = bytes;
        self
    }

    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

pub fn append_access_record<W>(writer: &mut W, record: &AccessRecord) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_json_line(writer, record)
}
