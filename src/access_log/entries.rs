use super::naming::parse_access_log_name;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use std::ffi::OsStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessLogEntry {
    /// Name parsed as an access-log timestamp.
    Dated {
        name: String,
        timestamp: DateTime<FixedOffset>,
    },
    /// Anything else sharing the directory.
    Ignored { name: String },
}

impl AccessLogEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Dated { name, .. } | Self::Ignored { name } => name,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Dated { timestamp, .. } => Some(*timestamp),
            Self::Ignored { .. } => None,
        }
    }

    /// Age at `now`; negative for entries dated in the future.
    pub fn age_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.timestamp()
            .map(|timestamp| now.signed_duration_since(timestamp))
    }
}

pub fn classify_entry(name: &OsStr) -> AccessLogEntry {
    let Some(utf8) = name.to_str() else {
        return AccessLogEntry::Ignored {
            name: name.to_string_lossy().into_owned(),
        };
    };
    match parse_access_log_name(utf8) {
        Some(timestamp) => AccessLogEntry::Dated {
            name: utf8.to_string(),
            timestamp,
        },
        None => AccessLogEntry::Ignored {
            name: utf8.to_string(),
        },
    }
}

/// Classifies names in the order given; listing order is preserved.
pub fn classify_entries<I, S>(names: I) -> Vec<AccessLogEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    names
        .into_iter()
        .map(|name| classify_entry(name.as_ref()))
        .collect()
}

/// First dated entry whose age at `now` is at most `max_age`.
pub fn select_current(
    entries: &[AccessLogEntry],
    now: DateTime<Utc>,
    max_age: Duration,
) -> Option<&AccessLogEntry> {
    entries
        .iter()
        .find(|entry| matches!(entry.age_at(now), Some(age) if age <= max_age))
}
