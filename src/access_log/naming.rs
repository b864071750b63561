use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use std::fmt::Display;
use std::path::Path;

pub const ACCESS_LOG_EXTENSION: &str = "log";

/// `<RFC3339 timestamp>.log`, second precision, `Z` for a zero offset.
pub fn access_log_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}.{ACCESS_LOG_EXTENSION}",
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Parses the part of `name` before its final extension as RFC3339.
///
/// Only the strict layout is accepted: uppercase `T` between date and time,
/// and either uppercase `Z` or a `+hh:mm`/`-hh:mm` offset.
pub fn parse_access_log_name(name: &str) -> Option<DateTime<FixedOffset>> {
    let stem = Path::new(name).file_stem()?.to_str()?;
    if !has_strict_rfc3339_layout(stem) {
        return None;
    }
    DateTime::parse_from_rfc3339(stem).ok()
}

// `YYYY-MM-DDTHH:MM:SS[.f+](Z|±hh:mm)`
fn has_strict_rfc3339_layout(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    if bytes.len() < 20 || !matches_pattern(&bytes[..19], b"dddd-dd-ddTdd:dd:dd") {
        return false;
    }

    let mut rest = &bytes[19..];
    if let Some(fraction) = rest.strip_prefix(b".") {
        let digits = fraction.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return false;
        }
        rest = &fraction[digits..];
    }

    match rest {
        b"Z" => true,
        [b'+' | b'-', offset @ ..] => matches_pattern(offset, b"dd:dd"),
        _ => false,
    }
}

/// `d` in `pattern` matches an ASCII digit; any other byte matches itself.
fn matches_pattern(bytes: &[u8], pattern: &[u8]) -> bool {
    bytes.len() == pattern.len()
        && bytes.iter().zip(pattern).all(|(&b, &p)| match p {
            b'd' => b.is_ascii_digit(),
            _ => b == p,
        })
}
