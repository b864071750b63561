use serde::Serialize;
use std::io::{self, Write};

/// Serializes `payload` and writes it as a single newline-terminated line.
///
/// The whole line goes out in one `write_all` so appenders sharing a file
/// never interleave inside a record.
pub fn write_json_line<W, T>(writer: &mut W, payload: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let mut line =
        serde_json::to_string(payload).map_err(|source| io::Error::other(source.to_string()))?;
    line.push('\n');
    writer.write_all(line.as_bytes())
}
