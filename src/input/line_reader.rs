use crate::error::AnalyzerError;
use crate::models::LogLine;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a whole log file into numbered lines
///
/// Bytes that are not valid UTF-8 are replaced rather than aborting the read.
/// The file is closed before this returns, on success and on error.
pub fn read_lines(path: &Path) -> Result<Vec<LogLine>, AnalyzerError> {
    let file = File::open(path).map_err(|e| AnalyzerError::from_io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| AnalyzerError::from_io(path, e))?;

    let text = String::from_utf8_lossy(&bytes);
    log::debug!("Read {} bytes from {:?}", bytes.len(), path);

    Ok(lines_from_str(&text))
}

/// Split in-memory text into numbered lines
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn lines_from_str(text: &str) -> Vec<LogLine> {
    let normalized = text.replace("\r\n", "\n");
    let mut parts: Vec<&str> = normalized.split(&['\n', '\r'][..]).collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(idx, line)| LogLine::new(idx + 1, line))
        .collect()
}
