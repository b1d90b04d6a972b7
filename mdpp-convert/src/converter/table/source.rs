//! Access to the raw text a table was parsed from.

use crate::tree::TableSource;
use std::path::PathBuf;
use thiserror::Error;

/// Why the raw table text could not be used. Always recovered from by falling
/// back to the cell layout.
#[derive(Debug, Error)]
pub(crate) enum SourceError {
    #[error("table carries no source reference")]
    Missing,

    #[error("cannot read table source '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no |=== fence pair at or after line {line}")]
    NoFences { line: usize },
}

/// All source lines backing the table: embedded lines first, the file otherwise.
pub(crate) fn source_lines(source: &TableSource) -> Result<Vec<String>, SourceError> {
    if let Some(lines) = &source.lines {
        return Ok(lines.clone());
    }
    let path = source.path.as_ref().ok_or(SourceError::Missing)?;
    let text = std::fs::read_to_string(path).map_err(|err| SourceError::Read {
        path: path.clone(),
        source: err,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

fn is_fence(line: &str) -> bool {
    line.trim_end().starts_with("|===")
}

/// The lines strictly between the first two `|===` fences at or after the
/// table's start line.
pub(crate) fn table_span(source: &TableSource) -> Result<Vec<String>, SourceError> {
    let lines = source_lines(source)?;
    let line = source.line.unwrap_or(1);
    let start = line.saturating_sub(1);

    let mut fences = lines
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(_, text)| is_fence(text))
        .map(|(idx, _)| idx);
    match (fences.next(), fences.next()) {
        (Some(open), Some(close)) => Ok(lines[open + 1..close].to_vec()),
        _ => Err(SourceError::NoFences { line }),
    }
}
