use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cell text of a table as resolved by the parser.
///
/// Cells are flattened to text: multi-paragraph cells and nested blocks lose their
/// structure here, which is why a table may also carry a [`TableSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub header: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    /// Declared column count (`cols` attribute); inferred from the cells when absent.
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub source: Option<TableSource>,
}

impl TableData {
    pub fn column_count(&self) -> usize {
        if let Some(columns) = self.columns {
            return columns;
        }
        let header = self.header.as_ref().map_or(0, Vec::len);
        let body = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        header.max(body)
    }
}

/// Handle back to the source text a table was parsed from.
///
/// Either the lines are embedded directly or a file path is given; `line` is the
/// 1-based line at which the table block starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub lines: Option<Vec<String>>,
}
