//! Pipe-table layout from the parser's cell texts.
//!
//! ```text
//! | Name  | Size |
//! |-------|------|
//! | a.txt | 12   |
//! ```

use super::style_line;
use crate::converter::util::{pad_right, text_width};
use crate::tree::TableData;

pub(super) fn render(table: &TableData, role: Option<&str>) -> String {
    let columns = table.column_count();

    let mut body: Vec<Vec<String>> = table.rows.iter().map(|row| normalize(row, columns)).collect();
    let header = match &table.header {
        Some(header) => normalize(header, columns),
        None if !body.is_empty() => body.remove(0),
        None => vec![String::new(); columns],
    };

    let mut widths: Vec<usize> = header.iter().map(|cell| text_width(cell)).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(text_width(cell));
        }
    }
    let widths: Vec<usize> = widths.into_iter().map(|w| w + 2).collect();

    let mut lines = Vec::with_capacity(body.len() + 3);
    if let Some(style) = style_line(role, false) {
        lines.push(style);
    }
    lines.push(format_row(&header, &widths));
    lines.push(format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for row in &body {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Pad or cut a row to the table's column count; cells are single-line.
fn normalize(row: &[String], columns: usize) -> Vec<String> {
    let mut cells: Vec<String> = row
        .iter()
        .take(columns)
        .map(|cell| cell.replace('\n', " "))
        .collect();
    cells.resize(columns, String::new());
    cells
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {}", pad_right(cell, width - 1)))
        .collect();
    format!("|{}|", cells.join("|"))
}
