//! Table rendering.
//!
//! Two layouts exist. The cell layout ([`simple`]) works from the parser's
//! flattened cell texts and handles every table. Two-column tables whose source
//! text is reachable are instead rebuilt from that text ([`multiline`]) so that
//! code blocks and admonitions inside a cell survive. Any problem reaching or
//! reading the source falls back to the cell layout.

mod multiline;
mod simple;
mod source;

use super::util::style_comment;
use super::Converter;
use crate::error::ConvertError;
use crate::tree::{Node, TableData};
use tracing::debug;

/// Style comment heading a table: role tag and/or `multiline`.
fn style_line(role: Option<&str>, multiline: bool) -> Option<String> {
    match (role, multiline) {
        (Some(role), true) => Some(style_comment(&format!("{role}; multiline"))),
        (None, true) => Some("<!-- multiline -->".to_string()),
        (Some(role), false) => Some(style_comment(role)),
        (None, false) => None,
    }
}

pub(super) fn convert_table(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let empty = TableData::default();
    let table = node.table().unwrap_or(&empty);
    let columns = table.column_count();
    if columns == 0 {
        return Err(ConvertError::structure(
            node.kind().name(),
            "table has no columns",
        ));
    }

    if let Some(rendered) = try_multiline(cx, node, table, columns) {
        return Ok(rendered);
    }
    Ok(simple::render(table, node.role()))
}

fn try_multiline(
    cx: &Converter,
    node: Node<'_>,
    table: &TableData,
    columns: usize,
) -> Option<String> {
    if columns != 2 {
        debug!(columns, "cell layout: not a two-column table");
        return None;
    }
    if !cx.options().multiline_tables {
        debug!("cell layout: multiline tables disabled");
        return None;
    }
    let Some(reference) = &table.source else {
        debug!("cell layout: table has no source reference");
        return None;
    };

    let span = match source::table_span(reference) {
        Ok(span) => span,
        Err(err) => {
            debug!(error = %err, "cell layout: table source unusable");
            return None;
        }
    };
    let rendered = multiline::render(table, &span, node.role());
    if rendered.is_none() {
        debug!("cell layout: table source holds no rows");
    }
    rendered
}
