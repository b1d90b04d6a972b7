//! Two-column tables rebuilt from their source text.
//!
//! The parser flattens every cell to a line of text, so a cell holding a code
//! block or an admonition cannot be rendered from the cell texts alone. Here the
//! raw lines between the `|===` fences are re-read instead: a line starting with
//! `|` opens a logical row and names it (column one), everything up to the next
//! such line is detail (column two), one physical line per detail line.
//!
//! ```text
//! <!-- multiline -->
//! | Option    | Description  |
//! |-----------|--------------|
//! | --verbose | ```          |
//! |           | mdpp -v      |
//! |           | ```          |
//! |           |              |
//! | --quiet   | Silence.     |
//! ```

use super::style_line;
use crate::converter::util::{pad_right, style_comment, text_width, title_case};
use crate::tree::TableData;
use once_cell::sync::Lazy;
use regex::Regex;

/// Cell spec closing the row header cell (`a`, `2+`, `3*`, `.2+^a`). Only
/// recognised after whitespace; `|a|b` keeps `a` as cell text.
static TRAILING_CELL_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+(?:\d+\*)?(?:\d*(?:\.\d+)?\+)?[<^>]?(?:\.[<^>])?[a-z]?$")
        .expect("valid regex")
});

/// Detail line opened with a cell style (`a|...`).
static STYLED_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]\|(.*)$").expect("valid regex"));

static ADMONITION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+):\s*(.*)$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Row {
    pub header: String,
    pub details: Vec<String>,
}

/// Split the fenced span into logical rows. With `skip_header` the first row
/// line is the table header and is dropped.
pub(super) fn parse_rows(span: &[String], skip_header: bool) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut header_pending = skip_header;
    let mut skipping = false;

    for line in span {
        let line = line.trim_end();
        if let Some(rest) = line.strip_prefix('|') {
            if header_pending {
                header_pending = false;
                skipping = true;
                continue;
            }
            skipping = false;
            rows.push(open_row(rest));
        } else if line.trim().is_empty() || skipping {
            continue;
        } else if let Some(row) = rows.last_mut() {
            let detail = match STYLED_DETAIL.captures(line) {
                Some(caps) => caps[1].to_string(),
                None => line.to_string(),
            };
            if !detail.trim().is_empty() {
                row.details.push(detail);
            }
        }
    }

    rows.into_iter()
        .map(|row| Row {
            header: row.header,
            details: expand_details(row.details),
        })
        .collect()
}

fn open_row(rest: &str) -> Row {
    let (header, inline) = match rest.split_once('|') {
        Some((cell, inline)) => (
            TRAILING_CELL_SPEC.replace(cell, "").trim().to_string(),
            inline.trim().to_string(),
        ),
        None => (rest.trim().to_string(), String::new()),
    };
    let details = if inline.is_empty() {
        Vec::new()
    } else {
        vec![inline]
    };
    Row { header, details }
}

fn is_code_fence(line: &str) -> bool {
    let line = line.trim();
    line == "----" || line.starts_with("```")
}

/// Turn the nested block a detail cell opens with into target markup.
fn expand_details(details: Vec<String>) -> Vec<String> {
    let first = match details.first() {
        Some(first) => first.trim(),
        None => return details,
    };

    if first.starts_with("[source") {
        let rest = &details[1..];
        let code: Vec<String> = match rest.iter().position(|l| is_code_fence(l)) {
            Some(open) => {
                let body = &rest[open + 1..];
                let close = body.iter().position(|l| is_code_fence(l)).unwrap_or(body.len());
                body[..close].to_vec()
            }
            None => rest.to_vec(),
        };
        let mut fenced = Vec::with_capacity(code.len() + 2);
        fenced.push("```".to_string());
        fenced.extend(code);
        fenced.push("```".to_string());
        return fenced;
    }

    if first == "====" {
        let line = details.get(1).map(|l| l.trim()).unwrap_or_default();
        let (caption, body) = match ADMONITION_LINE.captures(line) {
            Some(caps) => (title_case(&caps[1]), caps[2].to_string()),
            None => (String::new(), line.to_string()),
        };
        return vec![
            style_comment(&format!("Admonition{caption}")),
            format!("> {body}"),
        ];
    }

    details
}

/// Lay out the rows; `None` when the span held no rows at all.
pub(super) fn render(table: &TableData, span: &[String], role: Option<&str>) -> Option<String> {
    let mut rows = parse_rows(span, table.header.is_some());
    if rows.is_empty() {
        return None;
    }

    let header = match &table.header {
        Some(header) => [
            header.first().cloned().unwrap_or_default(),
            header.get(1).cloned().unwrap_or_default(),
        ],
        None => {
            let first = rows.remove(0);
            [first.header, first.details.join(" ")]
        }
    };

    let first_width = rows
        .iter()
        .map(|row| text_width(&row.header))
        .chain([text_width(&header[0])])
        .max()
        .unwrap_or(0)
        + 2;
    let second_width = rows
        .iter()
        .flat_map(|row| row.details.iter().map(|d| text_width(d)))
        .chain([text_width(&header[1])])
        .max()
        .unwrap_or(0)
        + 2;

    let multiline = rows.iter().any(|row| row.details.len() > 1);
    let line = |left: &str, right: &str| {
        format!(
            "| {}| {}|",
            pad_right(left, first_width - 1),
            pad_right(right, second_width)
        )
    };

    let mut lines = Vec::new();
    if let Some(style) = style_line(role, multiline) {
        lines.push(style);
    }
    lines.push(line(&header[0], &header[1]));
    lines.push(format!(
        "|{}|{}|",
        "-".repeat(first_width),
        "-".repeat(second_width + 1)
    ));
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            lines.push(line("", ""));
        }
        let first_detail = row.details.first().map(String::as_str).unwrap_or_default();
        lines.push(line(&row.header, first_detail));
        for detail in row.details.iter().skip(1) {
            lines.push(line("", detail));
        }
    }
    Some(lines.join("\n"))
}
