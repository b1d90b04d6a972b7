//! Ordered and unordered lists.
//!
//! Only lists whose immediate parent is a list item are indented (two spaces per
//! level below the first); a top-level list starts at column zero no matter how
//! deep the enclosing section is. Continuation lines of an item hang under the
//! first character of the item text. Nested lists already carry their own
//! indentation and are placed as-is.

use super::util::{hang, indent};
use super::Converter;
use crate::error::ConvertError;
use crate::tree::{Node, NodeKind};

/// Rendered pieces of one list item.
struct ItemParts {
    text: String,
    blocks: Vec<ItemBlock>,
}

struct ItemBlock {
    nested_list: bool,
    body: String,
}

fn item_parts(cx: &Converter, item: Node<'_>) -> Result<ItemParts, ConvertError> {
    let mut blocks = Vec::new();
    for child in item.children() {
        blocks.push(ItemBlock {
            nested_list: child.kind().is_list(),
            body: cx.convert_node(child, None)?,
        });
    }
    Ok(ItemParts {
        text: item.text().unwrap_or_default().to_string(),
        blocks,
    })
}

fn list_indent(list: Node<'_>) -> String {
    let nested = list
        .parent()
        .is_some_and(|parent| *parent.kind() == NodeKind::ListItem);
    if nested {
        "  ".repeat(list.level().saturating_sub(1))
    } else {
        String::new()
    }
}

fn render_item(parts: ItemParts, prefix: &str, hanging: usize) -> String {
    let mut out = format!("{prefix}{}", hang(&parts.text, hanging));
    for block in parts.blocks {
        if block.body.is_empty() {
            continue;
        }
        out.push('\n');
        if block.nested_list {
            out.push_str(&block.body);
        } else {
            out.push_str(&indent(&block.body, hanging));
        }
    }
    out
}

fn items<'d>(list: Node<'d>) -> Result<Vec<Node<'d>>, ConvertError> {
    let items: Vec<Node<'d>> = list.children().collect();
    if items.is_empty() {
        return Err(ConvertError::structure(
            list.kind().name(),
            "list has no items",
        ));
    }
    Ok(items)
}

pub(super) fn convert_ulist(cx: &Converter, list: Node<'_>) -> Result<String, ConvertError> {
    let indent = list_indent(list);
    let prefix = format!("{indent}- ");
    let mut rendered = Vec::new();
    for item in items(list)? {
        let parts = item_parts(cx, item)?;
        rendered.push(render_item(parts, &prefix, indent.len() + 2));
    }
    Ok(rendered.join("\n"))
}

pub(super) fn convert_olist(cx: &Converter, list: Node<'_>) -> Result<String, ConvertError> {
    let indent = list_indent(list);
    let mut rendered = Vec::new();
    for (idx, item) in items(list)?.into_iter().enumerate() {
        let prefix = format!("{indent}{}. ", idx + 1);
        let parts = item_parts(cx, item)?;
        rendered.push(render_item(parts, &prefix, prefix.len()));
    }
    Ok(rendered.join("\n"))
}

pub(super) fn convert_list_item(cx: &Converter, item: Node<'_>) -> Result<String, ConvertError> {
    let parts = item_parts(cx, item)?;
    let mut lines = vec![parts.text];
    lines.extend(parts.blocks.into_iter().map(|block| block.body));
    Ok(lines.join("\n"))
}
