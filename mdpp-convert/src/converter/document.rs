//! Document, header, preamble and section rules.

use super::image::is_standalone_image_line;
use super::util::{join_blocks, text_width};
use super::Converter;
use crate::error::ConvertError;
use crate::tree::{Node, NodeKind};

pub(super) fn convert_document(cx: &Converter, doc: Node<'_>) -> Result<String, ConvertError> {
    let children: Vec<Node<'_>> = doc.children().collect();

    let (title, mut blocks) = match doc.document().title() {
        Some(title) => (Some(title), children),
        None => promote_first_section(children),
    };
    if title.is_some() {
        // The setext heading above already carries the title
        blocks.retain(|block| *block.kind() != NodeKind::Header);
    }

    let mut parts = Vec::with_capacity(blocks.len() + 1);
    if let Some(title) = title {
        parts.push(setext_heading(title));
    }
    for block in &blocks {
        parts.push(cx.convert_node(*block, None)?);
    }

    let mut output = join_blocks(parts);
    if blocks.last().is_some_and(|last| ends_with_floated_image(*last)) {
        output.push('\n');
    }
    Ok(output)
}

/// Lift the title of a leading section to document level and splice its
/// children in front of the remaining top-level blocks.
fn promote_first_section(children: Vec<Node<'_>>) -> (Option<&str>, Vec<Node<'_>>) {
    let first = match children.first() {
        Some(first) if *first.kind() == NodeKind::Section => *first,
        _ => return (None, children),
    };
    let title = match first.title().filter(|t| !t.trim().is_empty()) {
        Some(title) => title,
        None => return (None, children),
    };

    let mut blocks: Vec<Node<'_>> = first.children().collect();
    blocks.extend(children.into_iter().skip(1));
    (Some(title), blocks)
}

fn ends_with_floated_image(node: Node<'_>) -> bool {
    *node.kind() == NodeKind::Paragraph
        && matches!(node.lines(), [line] if is_standalone_image_line(line))
}

pub(super) fn setext_heading(title: &str) -> String {
    format!("{title}\n{}", "=".repeat(text_width(title)))
}

pub(super) fn convert_header(_cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let title = node
        .title()
        .or_else(|| node.document().title())
        .filter(|t| !t.trim().is_empty());
    Ok(title.map(setext_heading).unwrap_or_default())
}

pub(super) fn convert_preamble(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    Ok(join_blocks(cx.convert_children(node)?))
}

pub(super) fn convert_section(cx: &Converter, section: Node<'_>) -> Result<String, ConvertError> {
    let level = section.level().max(1);
    let mut heading = String::new();
    if let Some(id) = section.id() {
        if cx.is_explicit_id(section, id) {
            heading.push_str(&format!("<!-- #{id} -->\n"));
        }
    }
    heading.push_str(&format!(
        "{} {}",
        "#".repeat(level),
        section.title().unwrap_or_default()
    ));

    let mut parts = vec![heading];
    parts.extend(cx.convert_children(section)?);
    Ok(join_blocks(parts))
}
