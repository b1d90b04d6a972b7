//! Paragraphs, admonitions, examples, verbatim blocks, breaks and videos.

use super::image::replace_image_macros;
use super::util::{block_quote, fenced, join_blocks, quote_lines, style_comment, title_case};
use super::Converter;
use crate::error::ConvertError;
use crate::include::is_include_marker;
use crate::tree::{Node, NodeKind};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(=+)\s+(.+)$").expect("valid regex"));

pub(super) fn convert_paragraph(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let lines = node.lines();

    if let [line] = lines {
        if is_include_marker(line.trim()) {
            return Ok(line.trim().to_string());
        }
    }

    if !lines.is_empty() {
        if let Some(rendered) = replace_image_macros(&lines.join("\n")) {
            return Ok(rendered);
        }
    }

    if node.has_children() {
        return Ok(cx.convert_children(node)?.concat());
    }
    Ok(lines.join("\n"))
}

pub(super) fn convert_admonition(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let caption = node.caption().or(node.attr("name")).unwrap_or_default();
    let style = style_comment(&format!("Admonition{}", title_case(caption)));

    if node.has_children() {
        let content = cx
            .convert_children(node)?
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("{style}\n{}", quote_lines(&content)))
    } else {
        // Short form (`TIP: text`) keeps a trailing blank line
        let quoted = quote_lines(&node.lines().join("\n"));
        Ok(format!("{style}\n{quoted}\n"))
    }
}

pub(super) fn convert_example(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let mut out = String::new();
    for (idx, child) in node.children().enumerate() {
        let rendered = cx.convert_node(child, None)?;
        let depth = if *child.kind() == NodeKind::Listing {
            2
        } else {
            1
        };
        match idx {
            0 => {}
            1 => out.push_str("\n>\n"),
            _ => out.push_str("\n> \n"),
        }
        out.push_str(&block_quote(&rendered, depth));
    }
    Ok(out)
}

pub(super) fn convert_literal(_cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    Ok(fenced(None, node.lines()))
}

pub(super) fn convert_listing(_cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let in_example = node.has_ancestor(&NodeKind::Example);
    let language = node.attr("language").filter(|l| !l.is_empty());

    let rendered = match node.style() {
        Some("source") if !in_example => fenced(language, node.lines()),
        None | Some("listing") if !in_example => fenced(None, node.lines()),
        _ => loose_text(node.lines()),
    };
    Ok(rendered)
}

/// Read verbatim lines as light prose: blank-line separated groups, where a
/// lone `== Title` line becomes a heading and other groups are unwrapped.
fn loose_text(lines: &[String]) -> String {
    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    join_blocks(groups.into_iter().map(|group| match group.as_slice() {
        [single] => match HEADING_MARKER.captures(single) {
            Some(caps) => format!("{} {}", "#".repeat(caps[1].len()), &caps[2]),
            None => (*single).to_string(),
        },
        _ => group.join(" "),
    }))
}

pub(super) fn convert_thematic_break(
    _cx: &Converter,
    _node: Node<'_>,
) -> Result<String, ConvertError> {
    Ok("---".to_string())
}

pub(super) fn convert_page_break(
    _cx: &Converter,
    _node: Node<'_>,
) -> Result<String, ConvertError> {
    Ok(String::new())
}

pub(super) fn convert_video(cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let options = cx.options();
    let target = node.attr("target").or(node.target()).unwrap_or_default();
    let width = node
        .attributes()
        .non_empty("width")
        .unwrap_or(&options.video_width);
    let height = node
        .attributes()
        .non_empty("height")
        .unwrap_or(&options.video_height);

    Ok(format!(
        "<div class=\"video\">\n\
         <iframe width=\"{width}\" height=\"{height}\" \
         src=\"https://www.youtube.com/embed/{target}\" \
         frameborder=\"0\" allowfullscreen></iframe>\n\
         </div>"
    ))
}
