//! Block and inline images.
//!
//! Both forms go through [`render_image`]. Dimensions become a style comment
//! in front of the image markup: `width=300` → `w300`, `height=50%` →
//! `h50percent`. Without any dimension the bare `![alt](src)` is emitted.

use super::util::style_comment;
use super::Converter;
use crate::error::ConvertError;
use crate::tree::{Attributes, Node};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IMAGE_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bimage::?([^\s\[:][^\s\[]*)\[([^\]]*)\]").expect("valid regex")
});

static STANDALONE_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^image::?[^\s\[]+\[[^\]]*\]$").expect("valid regex"));

/// Whether a source line consists of nothing but one image macro.
pub(crate) fn is_standalone_image_line(line: &str) -> bool {
    STANDALONE_IMAGE.is_match(line.trim())
}

pub(crate) fn render_image(
    alt: &str,
    src: &str,
    width: Option<&str>,
    height: Option<&str>,
) -> String {
    let mut tags = Vec::new();
    if let Some(width) = width.map(str::trim).filter(|w| !w.is_empty()) {
        tags.push(dimension_tag('w', width));
    }
    if let Some(height) = height.map(str::trim).filter(|h| !h.is_empty()) {
        tags.push(dimension_tag('h', height));
    }

    let markup = format!("![{alt}]({src})");
    if tags.is_empty() {
        markup
    } else {
        format!("{}{markup}", style_comment(&tags.join(" ")))
    }
}

fn dimension_tag(axis: char, value: &str) -> String {
    match value.strip_suffix('%') {
        Some(number) => format!("{axis}{}percent", number.trim()),
        None => format!("{axis}{value}"),
    }
}

/// Alt text from slot 1, size from `width`/`height` or slots 2 and 3.
fn render_with_attributes(attributes: &Attributes, src: &str) -> String {
    render_image(
        attributes.positional(1).unwrap_or_default(),
        src,
        attributes.named_or_positional("width", 2),
        attributes.named_or_positional("height", 3),
    )
}

pub(super) fn convert_image(_cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    let src = node.attr("target").or(node.target()).unwrap_or_default();
    Ok(render_with_attributes(node.attributes(), src))
}

pub(super) fn convert_inline_image(
    _cx: &Converter,
    node: Node<'_>,
) -> Result<String, ConvertError> {
    let src = node.target().or(node.attr("target")).unwrap_or_default();
    Ok(render_with_attributes(node.attributes(), src))
}

/// Split a macro attribute list: `A cat,50%,role="wide"`.
pub(crate) fn parse_macro_params(params: &str) -> Attributes {
    let mut attributes = Attributes::new();
    if params.trim().is_empty() {
        return attributes;
    }

    let mut position = 1;
    for piece in params.split(',') {
        let piece = piece.trim();
        match piece.split_once('=') {
            Some((key, value)) if is_attribute_name(key.trim()) => {
                attributes.set(key.trim(), unquote(value.trim()));
            }
            _ => {
                attributes.set_positional(position, unquote(piece));
                position += 1;
            }
        }
    }
    attributes
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Replace every image macro in `text`, or `None` when there is none.
pub(crate) fn replace_image_macros(text: &str) -> Option<String> {
    if !IMAGE_MACRO.is_match(text) {
        return None;
    }
    let replaced = IMAGE_MACRO.replace_all(text, |caps: &Captures<'_>| {
        render_with_attributes(&parse_macro_params(&caps[2]), &caps[1])
    });
    Some(replaced.into_owned())
}
