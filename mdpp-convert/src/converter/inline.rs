//! Inline anchors, quoted text and plain runs.

use super::Converter;
use crate::error::ConvertError;
use crate::tree::Node;

/// Anchor flavours the parser distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnchorType {
    Xref,
    Ref,
    Other,
}

impl AnchorType {
    fn of(node: Node<'_>) -> Self {
        match node.subtype() {
            Some("xref") => AnchorType::Xref,
            Some("ref") => AnchorType::Ref,
            _ => AnchorType::Other,
        }
    }
}

pub(super) fn convert_inline_anchor(
    _cx: &Converter,
    node: Node<'_>,
) -> Result<String, ConvertError> {
    let rendered = match AnchorType::of(node) {
        AnchorType::Xref => {
            // The parser already resolved the target into a path/fragment form
            let target = node.target().unwrap_or_default();
            let label = node.text().filter(|t| !t.is_empty()).unwrap_or(target);
            format!("[{label}]({target})")
        }
        AnchorType::Ref => {
            let id = node.id().or(node.target()).unwrap_or_default();
            format!("<!-- #{id} -->")
        }
        AnchorType::Other => String::new(),
    };
    Ok(rendered)
}

/// Every emphasis flavour collapses to strong.
pub(super) fn convert_inline_quoted(
    _cx: &Converter,
    node: Node<'_>,
) -> Result<String, ConvertError> {
    Ok(format!("**{}**", node.text().unwrap_or_default()))
}

pub(super) fn convert_text(_cx: &Converter, node: Node<'_>) -> Result<String, ConvertError> {
    Ok(node.text().unwrap_or_default().to_string())
}
