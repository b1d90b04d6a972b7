use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural role of a node in the document tree.
///
/// Kind names follow the parser's node names (`olist`, `inline_anchor`, ...).
/// Names the renderer has no rule for are kept verbatim in [`NodeKind::Other`]
/// so the dispatcher can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Document,
    Header,
    Preamble,
    Section,
    Paragraph,
    Olist,
    Ulist,
    ListItem,
    Admonition,
    Example,
    Literal,
    Listing,
    ThematicBreak,
    PageBreak,
    Video,
    Image,
    InlineImage,
    InlineAnchor,
    InlineQuoted,
    Table,
    Text,
    Other(String),
}

impl NodeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "document" => NodeKind::Document,
            "header" => NodeKind::Header,
            "preamble" => NodeKind::Preamble,
            "section" => NodeKind::Section,
            "paragraph" => NodeKind::Paragraph,
            "olist" => NodeKind::Olist,
            "ulist" => NodeKind::Ulist,
            "list_item" => NodeKind::ListItem,
            "admonition" => NodeKind::Admonition,
            "example" => NodeKind::Example,
            "literal" => NodeKind::Literal,
            "listing" => NodeKind::Listing,
            "thematic_break" => NodeKind::ThematicBreak,
            "page_break" => NodeKind::PageBreak,
            "video" => NodeKind::Video,
            "image" => NodeKind::Image,
            "inline_image" => NodeKind::InlineImage,
            "inline_anchor" => NodeKind::InlineAnchor,
            "inline_quoted" => NodeKind::InlineQuoted,
            "table" => NodeKind::Table,
            "text" => NodeKind::Text,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Header => "header",
            NodeKind::Preamble => "preamble",
            NodeKind::Section => "section",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Olist => "olist",
            NodeKind::Ulist => "ulist",
            NodeKind::ListItem => "list_item",
            NodeKind::Admonition => "admonition",
            NodeKind::Example => "example",
            NodeKind::Literal => "literal",
            NodeKind::Listing => "listing",
            NodeKind::ThematicBreak => "thematic_break",
            NodeKind::PageBreak => "page_break",
            NodeKind::Video => "video",
            NodeKind::Image => "image",
            NodeKind::InlineImage => "inline_image",
            NodeKind::InlineAnchor => "inline_anchor",
            NodeKind::InlineQuoted => "inline_quoted",
            NodeKind::Table => "table",
            NodeKind::Text => "text",
            NodeKind::Other(name) => name,
        }
    }

    /// Whether this kind is one of the list containers.
    pub fn is_list(&self) -> bool {
        matches!(self, NodeKind::Olist | NodeKind::Ulist)
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::from_name(&name)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
