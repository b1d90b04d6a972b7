//! Serializable, owned form of the document tree.
//!
//! Host parsers hand the tree over as nested JSON; tests build it with the
//! `with_*` methods. Either way the result is flattened into a [`Document`]
//! arena before rendering.
//!
//! ```text
//! {
//!   "kind": "document",
//!   "attributes": {"idprefix": "_"},
//!   "children": [
//!     {"kind": "section", "id": "_intro", "title": "Intro", "level": 1,
//!      "children": [{"kind": "paragraph", "lines": ["Hello."]}]}
//!   ]
//! }
//! ```
//!
//! [`Document`]: super::Document

use super::attributes::Attributes;
use super::kind::NodeKind;
use super::table::TableData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    #[serde(default)]
    pub level: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Node subtype (`xref`/`ref` for anchors, `strong`/`emphasis` for quotes).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableData>,
}

impl RawNode {
    pub fn new(kind: NodeKind) -> Self {
        RawNode {
            kind,
            id: None,
            title: None,
            text: None,
            lines: Vec::new(),
            level: 0,
            target: None,
            subtype: None,
            caption: None,
            attributes: Attributes::new(),
            children: Vec::new(),
            table: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_type(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_positional(mut self, index: usize, value: impl Into<String>) -> Self {
        self.attributes.set_positional(index, value);
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_table(mut self, table: TableData) -> Self {
        self.table = Some(table);
        self
    }
}
