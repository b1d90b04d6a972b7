//! The Markdown++ converter
//!
//! [`Converter`] walks a [`Document`] depth-first and renders each node by kind.
//! Every renderer receives the converter and its node, renders its children
//! through [`Converter::convert_node`] and assembles their text. Nothing is
//! mutated during a walk, so one converter can render any number of documents.
//!
//! Kinds without a rule render as `<!-- TODO: <kind> -->` instead of failing;
//! only a tree that breaks its own shape (an empty list, a table without
//! columns) aborts the conversion.

mod blocks;
mod document;
mod image;
mod inline;
mod lists;
mod table;
pub(crate) mod util;

use crate::backend::Backend;
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::tree::{Document, Node, NodeKind};
use tracing::{trace, warn};

/// Renders document trees to Markdown++.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Render a whole document.
    pub fn convert(&self, doc: &Document) -> Result<String, ConvertError> {
        self.convert_node(doc.root(), None)
    }

    /// Render one node, optionally under the rule for another kind.
    pub fn convert_node(
        &self,
        node: Node<'_>,
        kind: Option<&NodeKind>,
    ) -> Result<String, ConvertError> {
        let kind = kind.unwrap_or(node.kind());
        trace!(kind = %kind, node = node.node_id().index(), "convert");

        match kind {
            NodeKind::Document => document::convert_document(self, node),
            NodeKind::Header => document::convert_header(self, node),
            NodeKind::Preamble => document::convert_preamble(self, node),
            NodeKind::Section => document::convert_section(self, node),
            NodeKind::Paragraph => blocks::convert_paragraph(self, node),
            NodeKind::Olist => lists::convert_olist(self, node),
            NodeKind::Ulist => lists::convert_ulist(self, node),
            NodeKind::ListItem => lists::convert_list_item(self, node),
            NodeKind::Admonition => blocks::convert_admonition(self, node),
            NodeKind::Example => blocks::convert_example(self, node),
            NodeKind::Literal => blocks::convert_literal(self, node),
            NodeKind::Listing => blocks::convert_listing(self, node),
            NodeKind::ThematicBreak => blocks::convert_thematic_break(self, node),
            NodeKind::PageBreak => blocks::convert_page_break(self, node),
            NodeKind::Video => blocks::convert_video(self, node),
            NodeKind::Image => image::convert_image(self, node),
            NodeKind::InlineImage => image::convert_inline_image(self, node),
            NodeKind::InlineAnchor => inline::convert_inline_anchor(self, node),
            NodeKind::InlineQuoted => inline::convert_inline_quoted(self, node),
            NodeKind::Table => table::convert_table(self, node),
            NodeKind::Text => inline::convert_text(self, node),
            NodeKind::Other(name) => {
                warn!(kind = %name, "no rule for node kind, emitting placeholder");
                Ok(format!("<!-- TODO: {name} -->"))
            }
        }
    }

    /// Render every child of `node` in order.
    pub(crate) fn convert_children(&self, node: Node<'_>) -> Result<Vec<String>, ConvertError> {
        node.children()
            .map(|child| self.convert_node(child, None))
            .collect()
    }

    /// The prefix marking generated ids: the document's `idprefix` attribute,
    /// else the configured one.
    fn idprefix<'a>(&'a self, node: Node<'a>) -> &'a str {
        node.document()
            .attribute("idprefix")
            .unwrap_or(&self.options.idprefix)
    }

    /// Whether an id was written by the author rather than generated.
    pub(crate) fn is_explicit_id(&self, node: Node<'_>, id: &str) -> bool {
        if node.attributes().contains("id") {
            return true;
        }
        let prefix = self.idprefix(node);
        !prefix.is_empty() && !id.starts_with(prefix)
    }
}

/// The `mdpp` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdppBackend;

impl Backend for MdppBackend {
    fn name(&self) -> &str {
        "mdpp"
    }

    fn description(&self) -> &str {
        "Markdown++: Markdown with HTML-comment style and id tags"
    }

    fn filetype(&self) -> &str {
        "md"
    }

    fn outfilesuffix(&self) -> &str {
        ".md"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "mdpp"]
    }

    fn convert(&self, doc: &Document, options: &ConvertOptions) -> Result<String, ConvertError> {
        Converter::new(options.clone()).convert(doc)
    }
}
