//! Markdown++ rendering for AsciiDoc document trees
//!
//!     This crate turns a document tree produced by an AsciiDoc parser into Markdown++: plain
//!     Markdown (setext/atx headings, `-`/`1.` lists, fenced code, block quotes, pipe tables)
//!     plus HTML comments carrying what Markdown cannot say (`<!-- #id -->`,
//!     `<!-- style:AdmonitionTip -->`, `<!-- multiline -->`).
//!
//!     This is a pure lib: it never parses AsciiDoc and never installs a logger. The tree is
//!     handed over already resolved, either built in Rust ([`RawNode`]) or as JSON
//!     ([`Document::from_json`]). The only file access is the best-effort read of a table's
//!     source text.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── options.rs          # ConvertOptions
//!     ├── backend.rs          # Backend trait
//!     ├── registry.rs         # BackendRegistry for discovery and selection
//!     ├── include.rs          # include:: placeholders
//!     ├── tree                # Document arena, node kinds, attributes, JSON form
//!     └── converter           # Converter dispatcher and the per-kind renderers
//!         └── table           # cell layout and source-rebuilt multiline layout
//!
//! Core Algorithms
//!
//!     Rendering is one depth-first walk: [`Converter::convert_node`] matches on the node kind
//!     and each renderer assembles the output of its children. Parents are arena indices, so
//!     context questions (is this list nested in an item, is this listing inside an example)
//!     are lookups rather than state threaded through the walk.
//!
//!     Tables are the hard part. The parser flattens cells to text, which loses code blocks
//!     and admonitions nested in a cell. Two-column tables are therefore re-read from their
//!     source lines when available (see converter/table/multiline.rs), with the plain cell
//!     layout as the fallback for everything else.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs              # mounts the submodules below
//!     ├── common              # fixture loading
//!     ├── convert             # end-to-end documents, properties, CommonMark checks
//!     └── fixtures            # JSON trees and AsciiDoc table sources

pub mod backend;
pub mod converter;
pub mod error;
pub mod include;
pub mod options;
pub mod registry;
pub mod tree;

pub use backend::Backend;
pub use converter::{Converter, MdppBackend};
pub use error::ConvertError;
pub use include::{include_placeholder, rewrite_includes, IncludeRewriter};
pub use options::ConvertOptions;
pub use registry::BackendRegistry;
pub use tree::{Document, Node, NodeId, NodeKind, RawNode, TableData, TableSource};

/// Render a document with the given options.
pub fn convert(doc: &Document, options: &ConvertOptions) -> Result<String, ConvertError> {
    Converter::new(options.clone()).convert(doc)
}

/// Decode a JSON tree and render it.
pub fn convert_json(json: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let doc = Document::from_json(json)?;
    convert(&doc, options)
}
