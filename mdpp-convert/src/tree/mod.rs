//! The document tree consumed by the converter.
//!
//! The tree is produced by an external AsciiDoc parser (handed over as JSON or
//! built in code through [`RawNode`]) and is read-only from the converter's
//! point of view.

mod attributes;
mod kind;
mod node;
mod raw;
mod table;

pub use attributes::Attributes;
pub use kind::NodeKind;
pub use node::{Document, Node, NodeId};
pub use raw::RawNode;
pub use table::{TableData, TableSource};
