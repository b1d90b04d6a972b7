//! Error types for conversion operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or converting a document tree.
///
/// Formatting irregularities inside a node are absorbed by the renderers; only
/// violations of the tree contract and lookup failures surface here.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The tree does not have the shape the renderer relies on
    #[error("malformed {kind} node: {detail}")]
    Structure { kind: String, detail: String },

    /// Backend not found in registry
    #[error("backend '{0}' not found")]
    BackendNotFound(String),

    /// The serialized tree could not be decoded
    #[error("invalid document tree: {0}")]
    InvalidTree(#[from] serde_json::Error),

    /// Reading a file on behalf of the caller failed
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn structure(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        ConvertError::Structure {
            kind: kind.into(),
            detail: detail.into(),
        }
    }
}
