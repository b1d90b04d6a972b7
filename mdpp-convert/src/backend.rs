//! Backend trait definition
//!
//! A backend turns a resolved [`Document`] into text in one output syntax and
//! tells the host pipeline how to name the files it writes.

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::tree::Document;

/// Trait for output backends
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Backend for Plain {
///     fn name(&self) -> &str { "plain" }
///     fn filetype(&self) -> &str { "txt" }
///     fn outfilesuffix(&self) -> &str { ".txt" }
///     fn convert(&self, doc: &Document, _: &ConvertOptions) -> Result<String, ConvertError> {
///         Ok(doc.title().unwrap_or_default().to_string())
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Identifier the backend is selected by (e.g. "mdpp")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// Output file type, without a dot
    fn filetype(&self) -> &str;

    /// Suffix appended to output file names, with the dot
    fn outfilesuffix(&self) -> &str;

    /// File extensions recognised as this backend's output
    ///
    /// Used for automatic backend detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a document
    fn convert(&self, doc: &Document, options: &ConvertOptions) -> Result<String, ConvertError>;
}
