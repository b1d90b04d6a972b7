//! Backend registry for backend discovery and selection

use crate::backend::Backend;
use crate::converter::MdppBackend;
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::tree::Document;
use std::collections::HashMap;

/// Registry of output backends, looked up by name.
///
/// # Examples
///
/// ```ignore
/// let registry = BackendRegistry::default();
/// let markdown = registry.convert(&doc, "mdpp", &ConvertOptions::default())?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend, replacing one of the same name
    pub fn register<B: Backend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Backend, ConvertError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| ConvertError::BackendNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// All backend names, sorted
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Backend whose output extension matches `filename`
    pub fn detect_backend_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.backends
            .values()
            .find(|backend| backend.file_extensions().contains(&extension))
            .map(|backend| backend.name().to_string())
    }

    /// Render a document with the named backend
    pub fn convert(
        &self,
        doc: &Document,
        backend: &str,
        options: &ConvertOptions,
    ) -> Result<String, ConvertError> {
        self.get(backend)?.convert(doc, options)
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MdppBackend);
        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
