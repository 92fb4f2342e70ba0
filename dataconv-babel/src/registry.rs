//! Format registry for format dispatch
//!
//! This module provides the suffix → format lookup table. Every registered
//! format contributes its file extensions, so supporting a new format is a
//! matter of registering it rather than adding another branch.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{FormatOptions, JsonFormat, XmlFormat, YamlFormat};
use std::collections::HashMap;
use std::path::Path;

/// Registry of data formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let format = registry.for_path(Path::new("data.yml")).unwrap();
/// let value = format.load(Path::new("data.yml"))?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
    /// extension (without dot) → format name
    suffixes: HashMap<String, String>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
            suffixes: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    /// Extensions already claimed by another format are taken over.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        self.suffixes.retain(|_, owner| *owner != name);
        for ext in format.file_extensions() {
            self.suffixes.insert(ext.to_string(), name.clone());
        }
        self.formats.insert(name, Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// List `(extension, format name)` pairs (sorted by extension)
    pub fn list_suffixes(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self
            .suffixes
            .iter()
            .map(|(ext, name)| (ext.clone(), name.clone()))
            .collect();
        pairs.sort();
        pairs
    }

    /// Detect format from filename based on its suffix
    ///
    /// Matching is case-sensitive against the trailing `.<ext>` of the name.
    /// When several extensions match, the longest one wins.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("doc.yml"), Some("yaml".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("doc.JSON"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        self.suffixes
            .iter()
            .filter(|(ext, _)| {
                filename
                    .strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
            .max_by_key(|(ext, _)| ext.len())
            .map(|(_, name)| name.clone())
    }

    /// Resolve the format handling `path`, if any.
    pub fn for_path(&self, path: &Path) -> Option<&dyn Format> {
        let name = self.detect_format_from_filename(&path.to_string_lossy())?;
        self.get(&name).ok()
    }

    /// Create a registry with the built-in formats using default options
    pub fn with_defaults() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a registry with the built-in formats
    pub fn with_options(options: FormatOptions) -> Self {
        let mut registry = Self::new();

        registry.register(JsonFormat::new(options.json));
        registry.register(YamlFormat::new(options.yaml));
        registry.register(XmlFormat::new(options.xml));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
