//! Format trait definition
//!
//! This module defines the core Format trait that all format adapters implement.
//! The trait provides a uniform interface for parsing and serializing data files
//! to and from the Common [`Value`].

use crate::error::FormatError;
use crate::value::Value;
use std::fs;
use std::path::Path;

/// Trait for data formats
///
/// Implementors provide bidirectional conversion between text and [`Value`].
/// File access is layered on top through [`Format::load`] and [`Format::save`],
/// each of which holds its file only for the duration of the call.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn parse(&self, source: &str) -> Result<Value, FormatError> {
///         todo!()
///     }
///
///     fn serialize(&self, value: &Value) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "yaml", "xml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["json"], ["yaml", "yml"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for format dispatch from file paths.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Parse source text into a Value
    fn parse(&self, source: &str) -> Result<Value, FormatError>;

    /// Serialize a Value into source text
    fn serialize(&self, value: &Value) -> Result<String, FormatError>;

    /// Read `path` and parse its full contents.
    fn load(&self, path: &Path) -> Result<Value, FormatError> {
        let source = fs::read_to_string(path)?;
        self.parse(&source)
    }

    /// Serialize `value` and overwrite `path` with the result.
    fn save(&self, value: &Value, path: &Path) -> Result<(), FormatError> {
        let text = self.serialize(value)?;
        fs::write(path, text)?;
        Ok(())
    }
}
