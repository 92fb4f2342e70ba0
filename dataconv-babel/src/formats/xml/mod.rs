//! XML format implementation
//!
//! XML does not decode to the Common Value directly. Loading parses the text
//! into a Markup Tree with `roxmltree` and maps it through
//! [`mapping::tree_to_value`]; saving goes through [`mapping::value_to_tree`]
//! and writes the tree with `quick-xml`.
//!
//! # Lossy Conversions
//!
//! - Scalar types are lost: every leaf comes back as a string (or null).
//! - Sibling elements sharing a tag collapse to the last one on load.
//! - Sequences are written as repeated sibling tags (or rejected, see
//!   [`SequencePolicy`]) and therefore do not survive a round trip.
//! - Empty strings and empty mappings are written as empty elements and load
//!   back as null.
//! - Keys that are not XML names are rejected on save rather than escaped.

pub mod mapping;
pub mod parser;
pub mod serializer;
pub mod tree;

use crate::error::FormatError;
use crate::format::Format;
use crate::value::Value;
use serde::{Deserialize, Serialize};

pub use tree::Element;

/// How sequences are written under a mapping key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencePolicy {
    /// One sibling element per item, all tagged with the key
    #[default]
    Repeat,
    /// Fail the save with a serialization error
    Reject,
}

/// Knobs for XML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Tag of the synthetic root element wrapping the top-level mapping
    pub root_tag: String,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>`
    pub declaration: bool,
    /// Spaces per nesting level; 0 writes compact output
    pub indent: usize,
    /// Text written for null leaves
    pub null_text: String,
    pub sequences: SequencePolicy,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root_tag: "root".to_string(),
            declaration: true,
            indent: 0,
            null_text: String::new(),
            sequences: SequencePolicy::Repeat,
        }
    }
}

/// Format implementation for XML
#[derive(Debug, Clone, Default)]
pub struct XmlFormat {
    options: XmlOptions,
}

impl XmlFormat {
    pub fn new(options: XmlOptions) -> Self {
        Self { options }
    }
}

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML tree markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn parse(&self, source: &str) -> Result<Value, FormatError> {
        let tree = parser::parse_to_tree(source)?;
        Ok(mapping::tree_to_value(&tree))
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        let tree = mapping::value_to_tree(value, &self.options)?;
        serializer::serialize_tree(&tree, &self.options)
    }
}
