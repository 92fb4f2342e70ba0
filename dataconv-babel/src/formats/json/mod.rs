//! JSON format implementation
//!
//! Parsing and serialization are delegated to `serde_json`. The decoded
//! `serde_json::Value` already is the Common Value, so no mapping step is
//! involved in either direction.

use crate::error::FormatError;
use crate::format::Format;
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Output knobs for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Number of spaces per indentation level
    pub indent: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Format implementation for JSON
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    options: JsonOptions,
}

impl JsonFormat {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON record notation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str) -> Result<Value, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::parse(self.name(), e))
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        let indent = " ".repeat(self.options.indent);
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
        value
            .serialize(&mut ser)
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        String::from_utf8(out).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
