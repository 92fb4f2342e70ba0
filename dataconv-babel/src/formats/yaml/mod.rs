//! YAML format implementation
//!
//! Documents are read into a `serde_yaml::Value` first so that merge keys
//! (`<<: *anchor`) get resolved, then converted into the Common Value. This
//! gives safe-load semantics: only plain scalars, sequences and mappings are
//! accepted. Custom tags, non-string mapping keys and non-finite floats
//! (`.inf`, `.nan`) have no Common Value representation and surface as parse
//! errors.

use crate::error::FormatError;
use crate::format::Format;
use crate::value::{self, Value};

/// Output knobs for YAML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YamlOptions {
    /// Sort mapping keys recursively before dumping
    pub sort_keys: bool,
}

/// Format implementation for YAML
#[derive(Debug, Clone, Default)]
pub struct YamlFormat {
    options: YamlOptions,
}

impl YamlFormat {
    pub fn new(options: YamlOptions) -> Self {
        Self { options }
    }
}

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML indented data format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, source: &str) -> Result<Value, FormatError> {
        if source.trim().is_empty() {
            return Ok(Value::Null);
        }
        let mut document: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| FormatError::parse(self.name(), e))?;
        document
            .apply_merge()
            .map_err(|e| FormatError::parse(self.name(), e))?;
        check_finite(&document)?;
        serde_yaml::from_value(document).map_err(|e| FormatError::parse(self.name(), e))
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        let result = if self.options.sort_keys {
            serde_yaml::to_string(&value::sorted(value))
        } else {
            serde_yaml::to_string(value)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

/// `.inf` and `.nan` would turn into null in the Common Value.
fn check_finite(value: &serde_yaml::Value) -> Result<(), FormatError> {
    match value {
        serde_yaml::Value::Number(n) if n.is_nan() || n.is_infinite() => Err(FormatError::parse(
            "yaml",
            format!("non-finite number {n} cannot be represented"),
        )),
        serde_yaml::Value::Sequence(items) => items.iter().try_for_each(check_finite),
        serde_yaml::Value::Mapping(entries) => entries.values().try_for_each(check_finite),
        serde_yaml::Value::Tagged(tagged) => check_finite(&tagged.value),
        _ => Ok(()),
    }
}
