//! Format implementations
//!
//! This module contains the format adapters that convert between
//! on-disk text and the Common Value.

pub mod json;
pub mod xml;
pub mod yaml;

pub use json::{JsonFormat, JsonOptions};
pub use xml::{SequencePolicy, XmlFormat, XmlOptions};
pub use yaml::{YamlFormat, YamlOptions};

/// Output options for every built-in format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub json: JsonOptions,
    pub yaml: YamlOptions,
    pub xml: XmlOptions,
}
