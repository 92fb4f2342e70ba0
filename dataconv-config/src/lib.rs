//! Shared configuration loader for the dataconv toolchain.
//!
//! `defaults/dataconv.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`DataconvConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use dataconv_babel::formats::{FormatOptions, JsonOptions, SequencePolicy, XmlOptions, YamlOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/dataconv.default.toml");

/// Top-level configuration consumed by dataconv applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DataconvConfig {
    pub log: LogConfig,
    pub json: JsonConfig,
    pub yaml: YamlConfig,
    pub xml: XmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub indent: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YamlConfig {
    pub sort_keys: bool,
}

/// Mirrors the knobs exposed by the XML adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    pub root_tag: String,
    pub declaration: bool,
    pub indent: usize,
    pub null_text: String,
    pub sequences: SequencePolicy,
}

impl From<&JsonConfig> for JsonOptions {
    fn from(config: &JsonConfig) -> Self {
        JsonOptions {
            indent: config.indent,
        }
    }
}

impl From<&YamlConfig> for YamlOptions {
    fn from(config: &YamlConfig) -> Self {
        YamlOptions {
            sort_keys: config.sort_keys,
        }
    }
}

impl From<&XmlConfig> for XmlOptions {
    fn from(config: &XmlConfig) -> Self {
        XmlOptions {
            root_tag: config.root_tag.clone(),
            declaration: config.declaration,
            indent: config.indent,
            null_text: config.null_text.clone(),
            sequences: config.sequences,
        }
    }
}

impl From<&DataconvConfig> for FormatOptions {
    fn from(config: &DataconvConfig) -> Self {
        FormatOptions {
            json: (&config.json).into(),
            yaml: (&config.yaml).into(),
            xml: (&config.xml).into(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DataconvConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DataconvConfig, ConfigError> {
    Loader::new().build()
}
