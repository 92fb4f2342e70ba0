//! Conversion driver
//!
//! One-shot, linear pipeline: resolve input format, load, resolve output
//! format, save. Load-side problems are contained and reported as an
//! [`Outcome`]; save-side failures propagate as [`ConvertError`].

use crate::error::{ConvertError, FormatError};
use crate::registry::FormatRegistry;
use crate::value::Value;
use std::path::Path;

/// How a conversion run ended when it did not fail fatally
#[derive(Debug)]
pub enum Outcome {
    /// The output file was written
    Converted { from: String, to: String },
    /// Input suffix not in the dispatch table; nothing was loaded
    UnsupportedInput,
    /// Loading failed or produced no data; nothing was saved
    LoadFailed(FormatError),
    /// Output suffix not in the dispatch table; input was loaded but not saved
    UnsupportedOutput,
}

impl Outcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

/// Drives a single load → save conversion through a [`FormatRegistry`]
pub struct Converter {
    registry: FormatRegistry,
}

impl Converter {
    pub fn new(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    /// Load `input` and, if that produced data, save it to `output`.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<Outcome, ConvertError> {
        let Some(reader) = self.registry.for_path(input) else {
            tracing::info!(path = %input.display(), "unsupported input format");
            return Ok(Outcome::UnsupportedInput);
        };
        tracing::debug!(path = %input.display(), format = reader.name(), "loading input");

        let value = match reader.load(input) {
            Ok(Value::Null) => {
                tracing::info!(path = %input.display(), "input holds no data");
                return Ok(Outcome::LoadFailed(FormatError::Empty));
            }
            Ok(value) => value,
            Err(err) => {
                tracing::info!(path = %input.display(), error = %err, "failed to load input");
                return Ok(Outcome::LoadFailed(err));
            }
        };

        let Some(writer) = self.registry.for_path(output) else {
            tracing::info!(path = %output.display(), "unsupported output format");
            return Ok(Outcome::UnsupportedOutput);
        };
        tracing::debug!(path = %output.display(), format = writer.name(), "saving output");

        writer
            .save(&value, output)
            .map_err(|source| ConvertError::Save {
                path: output.to_path_buf(),
                source,
            })?;

        tracing::info!(
            from = reader.name(),
            to = writer.name(),
            "converted {} -> {}",
            input.display(),
            output.display()
        );
        Ok(Outcome::Converted {
            from: reader.name().to_string(),
            to: writer.name().to_string(),
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(FormatRegistry::default())
    }
}

/// Convert `input` to `output` with the default formats.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Outcome, ConvertError> {
    Converter::default().convert(input.as_ref(), output.as_ref())
}
