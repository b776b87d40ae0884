//! Declarative description of a layout: which renderers run, in which order,
//! with which options.
//!
//! The configuration is plain data. Turning it into live renderers is the job
//! of `quill_layout::LayoutBuilder`, which validates renderer and option names
//! against its registry.

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults::default_line_ending;
use crate::line_ending::LineEndingMode;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text could not be parsed.
    #[error("failed to parse layout configuration: {0}")]
    Parse(#[source] serde_json::Error),
}

/// One renderer in a layout together with its textual options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererSpec {
    /// Registered renderer name, matched case-insensitively.
    pub name: String,
    /// Option values keyed by option name.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl RendererSpec {
    /// Creates a spec with no options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    /// Adds or replaces an option.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(option.into(), value.into());
        self
    }
}

/// Ordered renderers plus the terminator appended after each rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Renderers in output order.
    #[serde(default)]
    pub renderers: Vec<RendererSpec>,
    /// Terminator written after every line.
    #[serde(default = "default_line_ending")]
    pub line_ending: LineEndingMode,
}

impl LayoutConfig {
    /// Parses a layout from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON, does
    /// not match the expected shape, or names an unknown line ending.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(ConfigError::Parse)
    }

    /// Parses a layout from a JSON byte stream, such as an open file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] under the same conditions as
    /// [`LayoutConfig::from_json_str`], and when reading the stream fails.
    pub fn from_json_reader(reader: impl io::Read) -> Result<Self, ConfigError> {
        serde_json::from_reader(reader).map_err(ConfigError::Parse)
    }

    /// Appends a renderer.
    #[must_use]
    pub fn with_renderer(mut self, spec: RendererSpec) -> Self {
        self.renderers.push(spec);
        self
    }

    /// Overrides the line ending.
    #[must_use]
    pub const fn with_line_ending(mut self, line_ending: LineEndingMode) -> Self {
        self.line_ending = line_ending;
        self
    }
}
