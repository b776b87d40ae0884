//! Fixed text between other renderers.

use crate::environment::RendererEnvironment;
use crate::event::LogEvent;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits};

/// Appends the configured `text` option verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralRenderer {
    text: String,
}

impl LiteralRenderer {
    /// Creates a renderer emitting `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LayoutRenderer for LiteralRenderer {
    fn append(&self, buffer: &mut String, _event: &LogEvent<'_>) {
        buffer.push_str(&self.text);
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        if option.eq_ignore_ascii_case("text") {
            value.clone_into(&mut self.text);
            Ok(())
        } else {
            Err(OptionError::Unknown)
        }
    }
}

impl DeclaredRenderer for LiteralRenderer {
    const NAME: &'static str = "literal";
    const TRAITS: RendererTraits = RendererTraits::PROCESS_INVARIANT;
    const DEFAULT_OPTION: Option<&'static str> = Some("text");

    fn create(_environment: &RendererEnvironment) -> Self {
        Self::default()
    }
}
