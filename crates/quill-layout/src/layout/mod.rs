//! Ordered composition of renderers into one formatted line.
//!
//! A [`Layout`] runs its renderers in configuration order against a single
//! buffer. Parts whose [`RendererTraits`] declare process-invariant output
//! are rendered once and the text is reused for every later event.
//!
//! [`LayoutBuilder`] turns a [`LayoutConfig`] into a [`Layout`], resolving
//! renderer names through a [`RendererRegistry`] and binding textual options.
//! Any unknown name or rejected option stops construction.

use once_cell::sync::OnceCell;
use quill_config::{LayoutConfig, LineEndingMode, RendererSpec};
use tracing::debug;

use crate::environment::RendererEnvironment;
use crate::error::LayoutError;
use crate::event::LogEvent;
use crate::registry::RendererRegistry;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits};

#[derive(Debug)]
struct LayoutPart {
    renderer: Box<dyn LayoutRenderer>,
    traits: RendererTraits,
    cached: OnceCell<String>,
}

impl LayoutPart {
    const fn new(renderer: Box<dyn LayoutRenderer>, traits: RendererTraits) -> Self {
        Self {
            renderer,
            traits,
            cached: OnceCell::new(),
        }
    }

    fn append(&self, buffer: &mut String, event: &LogEvent<'_>) {
        if self.traits.process_invariant() {
            let text = self.cached.get_or_init(|| {
                let mut text = String::new();
                self.renderer.append(&mut text, event);
                text
            });
            buffer.push_str(text);
        } else {
            self.renderer.append(buffer, event);
        }
    }
}

/// An ordered list of renderers producing one log line per event.
///
/// # Example
///
/// ```
/// use quill_config::LineEndingMode;
/// use quill_layout::{Layout, LevelRenderer, LiteralRenderer, LogEvent, MessageRenderer};
/// use tracing::Level;
///
/// let layout = Layout::new()
///     .with_declared(LevelRenderer::default())
///     .with_declared(LiteralRenderer::new(": "))
///     .with_declared(MessageRenderer)
///     .with_line_ending(LineEndingMode::CRLF);
///
/// let event = LogEvent::new(Level::WARN, "app", "disk almost full");
/// assert_eq!(layout.render_line(&event), "WARN: disk almost full\r\n");
/// ```
#[derive(Debug, Default)]
pub struct Layout {
    parts: Vec<LayoutPart>,
    line_ending: LineEndingMode,
}

impl Layout {
    /// Creates an empty layout using the native line ending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a renderer with explicit metadata.
    pub fn push(&mut self, renderer: Box<dyn LayoutRenderer>, traits: RendererTraits) {
        self.parts.push(LayoutPart::new(renderer, traits));
    }

    /// Appends a renderer with explicit metadata.
    #[must_use]
    pub fn with_part(
        mut self,
        renderer: impl LayoutRenderer + 'static,
        traits: RendererTraits,
    ) -> Self {
        self.push(Box::new(renderer), traits);
        self
    }

    /// Appends a renderer using its declared metadata.
    #[must_use]
    pub fn with_declared<R: DeclaredRenderer>(self, renderer: R) -> Self {
        self.with_part(renderer, R::TRAITS)
    }

    /// Sets the terminator used by [`Layout::render_line`].
    #[must_use]
    pub const fn with_line_ending(mut self, line_ending: LineEndingMode) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the terminator used by [`Layout::render_line`].
    #[must_use]
    pub const fn line_ending(&self) -> LineEndingMode {
        self.line_ending
    }

    /// Appends every part's output for `event` to `buffer`, in order.
    pub fn render_into(&self, buffer: &mut String, event: &LogEvent<'_>) {
        for part in &self.parts {
            part.append(buffer, event);
        }
    }

    /// Renders `event` into a new string.
    #[must_use]
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        let mut buffer = String::new();
        self.render_into(&mut buffer, event);
        buffer
    }

    /// Renders `event` followed by the configured line ending.
    #[must_use]
    pub fn render_line(&self, event: &LogEvent<'_>) -> String {
        let mut buffer = self.render(event);
        buffer.push_str(self.line_ending.newline());
        buffer
    }

    /// Returns `true` when every part may run on any thread.
    #[must_use]
    pub fn is_thread_agnostic(&self) -> bool {
        self.parts
            .iter()
            .all(|part| part.traits.thread_agnostic())
    }

    /// Returns `true` when every part's output is fixed for the process.
    #[must_use]
    pub fn is_process_invariant(&self) -> bool {
        self.parts
            .iter()
            .all(|part| part.traits.process_invariant())
    }

    /// Returns the number of parts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` when the layout has no parts.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Builds [`Layout`]s from configuration.
///
/// # Example
///
/// ```
/// use quill_config::{LayoutConfig, RendererSpec};
/// use quill_layout::{LayoutBuilder, LogEvent, RendererEnvironment, RendererRegistry};
///
/// let registry = RendererRegistry::with_builtins();
/// let builder = LayoutBuilder::new(&registry, RendererEnvironment::host());
/// let config = LayoutConfig::default()
///     .with_renderer(RendererSpec::new("literal").with_option("text", "["))
///     .with_renderer(RendererSpec::new("message"))
///     .with_renderer(RendererSpec::new("literal").with_option("text", "]"));
///
/// let layout = builder.build(&config).expect("valid layout");
/// let event = LogEvent::new(tracing::Level::INFO, "app", "ready");
/// assert_eq!(layout.render(&event), "[ready]");
/// ```
#[derive(Debug)]
pub struct LayoutBuilder<'a> {
    registry: &'a RendererRegistry,
    environment: RendererEnvironment,
}

impl<'a> LayoutBuilder<'a> {
    /// Creates a builder resolving names through `registry`.
    #[must_use]
    pub const fn new(registry: &'a RendererRegistry, environment: RendererEnvironment) -> Self {
        Self {
            registry,
            environment,
        }
    }

    /// Instantiates and configures every renderer in `config`.
    ///
    /// An option with a blank name is applied to the renderer's default
    /// option.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRenderer`] for an unregistered name,
    /// [`LayoutError::UnknownOption`] for an option the renderer does not
    /// expose, and [`LayoutError::InvalidOption`] for a rejected value.
    pub fn build(&self, config: &LayoutConfig) -> Result<Layout, LayoutError> {
        let mut layout = Layout::new().with_line_ending(config.line_ending);
        for spec in &config.renderers {
            let (renderer, traits) = self.build_part(spec)?;
            layout.push(renderer, traits);
        }
        debug!(
            parts = layout.len(),
            line_ending = %layout.line_ending(),
            thread_agnostic = layout.is_thread_agnostic(),
            "built layout"
        );
        Ok(layout)
    }

    fn build_part(
        &self,
        spec: &RendererSpec,
    ) -> Result<(Box<dyn LayoutRenderer>, RendererTraits), LayoutError> {
        let descriptor = self.registry.resolve(&spec.name)?;
        let mut renderer = descriptor.create(&self.environment);
        for (key, value) in &spec.options {
            let option = if key.trim().is_empty() {
                descriptor
                    .default_option()
                    .ok_or_else(|| LayoutError::UnknownOption {
                        renderer: descriptor.name().to_owned(),
                        option: key.clone(),
                    })?
            } else {
                key.as_str()
            };
            renderer
                .set_option(option, value)
                .map_err(|error| match error {
                    OptionError::Unknown => LayoutError::UnknownOption {
                        renderer: descriptor.name().to_owned(),
                        option: option.to_owned(),
                    },
                    OptionError::InvalidValue { message } => LayoutError::InvalidOption {
                        renderer: descriptor.name().to_owned(),
                        option: option.to_owned(),
                        message,
                    },
                })?;
        }
        Ok((renderer, descriptor.traits()))
    }
}

#[cfg(test)]
mod tests;
