//! The name of the current process.

use crate::environment::{EnvironmentInfoProvider, RendererEnvironment};
use crate::event::LogEvent;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits, parse_flag};

/// Renders the current process name, optionally as the full executable path.
///
/// Both strings are resolved once at construction. When the provider cannot
/// determine the process identity it yields empty strings and the renderer
/// appends nothing.
///
/// | Option     | Values       | Default |
/// |------------|--------------|---------|
/// | `fullname` | boolean      | `false` |
///
/// # Example
///
/// ```
/// use quill_layout::{HostEnvironment, LayoutRenderer, LogEvent, ProcessNameRenderer};
///
/// let renderer = ProcessNameRenderer::new(&HostEnvironment);
/// let mut line = String::new();
/// renderer.append(&mut line, &LogEvent::default());
/// assert!(!line.contains('/'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNameRenderer {
    full_name: bool,
    file_path: String,
    base_name: String,
}

impl ProcessNameRenderer {
    /// Resolves the process identity from `provider`.
    #[must_use]
    pub fn new(provider: &dyn EnvironmentInfoProvider) -> Self {
        Self {
            full_name: false,
            file_path: provider.current_process_file_path(),
            base_name: provider.current_process_base_name(),
        }
    }

    /// Selects between the full executable path and the base name.
    #[must_use]
    pub const fn with_full_name(mut self, full_name: bool) -> Self {
        self.full_name = full_name;
        self
    }

    /// Returns `true` when the full path is rendered.
    #[must_use]
    pub const fn full_name(&self) -> bool {
        self.full_name
    }

    fn output(&self) -> &str {
        if self.full_name {
            &self.file_path
        } else {
            &self.base_name
        }
    }
}

impl LayoutRenderer for ProcessNameRenderer {
    fn append(&self, buffer: &mut String, _event: &LogEvent<'_>) {
        buffer.push_str(self.output());
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        match option.to_ascii_lowercase().as_str() {
            "fullname" | "full_name" => {
                self.full_name = parse_flag(value)?;
                Ok(())
            }
            _ => Err(OptionError::Unknown),
        }
    }
}

impl DeclaredRenderer for ProcessNameRenderer {
    const NAME: &'static str = "processname";
    const TRAITS: RendererTraits = RendererTraits::PROCESS_INVARIANT;

    fn create(environment: &RendererEnvironment) -> Self {
        Self::new(environment.info())
    }
}
