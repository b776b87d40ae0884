//! Renderers reading fields of the log event.

use tracing::Level;

use crate::environment::RendererEnvironment;
use crate::event::LogEvent;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits, parse_flag};

/// Appends the event's formatted message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageRenderer;

impl LayoutRenderer for MessageRenderer {
    fn append(&self, buffer: &mut String, event: &LogEvent<'_>) {
        buffer.push_str(event.message());
    }
}

impl DeclaredRenderer for MessageRenderer {
    const NAME: &'static str = "message";
    const TRAITS: RendererTraits = RendererTraits::PER_EVENT;

    fn create(_environment: &RendererEnvironment) -> Self {
        Self
    }
}

const LEVEL_NAMES: [(Level, &str, &str); 5] = [
    (Level::TRACE, "TRACE", "trace"),
    (Level::DEBUG, "DEBUG", "debug"),
    (Level::INFO, "INFO", "info"),
    (Level::WARN, "WARN", "warn"),
    (Level::ERROR, "ERROR", "error"),
];

/// Appends the event's level name.
///
/// | Option      | Values  | Default |
/// |-------------|---------|---------|
/// | `uppercase` | boolean | `true`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRenderer {
    uppercase: bool,
}

impl LevelRenderer {
    /// Selects upper- or lower-case level names.
    #[must_use]
    pub const fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

impl Default for LevelRenderer {
    fn default() -> Self {
        Self { uppercase: true }
    }
}

impl LayoutRenderer for LevelRenderer {
    fn append(&self, buffer: &mut String, event: &LogEvent<'_>) {
        let level = event.level();
        if let Some((_, upper, lower)) = LEVEL_NAMES.iter().find(|(known, ..)| *known == level) {
            buffer.push_str(if self.uppercase { upper } else { lower });
        }
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        if option.eq_ignore_ascii_case("uppercase") {
            self.uppercase = parse_flag(value)?;
            Ok(())
        } else {
            Err(OptionError::Unknown)
        }
    }
}

impl DeclaredRenderer for LevelRenderer {
    const NAME: &'static str = "level";
    const TRAITS: RendererTraits = RendererTraits::PER_EVENT;

    fn create(_environment: &RendererEnvironment) -> Self {
        Self::default()
    }
}

/// Appends the name of the logger that produced the event.
///
/// With `shortname` set only the segment after the last `::` or `.` is
/// rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerRenderer {
    short_name: bool,
}

impl LoggerRenderer {
    /// Selects the short form of the logger name.
    #[must_use]
    pub const fn with_short_name(mut self, short_name: bool) -> Self {
        self.short_name = short_name;
        self
    }
}

fn short_logger_name(logger: &str) -> &str {
    let tail = logger.rsplit("::").next().unwrap_or(logger);
    tail.rsplit('.').next().unwrap_or(tail)
}

impl LayoutRenderer for LoggerRenderer {
    fn append(&self, buffer: &mut String, event: &LogEvent<'_>) {
        let logger = event.logger();
        if self.short_name {
            buffer.push_str(short_logger_name(logger));
        } else {
            buffer.push_str(logger);
        }
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        match option.to_ascii_lowercase().as_str() {
            "shortname" | "short_name" => {
                self.short_name = parse_flag(value)?;
                Ok(())
            }
            _ => Err(OptionError::Unknown),
        }
    }
}

impl DeclaredRenderer for LoggerRenderer {
    const NAME: &'static str = "logger";
    const TRAITS: RendererTraits = RendererTraits::PER_EVENT;

    fn create(_environment: &RendererEnvironment) -> Self {
        Self::default()
    }
}
