//! Typed configuration values for the quill layout renderers.
//!
//! The centrepiece is [`LineEndingMode`], a closed set of named terminators
//! with payload-based equality and case-insensitive name lookup. The crate
//! also carries the serde-facing [`LayoutConfig`] consumed by
//! `quill_layout::LayoutBuilder`, and the [`telemetry`] settings used to
//! install a `tracing` subscriber.
//!
//! ```
//! use quill_config::{LayoutConfig, LineEndingMode, RendererSpec};
//!
//! let config = LayoutConfig::default()
//!     .with_renderer(RendererSpec::new("processname"))
//!     .with_line_ending(LineEndingMode::from_name("lf").expect("known mode"));
//! assert_eq!(config.line_ending.newline(), "\n");
//! ```

pub mod defaults;
pub mod layout;
pub mod line_ending;
pub mod logging;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use self::defaults::{
    DEFAULT_LOG_FILTER, default_line_ending, default_log_filter, default_log_filter_string,
    default_log_format,
};
pub use self::layout::{ConfigError, LayoutConfig, RendererSpec};
pub use self::line_ending::{LineEndingMode, LineEndingModeParseError, LineEndingName};
pub use self::logging::{LogFormat, LogFormatParseError};
pub use self::telemetry::{TelemetryConfig, TelemetryError, TelemetryHandle};
