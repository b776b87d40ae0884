//! Named layout renderers and the layouts composed from them.
//!
//! A layout renderer appends one fragment of a log line to a shared buffer.
//! Renderers are registered by name in a [`RendererRegistry`], instantiated
//! with default options, configured through textual options and composed
//! into a [`Layout`]. Each registration carries [`RendererTraits`] telling
//! the layout whether the output can be cached for the life of the process
//! and whether the renderer may run on any thread.
//!
//! Environment access goes through the seams in [`environment`], so the
//! [`ProcessNameRenderer`] and [`SpecialFolderRenderer`] can be exercised
//! against fixed process identities and folder tables.
//!
//! ```
//! use quill_config::{LayoutConfig, LineEndingMode, RendererSpec};
//! use quill_layout::{LayoutBuilder, LogEvent, RendererEnvironment, RendererRegistry};
//! use tracing::Level;
//!
//! let registry = RendererRegistry::with_builtins();
//! let config = LayoutConfig::default()
//!     .with_renderer(RendererSpec::new("level"))
//!     .with_renderer(RendererSpec::new("literal").with_option("text", " "))
//!     .with_renderer(RendererSpec::new("message"))
//!     .with_line_ending(LineEndingMode::LF);
//!
//! let layout = LayoutBuilder::new(&registry, RendererEnvironment::host())
//!     .build(&config)
//!     .expect("builtin renderers");
//! let event = LogEvent::new(Level::INFO, "app", "listening");
//! assert_eq!(layout.render_line(&event), "INFO listening\n");
//! ```
//!
//! Registry and builder diagnostics are `tracing` events. A host process
//! installs the subscriber from [`quill_config::telemetry`] before building
//! its layouts:
//!
//! ```
//! use quill_config::{LayoutConfig, LogFormat, TelemetryConfig, telemetry};
//! use quill_layout::{LayoutBuilder, LogEvent, RendererEnvironment, RendererRegistry};
//!
//! let telemetry_config = TelemetryConfig {
//!     log_filter: String::from("warn,quill_layout=debug"),
//!     log_format: LogFormat::Compact,
//! };
//! telemetry::initialise(&telemetry_config).expect("telemetry installs once");
//!
//! let registry = RendererRegistry::with_builtins();
//! let config = LayoutConfig::from_json_str(
//!     r#"{ "renderers": [{ "name": "processname" }], "line_ending": "None" }"#,
//! )
//! .expect("valid configuration");
//! let layout = LayoutBuilder::new(&registry, RendererEnvironment::host())
//!     .build(&config)
//!     .expect("builtin renderers");
//! assert!(layout.is_process_invariant());
//! assert_eq!(layout.render_line(&LogEvent::default()), layout.render(&LogEvent::default()));
//! ```

pub mod environment;
pub mod error;
pub mod event;
pub mod layout;
pub mod registry;
pub mod renderer;
pub mod renderers;

#[cfg(test)]
mod tests;

pub use self::environment::{
    EnvironmentInfoProvider, HostEnvironment, HostFolders, PathCombiner, PlatformPathCombiner,
    RendererEnvironment, SpecialFolder, SpecialFolderResolver,
};
pub use self::error::LayoutError;
pub use self::event::LogEvent;
pub use self::layout::{Layout, LayoutBuilder};
pub use self::registry::{
    RegistrationPolicy, RendererDescriptor, RendererFactory, RendererRegistry,
};
pub use self::renderer::{
    DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits, parse_flag,
};
pub use self::renderers::{
    LevelRenderer, LiteralRenderer, LoggerRenderer, MessageRenderer, ProcessNameRenderer,
    SpecialFolderRenderer,
};
