//! The contract every layout renderer implements.
//!
//! A renderer appends one fragment of a formatted log line to a caller-owned
//! buffer. Rendering is infallible: when the data a renderer needs is
//! missing it appends nothing rather than aborting the line.
//!
//! Caching and threading hints are not part of the object-safe
//! [`LayoutRenderer`] trait. They are declared as [`RendererTraits`] constants
//! on [`DeclaredRenderer`] and travel with the registry descriptor, so the
//! composition layer can consult them without calling into the renderer.


use std::fmt;

use thiserror::Error;

use crate::environment::RendererEnvironment;
use crate::event::LogEvent;

/// Advisory metadata describing how a renderer's output may be reused.
///
/// # Example
///
/// ```
/// use quill_layout::RendererTraits;
///
/// let traits = RendererTraits::PROCESS_INVARIANT;
/// assert!(traits.process_invariant());
/// assert!(traits.thread_agnostic());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RendererTraits {
    process_invariant: bool,
    thread_agnostic: bool,
}

impl RendererTraits {
    /// Output is fixed for the process lifetime and safe from any thread.
    pub const PROCESS_INVARIANT: Self = Self::new(true, true);
    /// Output varies per event but is safe from any thread.
    pub const PER_EVENT: Self = Self::new(false, true);

    /// Creates a metadata pair.
    #[must_use]
    pub const fn new(process_invariant: bool, thread_agnostic: bool) -> Self {
        Self {
            process_invariant,
            thread_agnostic,
        }
    }

    /// Returns `true` when the output depends only on process-level state and
    /// may be computed once and cached.
    #[must_use]
    pub const fn process_invariant(self) -> bool {
        self.process_invariant
    }

    /// Returns `true` when concurrent invocations from different threads
    /// produce consistent results without external locking.
    #[must_use]
    pub const fn thread_agnostic(self) -> bool {
        self.thread_agnostic
    }
}

/// Errors a renderer reports while an option is being set.
///
/// [`crate::LayoutBuilder`] attaches the renderer and option names before
/// surfacing these as [`crate::LayoutError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The renderer has no option with this name.
    #[error("unknown option")]
    Unknown,
    /// The value could not be interpreted.
    #[error("{message}")]
    InvalidValue {
        /// Why the value was rejected.
        message: String,
    },
}

/// Appends a computed fragment of a log line.
pub trait LayoutRenderer: fmt::Debug + Send + Sync {
    /// Appends this renderer's output for `event` to `buffer`.
    ///
    /// Implementations write only to `buffer` and never fail; missing data
    /// renders as nothing.
    fn append(&self, buffer: &mut String, event: &LogEvent<'_>);

    /// Sets a named option from its textual configuration value.
    ///
    /// Option names are matched ASCII case-insensitively. Options are only
    /// set before the renderer is published to a layout.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Unknown`] when the renderer has no such option
    /// and [`OptionError::InvalidValue`] when `value` cannot be parsed.
    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        let _ = (option, value);
        Err(OptionError::Unknown)
    }
}

/// A renderer variant with a registered name and static metadata.
///
/// [`crate::RendererDescriptor::of`] lifts these constants into the registry.
pub trait DeclaredRenderer: LayoutRenderer + Sized + 'static {
    /// Name under which the renderer is registered.
    const NAME: &'static str;
    /// Caching and threading metadata.
    const TRAITS: RendererTraits;
    /// Option receiving a configuration value given without an option name.
    const DEFAULT_OPTION: Option<&'static str> = None;

    /// Builds an instance with default options.
    fn create(environment: &RendererEnvironment) -> Self;
}

/// Parses a boolean option value.
///
/// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`, ignoring ASCII
/// case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`OptionError::InvalidValue`] for anything else.
pub fn parse_flag(value: &str) -> Result<bool, OptionError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            message: format!("expected a boolean, got '{value}'"),
        }),
    }
}
