//! Default values shared by configuration types.

use crate::line_ending::LineEndingMode;
use crate::logging::LogFormat;

/// Default log filter expression applied by [`crate::telemetry::initialise`].
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default format for diagnostic logging.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Line ending appended to rendered lines when none is configured.
#[must_use]
pub const fn default_line_ending() -> LineEndingMode {
    LineEndingMode::DEFAULT
}
