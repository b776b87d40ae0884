//! Read-only view of the log event handed to renderers.

use tracing::Level;

/// The fields of a log event that renderers may read.
///
/// The view borrows from the caller; renderers never retain it beyond a
/// single `append` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
    level: Level,
    logger: &'a str,
    message: &'a str,
}

impl<'a> LogEvent<'a> {
    /// Creates an event view.
    #[must_use]
    pub const fn new(level: Level, logger: &'a str, message: &'a str) -> Self {
        Self {
            level,
            logger,
            message,
        }
    }

    /// Returns the event severity.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the name of the logger that produced the event.
    #[must_use]
    pub const fn logger(&self) -> &'a str {
        self.logger
    }

    /// Returns the formatted message.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }
}

impl Default for LogEvent<'_> {
    fn default() -> Self {
        Self::new(Level::INFO, "", "")
    }
}
