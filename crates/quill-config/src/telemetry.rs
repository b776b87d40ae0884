//! Structured diagnostic logging for processes embedding the renderers.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::defaults::{default_log_filter_string, default_log_format};
use crate::logging::LogFormat;

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Settings for the global tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive string, e.g. `"info,quill_layout=debug"`.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Output format.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: the first successful invocation installs
/// the subscriber and later calls return a fresh [`TelemetryHandle`] without
/// touching global state.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when `log_filter` is not a valid
/// directive, or [`TelemetryError::Subscriber`] when another global
/// subscriber was installed by someone else.
pub fn initialise(config: &TelemetryConfig) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| TelemetryHandle)
}

fn install_subscriber(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let builder = |filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)?;
    tracing::debug!(
        filter = %config.log_filter,
        format = %config.log_format,
        "installed telemetry subscriber"
    );
    Ok(())
}
