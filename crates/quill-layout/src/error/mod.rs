//! Domain errors raised while registering renderers and building layouts.
//!
//! Every variant is a configuration-time failure. Rendering itself has no
//! error channel: a renderer whose data is unavailable appends nothing.

use thiserror::Error;

/// Errors arising from renderer registration and layout construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// No renderer is registered under the requested name.
    #[error("layout renderer '{name}' is not registered")]
    UnknownRenderer {
        /// Name that was looked up.
        name: String,
    },

    /// A renderer with the same name is already registered.
    #[error("layout renderer '{name}' is already registered")]
    DuplicateRegistration {
        /// Name that collided.
        name: String,
    },

    /// The renderer name is empty or whitespace.
    #[error("layout renderer name '{name}' is not valid")]
    InvalidName {
        /// Rejected name.
        name: String,
    },

    /// The renderer does not expose an option with this name.
    #[error("layout renderer '{renderer}' has no option '{option}'")]
    UnknownOption {
        /// Renderer being configured.
        renderer: String,
        /// Option that was not recognised.
        option: String,
    },

    /// The option exists but the supplied value was rejected.
    #[error("invalid value for option '{option}' of layout renderer '{renderer}': {message}")]
    InvalidOption {
        /// Renderer being configured.
        renderer: String,
        /// Option being set.
        option: String,
        /// Why the value was rejected.
        message: String,
    },
}
