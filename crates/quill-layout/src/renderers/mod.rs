//! Renderers shipped with the crate.
//!
//! [`ProcessNameRenderer`] and [`SpecialFolderRenderer`] read the host
//! environment once and are process-invariant. [`LiteralRenderer`] emits
//! configured text. [`MessageRenderer`], [`LevelRenderer`] and
//! [`LoggerRenderer`] read the event and therefore render per event.

mod event_fields;
mod literal;
mod process_name;
mod special_folder;


pub use self::event_fields::{LevelRenderer, LoggerRenderer, MessageRenderer};
pub use self::literal::LiteralRenderer;
pub use self::process_name::ProcessNameRenderer;
pub use self::special_folder::SpecialFolderRenderer;
