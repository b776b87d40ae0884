//! Seams between renderers and the host operating system.
//!
//! Renderers never query the OS directly. They receive a
//! [`RendererEnvironment`] bundling three collaborators:
//!
//! - [`EnvironmentInfoProvider`] for the current process identity;
//! - [`SpecialFolderResolver`] for well-known directories;
//! - [`PathCombiner`] for joining path segments.
//!
//! Each lookup degrades to an empty string when the host cannot answer, so
//! rendering never fails because environment data is missing.
//! [`RendererEnvironment::host`] wires the host-backed implementations from
//! [`host`]; tests substitute their own.

pub mod host;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use strum::{Display, EnumIter, EnumString};

pub use self::host::{HostEnvironment, HostFolders, PlatformPathCombiner};

/// Supplies the identity of the running process.
pub trait EnvironmentInfoProvider: Send + Sync {
    /// Returns the full path of the process executable, or an empty string.
    fn current_process_file_path(&self) -> String;

    /// Returns the executable file name without extension, or an empty string.
    fn current_process_base_name(&self) -> String;
}

/// Resolves well-known directories.
pub trait SpecialFolderResolver: Send + Sync {
    /// Returns the base path for `folder`, or an empty string when the folder
    /// is not supported on this host.
    fn resolve(&self, folder: SpecialFolder) -> String;
}

/// Joins path segments using the platform's rules.
pub trait PathCombiner: Send + Sync {
    /// Appends each present segment to `base` in order.
    ///
    /// `None` and empty segments are skipped. Separators are inserted only
    /// where missing.
    fn combine(&self, base: &str, segments: &[Option<&str>]) -> String;
}

/// Well-known directories a [`SpecialFolderResolver`] can look up.
///
/// Names parse ASCII case-insensitively and accept the common aliases, so
/// `"Documents"`, `"mydocuments"` and `"Personal"` all select
/// [`SpecialFolder::MyDocuments`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SpecialFolder {
    /// Roaming per-user application data.
    ApplicationData,
    /// Non-roaming per-user application data.
    LocalApplicationData,
    /// Application data shared by all users.
    CommonApplicationData,
    /// The user's home directory.
    #[strum(to_string = "UserProfile", serialize = "Home")]
    UserProfile,
    /// The user's documents directory.
    #[strum(to_string = "MyDocuments", serialize = "Documents", serialize = "Personal")]
    MyDocuments,
    /// The user's desktop.
    #[default]
    #[strum(to_string = "Desktop", serialize = "DesktopDirectory")]
    Desktop,
    /// The user's downloads directory.
    Downloads,
    /// The user's music directory.
    #[strum(to_string = "MyMusic", serialize = "Music")]
    MyMusic,
    /// The user's pictures directory.
    #[strum(to_string = "MyPictures", serialize = "Pictures")]
    MyPictures,
    /// The user's videos directory.
    #[strum(to_string = "MyVideos", serialize = "Videos")]
    MyVideos,
    /// The user's document templates.
    Templates,
    /// The user's publicly shared directory.
    Public,
    /// The user's font directory.
    Fonts,
    /// The user's cache directory.
    #[strum(to_string = "InternetCache", serialize = "Cache")]
    InternetCache,
    /// The Windows installation directory.
    Windows,
    /// The Windows system directory.
    System,
    /// The program files directory.
    ProgramFiles,
}

/// The collaborators handed to every renderer factory.
#[derive(Clone)]
pub struct RendererEnvironment {
    info: Arc<dyn EnvironmentInfoProvider>,
    folders: Arc<dyn SpecialFolderResolver>,
    paths: Arc<dyn PathCombiner>,
}

impl RendererEnvironment {
    /// Bundles explicit collaborators.
    #[must_use]
    pub fn new(
        info: Arc<dyn EnvironmentInfoProvider>,
        folders: Arc<dyn SpecialFolderResolver>,
        paths: Arc<dyn PathCombiner>,
    ) -> Self {
        Self {
            info,
            folders,
            paths,
        }
    }

    /// Wires the host-backed implementations.
    #[must_use]
    pub fn host() -> Self {
        Self::new(
            Arc::new(HostEnvironment),
            Arc::new(HostFolders),
            Arc::new(PlatformPathCombiner),
        )
    }

    /// Replaces the process identity provider.
    #[must_use]
    pub fn with_info(mut self, info: Arc<dyn EnvironmentInfoProvider>) -> Self {
        self.info = info;
        self
    }

    /// Replaces the special folder resolver.
    #[must_use]
    pub fn with_folders(mut self, folders: Arc<dyn SpecialFolderResolver>) -> Self {
        self.folders = folders;
        self
    }

    /// Replaces the path combiner.
    #[must_use]
    pub fn with_paths(mut self, paths: Arc<dyn PathCombiner>) -> Self {
        self.paths = paths;
        self
    }

    /// Returns the process identity provider.
    #[must_use]
    pub fn info(&self) -> &dyn EnvironmentInfoProvider {
        self.info.as_ref()
    }

    /// Returns a shared handle to the special folder resolver.
    #[must_use]
    pub fn folders(&self) -> Arc<dyn SpecialFolderResolver> {
        Arc::clone(&self.folders)
    }

    /// Returns a shared handle to the path combiner.
    #[must_use]
    pub fn paths(&self) -> Arc<dyn PathCombiner> {
        Arc::clone(&self.paths)
    }
}

impl Default for RendererEnvironment {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Debug for RendererEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererEnvironment").finish_non_exhaustive()
    }
}
