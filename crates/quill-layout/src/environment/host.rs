//! Host-backed implementations of the environment seams.

use std::env;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use super::{EnvironmentInfoProvider, PathCombiner, SpecialFolder, SpecialFolderResolver};

/// Reads the process identity from [`std::env::current_exe`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HostEnvironment;

impl HostEnvironment {
    fn current_exe() -> Option<Utf8PathBuf> {
        let path = env::current_exe()
            .map_err(|error| debug!(%error, "current executable path is unavailable"))
            .ok()?;
        Utf8PathBuf::from_path_buf(path)
            .map_err(|path| debug!(path = %path.display(), "executable path is not UTF-8"))
            .ok()
    }
}

impl EnvironmentInfoProvider for HostEnvironment {
    fn current_process_file_path(&self) -> String {
        Self::current_exe()
            .map(Utf8PathBuf::into_string)
            .unwrap_or_default()
    }

    fn current_process_base_name(&self) -> String {
        Self::current_exe()
            .and_then(|path| path.file_stem().map(str::to_owned))
            .unwrap_or_default()
    }
}

/// Resolves special folders through the `dirs` crate and, for the
/// Windows-only folders, the standard environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFolders;

impl HostFolders {
    fn lookup(folder: SpecialFolder) -> Option<PathBuf> {
        match folder {
            SpecialFolder::ApplicationData => dirs::config_dir(),
            SpecialFolder::LocalApplicationData => dirs::data_local_dir(),
            SpecialFolder::CommonApplicationData => common_application_data(),
            SpecialFolder::UserProfile => dirs::home_dir(),
            SpecialFolder::MyDocuments => dirs::document_dir(),
            SpecialFolder::Desktop => dirs::desktop_dir(),
            SpecialFolder::Downloads => dirs::download_dir(),
            SpecialFolder::MyMusic => dirs::audio_dir(),
            SpecialFolder::MyPictures => dirs::picture_dir(),
            SpecialFolder::MyVideos => dirs::video_dir(),
            SpecialFolder::Templates => dirs::template_dir(),
            SpecialFolder::Public => dirs::public_dir(),
            SpecialFolder::Fonts => dirs::font_dir(),
            SpecialFolder::InternetCache => dirs::cache_dir(),
            SpecialFolder::Windows => env::var_os("SystemRoot").map(PathBuf::from),
            SpecialFolder::System => {
                env::var_os("SystemRoot").map(|root| PathBuf::from(root).join("System32"))
            }
            SpecialFolder::ProgramFiles => env::var_os("ProgramFiles").map(PathBuf::from),
        }
    }
}

#[cfg(unix)]
fn common_application_data() -> Option<PathBuf> {
    Some(PathBuf::from("/usr/share"))
}

#[cfg(not(unix))]
fn common_application_data() -> Option<PathBuf> {
    env::var_os("ProgramData").map(PathBuf::from)
}

impl SpecialFolderResolver for HostFolders {
    fn resolve(&self, folder: SpecialFolder) -> String {
        let Some(path) = Self::lookup(folder) else {
            debug!(%folder, "special folder is not available on this host");
            return String::new();
        };
        Utf8PathBuf::from_path_buf(path).map_or_else(
            |path| {
                debug!(%folder, path = %path.display(), "special folder path is not UTF-8");
                String::new()
            },
            Utf8PathBuf::into_string,
        )
    }
}

/// Joins segments component by component with [`camino::Utf8PathBuf::push`].
///
/// Repeated and trailing separators inside a segment collapse, so
/// `"logs//"` contributes a single `logs` component. An absolute segment
/// replaces everything before it, matching the platform's own path joining.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformPathCombiner;

impl PathCombiner for PlatformPathCombiner {
    fn combine(&self, base: &str, segments: &[Option<&str>]) -> String {
        let mut path = Utf8PathBuf::from(base);
        for segment in segments.iter().flatten() {
            for component in Utf8Path::new(segment).components() {
                path.push(component);
            }
        }
        path.into_string()
    }
}
