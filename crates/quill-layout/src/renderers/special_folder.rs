//! Well-known directory paths, optionally extended with a sub-directory and
//! file name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::environment::{PathCombiner, RendererEnvironment, SpecialFolder, SpecialFolderResolver};
use crate::event::LogEvent;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, OptionError, RendererTraits};

/// Renders a special folder path combined with optional `dir` and `file`
/// segments, in that order.
///
/// The combined path is resolved on first render and reused afterwards.
/// Unsupported folders resolve to an empty base, so the output is just the
/// supplied segments.
///
/// | Option   | Values                          | Default           |
/// |----------|---------------------------------|-------------------|
/// | `folder` | a [`SpecialFolder`] name        | `Desktop`         |
/// | `dir`    | path segment                    | unset             |
/// | `file`   | path segment                    | unset             |
///
/// `folder` is the default option, so an unnamed configuration value selects
/// the folder.
pub struct SpecialFolderRenderer {
    folder: SpecialFolder,
    dir: Option<String>,
    file: Option<String>,
    folders: Arc<dyn SpecialFolderResolver>,
    paths: Arc<dyn PathCombiner>,
    resolved: OnceCell<String>,
}

impl SpecialFolderRenderer {
    /// Creates a renderer for [`SpecialFolder::Desktop`] with no segments.
    #[must_use]
    pub fn new(environment: &RendererEnvironment) -> Self {
        Self {
            folder: SpecialFolder::default(),
            dir: None,
            file: None,
            folders: environment.folders(),
            paths: environment.paths(),
            resolved: OnceCell::new(),
        }
    }

    /// Selects the folder.
    #[must_use]
    pub fn with_folder(mut self, folder: SpecialFolder) -> Self {
        self.folder = folder;
        self.resolved = OnceCell::new();
        self
    }

    /// Sets the directory segment appended to the folder path.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self.resolved = OnceCell::new();
        self
    }

    /// Sets the file segment appended after the directory segment.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self.resolved = OnceCell::new();
        self
    }

    /// Returns the configured folder.
    #[must_use]
    pub const fn folder(&self) -> SpecialFolder {
        self.folder
    }

    /// Returns the combined path, resolving it on first use.
    #[must_use]
    pub fn path(&self) -> &str {
        self.resolved.get_or_init(|| {
            let base = self.folders.resolve(self.folder);
            self.paths
                .combine(&base, &[self.dir.as_deref(), self.file.as_deref()])
        })
    }
}

impl LayoutRenderer for SpecialFolderRenderer {
    fn append(&self, buffer: &mut String, _event: &LogEvent<'_>) {
        buffer.push_str(self.path());
    }

    fn set_option(&mut self, option: &str, value: &str) -> Result<(), OptionError> {
        match option.to_ascii_lowercase().as_str() {
            "folder" => {
                self.folder =
                    SpecialFolder::from_str(value).map_err(|_| OptionError::InvalidValue {
                        message: format!("unknown special folder '{value}'"),
                    })?;
            }
            "dir" => self.dir = Some(value.to_owned()),
            "file" => self.file = Some(value.to_owned()),
            _ => return Err(OptionError::Unknown),
        }
        self.resolved = OnceCell::new();
        Ok(())
    }
}

impl DeclaredRenderer for SpecialFolderRenderer {
    const NAME: &'static str = "specialfolder";
    const TRAITS: RendererTraits = RendererTraits::PROCESS_INVARIANT;
    const DEFAULT_OPTION: Option<&'static str> = Some("folder");

    fn create(environment: &RendererEnvironment) -> Self {
        Self::new(environment)
    }
}

impl fmt::Debug for SpecialFolderRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialFolderRenderer")
            .field("folder", &self.folder)
            .field("dir", &self.dir)
            .field("file", &self.file)
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}
