//! Shared test doubles for the environment seams.

use std::collections::HashMap;
use std::sync::Arc;

use mockall::mock;

use crate::environment::{
    EnvironmentInfoProvider, PlatformPathCombiner, RendererEnvironment, SpecialFolder,
    SpecialFolderResolver,
};

mock! {
    pub Info {}
    impl EnvironmentInfoProvider for Info {
        fn current_process_file_path(&self) -> String;
        fn current_process_base_name(&self) -> String;
    }
}

mock! {
    pub Folders {}
    impl SpecialFolderResolver for Folders {
        fn resolve(&self, folder: SpecialFolder) -> String;
    }
}

/// Process identity fixed at construction.
pub(crate) struct FixedIdentity {
    file_path: String,
    base_name: String,
}

impl FixedIdentity {
    pub(crate) fn new(file_path: &str, base_name: &str) -> Self {
        Self {
            file_path: file_path.to_owned(),
            base_name: base_name.to_owned(),
        }
    }
}

impl EnvironmentInfoProvider for FixedIdentity {
    fn current_process_file_path(&self) -> String {
        self.file_path.clone()
    }

    fn current_process_base_name(&self) -> String {
        self.base_name.clone()
    }
}

/// Special folders from a fixed table; anything else is unsupported.
#[derive(Default)]
pub(crate) struct FixedFolders {
    paths: HashMap<SpecialFolder, String>,
}

impl FixedFolders {
    pub(crate) fn with(mut self, folder: SpecialFolder, path: &str) -> Self {
        self.paths.insert(folder, path.to_owned());
        self
    }
}

impl SpecialFolderResolver for FixedFolders {
    fn resolve(&self, folder: SpecialFolder) -> String {
        self.paths.get(&folder).cloned().unwrap_or_default()
    }
}

/// `/usr/bin/myapp` running for alice, whose documents path carries a
/// trailing separator.
pub(crate) fn fixed_environment() -> RendererEnvironment {
    let folders = FixedFolders::default()
        .with(SpecialFolder::Desktop, "/home/alice/Desktop")
        .with(SpecialFolder::MyDocuments, "/home/alice/Documents/")
        .with(SpecialFolder::ApplicationData, "/home/alice/.config");
    RendererEnvironment::new(
        Arc::new(FixedIdentity::new("/usr/bin/myapp", "myapp")),
        Arc::new(folders),
        Arc::new(PlatformPathCombiner),
    )
}
