//! Renderer registry mapping names to descriptors.
//!
//! The [`RendererRegistry`] stores [`RendererDescriptor`]s keyed by a
//! case-insensitive name. It is populated during bootstrap through `&mut self`
//! and read concurrently afterwards through `&self`; it holds no per-event
//! state and no interior locks.
//!
//! Duplicate registrations are rejected by default. Replacing an existing
//! renderer requires [`RegistrationPolicy::Replace`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::environment::RendererEnvironment;
use crate::error::LayoutError;
use crate::renderer::{DeclaredRenderer, LayoutRenderer, RendererTraits};
use crate::renderers::{
    LevelRenderer, LiteralRenderer, LoggerRenderer, MessageRenderer, ProcessNameRenderer,
    SpecialFolderRenderer,
};

/// Factory producing a fresh renderer with default options.
pub type RendererFactory =
    Arc<dyn Fn(&RendererEnvironment) -> Box<dyn LayoutRenderer> + Send + Sync>;

/// A registered renderer variant: its name, metadata and factory.
///
/// # Example
///
/// ```
/// use quill_layout::{ProcessNameRenderer, RendererDescriptor};
///
/// let descriptor = RendererDescriptor::of::<ProcessNameRenderer>();
/// assert_eq!(descriptor.name(), "processname");
/// assert!(descriptor.traits().process_invariant());
/// ```
#[derive(Clone)]
pub struct RendererDescriptor {
    name: String,
    traits: RendererTraits,
    default_option: Option<String>,
    factory: RendererFactory,
}

impl RendererDescriptor {
    /// Creates a descriptor from an explicit factory.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, traits: RendererTraits, factory: F) -> Self
    where
        F: Fn(&RendererEnvironment) -> Box<dyn LayoutRenderer> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            traits,
            default_option: None,
            factory: Arc::new(factory),
        }
    }

    /// Names the option that receives an unnamed configuration value.
    #[must_use]
    pub fn with_default_option(mut self, option: impl Into<String>) -> Self {
        self.default_option = Some(option.into());
        self
    }

    /// Creates a descriptor from a renderer's declared name and metadata.
    #[must_use]
    pub fn of<R: DeclaredRenderer>() -> Self {
        let descriptor = Self::new(
            R::NAME,
            R::TRAITS,
            |environment: &RendererEnvironment| -> Box<dyn LayoutRenderer> {
                Box::new(R::create(environment))
            },
        );
        match R::DEFAULT_OPTION {
            Some(option) => descriptor.with_default_option(option),
            None => descriptor,
        }
    }

    /// Returns the registered name as supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the caching and threading metadata.
    #[must_use]
    pub const fn traits(&self) -> RendererTraits {
        self.traits
    }

    /// Returns the option receiving an unnamed configuration value, if any.
    #[must_use]
    pub fn default_option(&self) -> Option<&str> {
        self.default_option.as_deref()
    }

    /// Builds a renderer with default options.
    #[must_use]
    pub fn create(&self, environment: &RendererEnvironment) -> Box<dyn LayoutRenderer> {
        (self.factory)(environment)
    }
}

impl fmt::Debug for RendererDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererDescriptor")
            .field("name", &self.name)
            .field("traits", &self.traits)
            .field("default_option", &self.default_option)
            .finish_non_exhaustive()
    }
}

/// How [`RendererRegistry::register_with_policy`] treats an existing name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Fail with [`LayoutError::DuplicateRegistration`].
    #[default]
    Reject,
    /// Overwrite the existing descriptor.
    Replace,
}

/// Registry of renderer descriptors keyed by case-insensitive name.
///
/// # Example
///
/// ```
/// use quill_layout::{RendererDescriptor, RendererRegistry, SpecialFolderRenderer};
///
/// let mut registry = RendererRegistry::new();
/// registry
///     .register(RendererDescriptor::of::<SpecialFolderRenderer>())
///     .expect("registration succeeds");
/// assert!(registry.resolve("SpecialFolder").is_ok());
/// assert!(registry.register(RendererDescriptor::of::<SpecialFolderRenderer>()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    descriptors: HashMap<String, RendererDescriptor>,
}

impl RendererRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every renderer shipped with this crate.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in builtin_descriptors() {
            registry.insert(descriptor);
        }
        registry
    }

    /// Registers a descriptor, rejecting names already in use.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateRegistration`] when the name is taken,
    /// leaving the existing registration intact, or
    /// [`LayoutError::InvalidName`] when the name is blank.
    pub fn register(&mut self, descriptor: RendererDescriptor) -> Result<(), LayoutError> {
        self.register_with_policy(descriptor, RegistrationPolicy::Reject)
            .map(|_| ())
    }

    /// Registers a descriptor under an explicit duplicate policy.
    ///
    /// Returns the replaced descriptor when `policy` is
    /// [`RegistrationPolicy::Replace`] and the name was taken.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateRegistration`] when the name is taken
    /// under [`RegistrationPolicy::Reject`], or [`LayoutError::InvalidName`]
    /// when the name is blank.
    pub fn register_with_policy(
        &mut self,
        descriptor: RendererDescriptor,
        policy: RegistrationPolicy,
    ) -> Result<Option<RendererDescriptor>, LayoutError> {
        if descriptor.name().trim().is_empty() {
            return Err(LayoutError::InvalidName {
                name: descriptor.name().to_owned(),
            });
        }
        let key = normalise_key(descriptor.name());
        if self.descriptors.contains_key(&key) {
            if policy == RegistrationPolicy::Reject {
                return Err(LayoutError::DuplicateRegistration {
                    name: descriptor.name().to_owned(),
                });
            }
            warn!(renderer = descriptor.name(), "replacing layout renderer registration");
        }
        Ok(self.insert(descriptor))
    }

    fn insert(&mut self, descriptor: RendererDescriptor) -> Option<RendererDescriptor> {
        debug!(
            renderer = descriptor.name(),
            process_invariant = descriptor.traits().process_invariant(),
            thread_agnostic = descriptor.traits().thread_agnostic(),
            "registered layout renderer"
        );
        self.descriptors
            .insert(normalise_key(descriptor.name()), descriptor)
    }

    /// Looks up a descriptor by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRenderer`] when nothing is registered
    /// under `name`.
    pub fn resolve(&self, name: &str) -> Result<&RendererDescriptor, LayoutError> {
        self.descriptors
            .get(&normalise_key(name))
            .ok_or_else(|| LayoutError::UnknownRenderer {
                name: name.to_owned(),
            })
    }

    /// Returns the metadata registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRenderer`] when nothing is registered
    /// under `name`.
    pub fn metadata_for(&self, name: &str) -> Result<RendererTraits, LayoutError> {
        self.resolve(name).map(RendererDescriptor::traits)
    }

    /// Builds a renderer registered under `name` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRenderer`] when nothing is registered
    /// under `name`.
    pub fn create(
        &self,
        name: &str,
        environment: &RendererEnvironment,
    ) -> Result<Box<dyn LayoutRenderer>, LayoutError> {
        self.resolve(name)
            .map(|descriptor| descriptor.create(environment))
    }

    /// Returns `true` when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(&normalise_key(name))
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .descriptors
            .values()
            .map(RendererDescriptor::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered renderers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` when no renderers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn builtin_descriptors() -> [RendererDescriptor; 6] {
    [
        RendererDescriptor::of::<ProcessNameRenderer>(),
        RendererDescriptor::of::<SpecialFolderRenderer>(),
        RendererDescriptor::of::<LiteralRenderer>(),
        RendererDescriptor::of::<MessageRenderer>(),
        RendererDescriptor::of::<LevelRenderer>(),
        RendererDescriptor::of::<LoggerRenderer>(),
    ]
}

fn normalise_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
