//! Registry of ability factories keyed by character.
//!
//! Ability modules register a factory for their character during bootstrap,
//! before the first avatar spawns. The [`Dispatcher`](crate::Dispatcher)
//! resolves a spawned avatar's character name through the registry.
//!
//! Each entry can be switched off at runtime through its [`EnabledHandle`]
//! without removing it. Disabled entries still answer [`Registry::lookup`]
//! but resolve as [`Resolution::Disabled`] at spawn.

use knack_core::{AbilityFactory, Character, RegistryError};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// A handle for toggling a registered ability on and off at runtime.
///
/// Clones share state, so a settings surface can hold a handle while the
/// registry keeps resolving through it.
#[derive(Debug, Clone)]
pub struct EnabledHandle(Arc<AtomicBool>);

impl EnabledHandle {
    /// Create a new enabled handle with the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Check if the ability is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Enable the ability.
    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Disable the ability.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Toggle the enabled state, returning the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }

    /// Set the enabled state.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }
}

impl Default for EnabledHandle {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Registry-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Whether newly registered characters start enabled. Default `true`.
    pub auto_enable_new: bool,
}

impl RegistryConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            auto_enable_new: true,
        }
    }

    /// Set whether new registrations start enabled.
    pub fn with_auto_enable_new(mut self, auto_enable_new: bool) -> Self {
        self.auto_enable_new = auto_enable_new;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional metadata supplied with a registration.
#[derive(Debug, Clone, Default)]
pub struct RegistrationMeta {
    /// Name of the module that registered the ability, for diagnostics.
    pub source: Option<&'static str>,
    /// Initial enabled state. `None` defers to [`RegistryConfig::auto_enable_new`].
    pub enabled: Option<bool>,
}

impl RegistrationMeta {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source module name.
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the initial enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// A registered factory with its runtime state.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    factory: AbilityFactory,
    source: Option<&'static str>,
    enabled: EnabledHandle,
}

impl RegistryEntry {
    /// The factory that builds the ability.
    pub fn factory(&self) -> AbilityFactory {
        self.factory
    }

    /// The module that registered the ability, if recorded.
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Check if this entry is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    /// Get a handle for toggling this entry at runtime.
    pub fn enabled_handle(&self) -> EnabledHandle {
        self.enabled.clone()
    }
}

/// How a character name resolved against the registry.
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// An enabled factory is registered for the character.
    Found {
        /// The resolved character.
        character: Character,
        /// Its factory.
        factory: AbilityFactory,
    },
    /// The name belongs to no known character.
    UnknownCharacter,
    /// The character is known but nothing is registered for it.
    NotRegistered(Character),
    /// A factory is registered but switched off.
    Disabled(Character),
}

/// Mapping from [`Character`] to the factory of its ability.
///
/// At most one factory exists per character. Registering a character again
/// replaces its factory (last writer wins).
///
/// Cloning a registry yields an independent copy: enabled state is copied,
/// not shared with the original's handles.
///
/// # Example
/// ```
/// use knack_core::{Character, default_factory};
/// use knack_std::{Registry, abilities::Frosty};
///
/// let mut registry = Registry::new();
/// registry.register(Character::Frosty, default_factory::<Frosty>);
///
/// assert!(registry.lookup(Character::Frosty).is_some());
/// assert!(registry.lookup(Character::Kronk).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<Character, RegistryEntry>,
    config: RegistryConfig,
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(character, entry)| {
                let entry = RegistryEntry {
                    factory: entry.factory,
                    source: entry.source,
                    enabled: EnabledHandle::new(entry.is_enabled()),
                };
                (*character, entry)
            })
            .collect();
        Self {
            entries,
            config: self.config,
        }
    }
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
        }
    }

    /// The registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a factory for `character`.
    ///
    /// Returns the factory it replaced, if any. Replacing is not an error.
    pub fn register(
        &mut self,
        character: Character,
        factory: AbilityFactory,
    ) -> Option<AbilityFactory> {
        self.register_with_meta(character, factory, RegistrationMeta::new())
    }

    /// Register a factory with metadata.
    ///
    /// When an entry already exists, its factory and source are replaced but
    /// its [`EnabledHandle`] is kept, so outstanding handles stay live and
    /// `meta.enabled` is ignored.
    pub fn register_with_meta(
        &mut self,
        character: Character,
        factory: AbilityFactory,
        meta: RegistrationMeta,
    ) -> Option<AbilityFactory> {
        if let Some(entry) = self.entries.get_mut(&character) {
            let previous = std::mem::replace(&mut entry.factory, factory);
            entry.source = meta.source;

            #[cfg(feature = "tracing")]
            tracing::warn!(
                character = character.as_str(),
                source = meta.source,
                "ability registration replaced"
            );

            return Some(previous);
        }

        let enabled = meta.enabled.unwrap_or(self.config.auto_enable_new);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            character = character.as_str(),
            source = meta.source,
            enabled,
            "ability registered"
        );

        self.entries.insert(
            character,
            RegistryEntry {
                factory,
                source: meta.source,
                enabled: EnabledHandle::new(enabled),
            },
        );
        None
    }

    /// The factory registered for `character`, enabled or not.
    pub fn lookup(&self, character: Character) -> Option<AbilityFactory> {
        self.entries.get(&character).map(RegistryEntry::factory)
    }

    /// Look up by display string. Unknown names yield `None`.
    pub fn lookup_name(&self, name: &str) -> Option<AbilityFactory> {
        self.lookup(Character::from_name(name)?)
    }

    /// The full entry for `character`.
    pub fn entry(&self, character: Character) -> Option<&RegistryEntry> {
        self.entries.get(&character)
    }

    /// Resolve a spawned avatar's character name.
    pub fn resolve(&self, name: &str) -> Resolution {
        let Some(character) = Character::from_name(name) else {
            return Resolution::UnknownCharacter;
        };
        match self.entries.get(&character) {
            None => Resolution::NotRegistered(character),
            Some(entry) if !entry.is_enabled() => Resolution::Disabled(character),
            Some(entry) => Resolution::Found {
                character,
                factory: entry.factory,
            },
        }
    }

    /// Whether `character` is registered and enabled.
    pub fn is_enabled(&self, character: Character) -> bool {
        self.entries
            .get(&character)
            .is_some_and(RegistryEntry::is_enabled)
    }

    /// A handle for toggling `character` at runtime.
    pub fn enabled_handle(&self, character: Character) -> Option<EnabledHandle> {
        self.entries
            .get(&character)
            .map(RegistryEntry::enabled_handle)
    }

    /// Enable a registered character.
    pub fn enable(&self, character: Character) -> Result<(), RegistryError> {
        self.set_enabled(character, true)
    }

    /// Disable a registered character. Avatars spawned afterwards stay
    /// unattached; already attached avatars keep their ability.
    pub fn disable(&self, character: Character) -> Result<(), RegistryError> {
        self.set_enabled(character, false)
    }

    fn set_enabled(&self, character: Character, enabled: bool) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get(&character)
            .ok_or(RegistryError::NotRegistered(character))?;
        entry.enabled.set(enabled);
        Ok(())
    }

    /// Enable every registered character.
    pub fn enable_all(&self) {
        for entry in self.entries.values() {
            entry.enabled.enable();
        }
    }

    /// Disable every registered character.
    pub fn disable_all(&self) {
        for entry in self.entries.values() {
            entry.enabled.disable();
        }
    }

    /// Registered characters, sorted by display name.
    pub fn characters(&self) -> Vec<Character> {
        let mut characters: Vec<_> = self.entries.keys().copied().collect();
        characters.sort_by_key(|c| c.as_str());
        characters
    }

    /// Get the number of registered characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
