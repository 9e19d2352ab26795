//! The host-side avatar handle.
//!
//! The host engine owns the playable entity; it embeds an [`Avatar`] to give
//! Knack the three things it needs: the character name reported at spawn, the
//! [`Tunables`] abilities may adjust, and the slot holding the attached
//! ability.

use crate::{ability::Ability, error::AttachError, event::GameEvent, tunables::Tunables};
use std::fmt;

/// Whether an avatar carries an ability.
///
/// `Unattached` is the initial state. `Attached` is terminal for the
/// avatar's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
    /// No ability; events are dropped.
    Unattached,
    /// An ability is attached and receives events.
    Attached,
}

/// A spawned avatar as seen by the ability framework.
pub struct Avatar {
    character_name: String,
    tunables: Tunables,
    ability: Option<Box<dyn Ability>>,
}

impl Avatar {
    /// Create an unattached avatar for the given character name.
    pub fn new(character_name: impl Into<String>) -> Self {
        Self::with_tunables(character_name, Tunables::default())
    }

    /// Create an unattached avatar with host-provided starting tunables.
    pub fn with_tunables(character_name: impl Into<String>, tunables: Tunables) -> Self {
        Self {
            character_name: character_name.into(),
            tunables,
            ability: None,
        }
    }

    /// The character name the host spawned this avatar with.
    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    /// Current tunables.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Mutable access for the host.
    pub fn tunables_mut(&mut self) -> &mut Tunables {
        &mut self.tunables
    }

    /// Attachment state.
    pub fn state(&self) -> AttachState {
        match self.ability {
            Some(_) => AttachState::Attached,
            None => AttachState::Unattached,
        }
    }

    /// Returns `true` once an ability has been attached.
    pub fn is_attached(&self) -> bool {
        self.ability.is_some()
    }

    /// The attached ability, if any.
    pub fn ability(&self) -> Option<&(dyn Ability + 'static)> {
        self.ability.as_deref()
    }

    /// The attached ability as its concrete type.
    pub fn ability_as<T: Ability>(&self) -> Option<&T> {
        self.ability()?.downcast_ref::<T>()
    }

    /// Store `ability` on the avatar and run its [`Ability::customize`] hook.
    ///
    /// The ability is stored first, so the avatar is already `Attached` when
    /// `customize` returns. Fails without calling any hook if an ability is
    /// already attached.
    pub fn attach(&mut self, ability: Box<dyn Ability>) -> Result<(), AttachError> {
        self.attach_with(|| ability)
    }

    /// Like [`attach`](Self::attach), but builds the ability only once the
    /// avatar is known to be unattached.
    pub fn attach_with<F>(&mut self, build: F) -> Result<(), AttachError>
    where
        F: FnOnce() -> Box<dyn Ability>,
    {
        if self.ability.is_some() {
            return Err(AttachError::AlreadyAttached {
                name: self.character_name.clone(),
            });
        }
        let ability = self.ability.insert(build());
        ability.customize(&mut self.tunables);
        Ok(())
    }

    /// Forward an event to the attached ability.
    ///
    /// Returns `false` (and does nothing) when unattached.
    pub fn deliver(&mut self, event: &GameEvent) -> bool {
        match self.ability.as_mut() {
            Some(ability) => {
                ability.on_event(&mut self.tunables, event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Avatar")
            .field("character_name", &self.character_name)
            .field("tunables", &self.tunables)
            .field("ability", &self.ability.as_ref().map(|a| a.name()))
            .finish()
    }
}
