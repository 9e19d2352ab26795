//! Spawn and event dispatch.
//!
//! The host calls [`Dispatcher::on_spawn`] once per spawned avatar and
//! [`Dispatcher::on_event`] for every gameplay event it routes to an avatar.
//! Both are synchronous and return only after the ability hook has run.
//!
//! An avatar moves from `Unattached` to `Attached` at most once. Because
//! events are only forwarded to attached avatars, and attaching runs
//! `customize` before returning, `customize` always precedes the first
//! `on_event`.

use crate::registry::{Registry, Resolution};
use knack_core::{AttachError, Avatar, Character, GameEvent};

/// What [`Dispatcher::on_spawn`] did with an avatar.
///
/// Only `Attached` changes the avatar. Every other outcome leaves it as it
/// was; none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// An ability was created, stored and customized.
    Attached(Character),
    /// The avatar already carried an ability; it was left untouched.
    AlreadyAttached,
    /// The avatar's name matches no known character.
    UnknownCharacter,
    /// No ability is registered for the character.
    NotRegistered(Character),
    /// The character's ability is switched off.
    Disabled(Character),
}

impl SpawnOutcome {
    /// Returns `true` if this spawn attached an ability.
    pub fn is_attached(&self) -> bool {
        matches!(self, SpawnOutcome::Attached(_))
    }
}

/// What [`Dispatcher::on_event`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The attached ability received the event.
    Forwarded,
    /// The avatar has no ability; the event was dropped.
    Dropped,
}

/// Attaches abilities to spawned avatars and forwards events to them.
///
/// # Example
/// ```
/// use knack_core::{Avatar, BombType, GameEvent};
/// use knack_std::{Delivery, Dispatcher, Registry, abilities};
///
/// let mut registry = Registry::new();
/// abilities::register_builtin(&mut registry);
/// let dispatcher = Dispatcher::new(registry);
///
/// let mut avatar = Avatar::new("Frosty");
/// assert!(dispatcher.on_spawn(&mut avatar).is_attached());
/// assert_eq!(avatar.tunables().bomb_type, BombType::Ice);
///
/// let mut plain = Avatar::new("Kronk");
/// dispatcher.on_spawn(&mut plain);
/// assert_eq!(dispatcher.on_event(&mut plain, &GameEvent::DoubleJump), Delivery::Dropped);
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a populated registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry abilities are resolved from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access, for registrations made after construction.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Consume the dispatcher, returning its registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Attach the ability registered for the avatar's character.
    ///
    /// On a hit the factory is called exactly once, the new ability is stored
    /// on the avatar and its `customize` hook runs before this returns.
    pub fn on_spawn(&self, avatar: &mut Avatar) -> SpawnOutcome {
        let outcome = self.attach(avatar);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            character = avatar.character_name(),
            ?outcome,
            "avatar spawned"
        );

        outcome
    }

    fn attach(&self, avatar: &mut Avatar) -> SpawnOutcome {
        match self.registry.resolve(avatar.character_name()) {
            Resolution::Found { character, factory } => match avatar.attach_with(factory) {
                Ok(()) => SpawnOutcome::Attached(character),
                Err(AttachError::AlreadyAttached { .. }) => SpawnOutcome::AlreadyAttached,
            },
            Resolution::UnknownCharacter => SpawnOutcome::UnknownCharacter,
            Resolution::NotRegistered(character) => SpawnOutcome::NotRegistered(character),
            Resolution::Disabled(character) => SpawnOutcome::Disabled(character),
        }
    }

    /// Forward `event` to the avatar's ability, if it has one.
    pub fn on_event(&self, avatar: &mut Avatar, event: &GameEvent) -> Delivery {
        if !avatar.deliver(event) {
            return Delivery::Dropped;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            character = avatar.character_name(),
            event = event.name(),
            "event forwarded"
        );

        Delivery::Forwarded
    }
}
