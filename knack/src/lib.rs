//! # knack - Pluggable Character Abilities
//!
//! `knack` lets independently written character modules attach behavior to a
//! generic avatar when it spawns, then react to a handful of gameplay events,
//! without the avatar knowing about any particular character.
//!
//! ## Quick Start
//!
//! ```rust
//! use knack::prelude::*;
//!
//! let mut registry = Registry::new();
//! knack::abilities::register_builtin(&mut registry);
//! let dispatcher = Dispatcher::new(registry);
//!
//! // The host spawns an avatar...
//! let mut avatar = Avatar::new("Frosty");
//! dispatcher.on_spawn(&mut avatar);
//! assert_eq!(avatar.tunables().bomb_type, BombType::Ice);
//!
//! // ...and routes gameplay events to it.
//! dispatcher.on_event(&mut avatar, &GameEvent::DoubleJump);
//! ```
//!
//! ## Load-Time Registration
//!
//! With the `inventory` feature, ability modules register themselves with
//! [`register_ability!`] (or `#[knack::ability(...)]` with the `macros`
//! feature) and the host builds its registry with [`Registry::collected`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use knack_core::{
    // Contract
    Ability,
    AbilityFactory,
    AsAny,
    // Errors
    AttachError,
    // Host handle
    AttachState,
    Avatar,
    BombType,
    // Identity
    Character,
    // Events
    GameEvent,
    ParseCharacterError,
    RegistryError,
    Tunables,
    default_factory,
};

// Registry and dispatch
pub use knack_std::{
    Delivery, Dispatcher, EnabledHandle, RegistrationMeta, Registry, RegistryConfig,
    RegistryEntry, Resolution, SpawnOutcome,
};

/// Bundled abilities.
pub mod abilities {
    pub use knack_std::abilities::{Frosty, register_builtin};
}

/// Ability decorators.
pub mod hooks {
    pub use knack_std::hooks::{Logged, logged_factory};
}

/// Testing utilities.
pub mod testing {
    pub use knack_std::testing::{Call, CountingAbility, RecordingAbility};
}

/// Load-time registration support.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use knack_std::collected::AbilityRegistration;
}

#[cfg(feature = "inventory")]
pub use knack_std::register_ability;

/// Prelude module - common imports for Knack.
///
/// # Usage
///
/// ```rust,ignore
/// use knack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Ability, AbilityFactory, Avatar, BombType, Character, Delivery, Dispatcher, GameEvent,
        Registry, SpawnOutcome, Tunables, default_factory,
    };
}

#[cfg(feature = "macros")]
pub use knack_macros::ability;

#[cfg(feature = "inventory")]
pub use inventory;
