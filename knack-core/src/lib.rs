//! # knack-core
//!
//! Core types for the Knack character ability framework.
//!
//! This crate has minimal dependencies and is what ability modules import
//! when they only need to implement the contract, not run dispatch.
//!
//! # Building Blocks
//!
//! ## Identity ([`Character`])
//!
//! A closed set of character kinds, each with a fixed display string. The
//! host names spawned avatars with these strings; the registry is keyed by
//! the enum.
//!
//! ## Contract ([`Ability`])
//!
//! What a character module implements: a one-time `customize` hook run at
//! attach, and an `on_event` hook run for every delivered [`GameEvent`].
//!
//! ## Host Handle ([`Avatar`])
//!
//! The part of a host entity Knack touches: its character name, its
//! [`Tunables`], and the slot owning the attached ability.
//!
//! # Error Types
//!
//! - [`ParseCharacterError`] - Unknown display string
//! - [`AttachError`] - Avatar already attached
//! - [`RegistryError`] - Registry toggles on absent entries

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod ability;
mod avatar;
mod character;
mod error;
mod event;
mod tunables;

// Re-exports
pub use ability::{Ability, AbilityFactory, AsAny, default_factory};
pub use avatar::{AttachState, Avatar};
pub use character::Character;
pub use error::{AttachError, ParseCharacterError, RegistryError};
pub use event::GameEvent;
pub use tunables::{BombType, Tunables};
