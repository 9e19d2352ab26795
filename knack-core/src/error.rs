//! Error types for Knack.
//!
//! Unknown or unregistered characters are not errors at dispatch time; an
//! avatar without an ability simply stays unattached. The types here cover
//! the few operations that can be misused directly:
//!
//! - [`ParseCharacterError`] - a display string names no known character
//! - [`AttachError`] - an avatar already carries an ability
//! - [`RegistryError`] - a registry toggle targets an absent entry

use crate::character::Character;
use thiserror::Error;

/// A display string did not name any known [`Character`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown character: {0:?}")]
pub struct ParseCharacterError(pub(crate) String);

impl ParseCharacterError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Errors from attaching an ability to an avatar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The avatar already has an ability; attachment is permanent.
    #[error("avatar {name:?} already has an ability attached")]
    AlreadyAttached {
        /// The avatar's character name.
        name: String,
    },
}

/// Errors from registry maintenance operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No ability is registered for the character.
    #[error("no ability registered for {0}")]
    NotRegistered(Character),
}
