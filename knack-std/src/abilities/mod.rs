//! Abilities bundled with Knack.

pub mod frosty;

pub use frosty::Frosty;

use crate::registry::{RegistrationMeta, Registry};
use knack_core::{Character, default_factory};

/// Register every bundled ability.
///
/// Hosts that do not enable the `inventory` feature call this during
/// bootstrap. With the feature on, the same registrations are collected
/// automatically and calling this as well is harmless.
pub fn register_builtin(registry: &mut Registry) {
    registry.register_with_meta(
        Character::Frosty,
        default_factory::<Frosty>,
        RegistrationMeta::new().with_source(module_path!()),
    );
}
