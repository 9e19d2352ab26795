//! Load-time ability registration via `inventory`.
//!
//! Ability modules submit an [`AbilityRegistration`] next to their
//! definition with [`register_ability!`](crate::register_ability). The host
//! folds every submission into a [`Registry`] during bootstrap with
//! [`Registry::collected`].
//!
//! Collection order across modules is unspecified. If two modules submit the
//! same character, whichever is folded in last wins.

use crate::registry::{RegistrationMeta, Registry};
use knack_core::{AbilityFactory, Character};

/// An ability registration submitted at load time.
#[derive(Debug, Clone, Copy)]
pub struct AbilityRegistration {
    /// The character the ability belongs to.
    pub character: Character,
    /// Constructor for the ability.
    pub factory: AbilityFactory,
    /// The submitting module, usually `module_path!()`.
    pub source: &'static str,
}

impl AbilityRegistration {
    /// Create a registration. Usable in `inventory::submit!`.
    pub const fn new(character: Character, factory: AbilityFactory, source: &'static str) -> Self {
        Self {
            character,
            factory,
            source,
        }
    }
}

inventory::collect!(AbilityRegistration);

/// Registers an ability type for a character at load time.
///
/// The type must implement `Ability` and `Default`.
///
/// # Example
/// ```rust,ignore
/// #[derive(Default)]
/// struct Bones;
/// impl Ability for Bones { ... }
///
/// register_ability!(Character::Bones, Bones);
/// ```
#[macro_export]
macro_rules! register_ability {
    ($character:expr, $ability:ty) => {
        $crate::inventory::submit! {
            $crate::collected::AbilityRegistration::new(
                $character,
                $crate::knack_core::default_factory::<$ability>,
                ::core::module_path!(),
            )
        }
    };
}

impl Registry {
    /// Fold every submitted [`AbilityRegistration`] into this registry.
    ///
    /// Returns the number of registrations applied.
    pub fn collect(&mut self) -> usize {
        let mut applied = 0;
        for registration in inventory::iter::<AbilityRegistration> {
            self.register_with_meta(
                registration.character,
                registration.factory,
                RegistrationMeta::new().with_source(registration.source),
            );
            applied += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(applied, total = self.len(), "collected ability registrations");

        applied
    }

    /// Build a registry from every submitted registration.
    pub fn collected() -> Self {
        let mut registry = Self::new();
        registry.collect();
        registry
    }
}
