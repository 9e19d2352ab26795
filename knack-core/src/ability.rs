//! # The Ability Contract
//!
//! An ability is the per-avatar behavior a character module contributes. It
//! has two hooks:
//!
//! - [`Ability::customize`] runs once, when the ability is attached at spawn,
//!   before the avatar sees any gameplay event.
//! - [`Ability::on_event`] runs once per delivered [`GameEvent`] for as long
//!   as the avatar lives.
//!
//! Abilities never hold a pointer back to their avatar. Each hook receives a
//! borrow of the avatar's [`Tunables`] instead, which cannot outlive the call.

use crate::{event::GameEvent, tunables::Tunables};
use std::any::Any;

/// The behavior a character module attaches to an avatar.
///
/// Instances are created by an [`AbilityFactory`] at spawn, owned by exactly
/// one avatar, and dropped with it.
///
/// # Example
///
/// ```rust
/// use knack_core::{Ability, BombType, GameEvent, Tunables};
///
/// #[derive(Default)]
/// struct Sticky {
///     punches: u32,
/// }
///
/// impl Ability for Sticky {
///     fn customize(&mut self, tunables: &mut Tunables) {
///         tunables.bomb_type = BombType::Sticky;
///     }
///
///     fn on_event(&mut self, _tunables: &mut Tunables, event: &GameEvent) {
///         match event {
///             GameEvent::DoublePunch => self.punches += 1,
///             _ => {}
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Ability`",
    label = "missing `Ability` implementation",
    note = "Abilities must implement both `customize` and `on_event`."
)]
pub trait Ability: AsAny {
    /// Adjust the avatar once, at attach time.
    ///
    /// No event has been delivered yet when this runs.
    fn customize(&mut self, tunables: &mut Tunables);

    /// React to a gameplay event.
    ///
    /// Kinds the ability does not care about must be ignored.
    fn on_event(&mut self, tunables: &mut Tunables, event: &GameEvent);

    /// A human-readable name, used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Upcast helper so `dyn Ability` can be inspected with [`Any`].
///
/// Implemented for every `'static` type; there is no need to implement it by
/// hand.
pub trait AsAny: Any {
    /// Borrow `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Borrow `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Ability {
    /// Returns `true` if the ability is of type `T`.
    pub fn is<T: Ability>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    /// Borrow the ability as its concrete type.
    pub fn downcast_ref<T: Ability>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    /// Mutably borrow the ability as its concrete type.
    pub fn downcast_mut<T: Ability>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut::<T>()
    }
}

// Allow a boxed ability to be wrapped like any other.
impl Ability for Box<dyn Ability> {
    fn customize(&mut self, tunables: &mut Tunables) {
        (**self).customize(tunables)
    }

    fn on_event(&mut self, tunables: &mut Tunables, event: &GameEvent) {
        (**self).on_event(tunables, event)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A zero-argument constructor for an ability.
///
/// Plain function pointers keep factories `Copy`, comparable, and usable in
/// `static` registration tables.
pub type AbilityFactory = fn() -> Box<dyn Ability>;

/// Factory for any ability with a [`Default`] value.
///
/// `default_factory::<MyAbility>` coerces to [`AbilityFactory`].
pub fn default_factory<A: Ability + Default>() -> Box<dyn Ability> {
    Box::new(A::default())
}
