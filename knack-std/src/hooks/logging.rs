//! Logging decorator for abilities.

use knack_core::{Ability, GameEvent, Tunables};

/// Wraps an ability and logs both hooks before delegating.
///
/// Logging goes through `tracing` when the `tracing` feature is enabled and
/// is a no-op otherwise.
#[derive(Debug, Clone, Default)]
pub struct Logged<A> {
    inner: A,
}

impl<A: Ability> Logged<A> {
    /// Wrap `inner`.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// The wrapped ability.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Unwrap the ability.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: Ability> Ability for Logged<A> {
    fn customize(&mut self, tunables: &mut Tunables) {
        self.inner.customize(tunables);

        #[cfg(feature = "tracing")]
        tracing::info!(ability = self.inner.name(), ?tunables, "ability customized");
    }

    fn on_event(&mut self, tunables: &mut Tunables, event: &GameEvent) {
        #[cfg(feature = "tracing")]
        tracing::info!(ability = self.inner.name(), ?event, "ability received event");

        self.inner.on_event(tunables, event);
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Factory producing a [`Logged`] wrapper around `A::default()`.
///
/// `logged_factory::<MyAbility>` coerces to [`AbilityFactory`](knack_core::AbilityFactory).
pub fn logged_factory<A: Ability + Default>() -> Box<dyn Ability> {
    Box::new(Logged::new(A::default()))
}
