#![allow(dead_code)]

use knack::{
    Ability, Character, Dispatcher, GameEvent, Registry, Tunables, testing::RecordingAbility,
};
use std::cell::Cell;

// ============================================================================
// Factory bookkeeping
// ============================================================================

thread_local! {
    // Each test runs on its own thread, so counts never leak between tests.
    static BUILT: Cell<usize> = const { Cell::new(0) };
}

/// Factory that counts how many abilities it has built on this thread.
pub fn counted_recorder() -> Box<dyn Ability> {
    BUILT.with(|b| b.set(b.get() + 1));
    Box::new(RecordingAbility::new())
}

/// Abilities built by [`counted_recorder`] on this thread.
pub fn built() -> usize {
    BUILT.with(Cell::get)
}

// ============================================================================
// Test abilities
// ============================================================================

/// Doubles the bomb count and adds one hitpoint per double pickup.
#[derive(Default)]
pub struct Hoarder;

impl Ability for Hoarder {
    fn customize(&mut self, tunables: &mut Tunables) {
        tunables.bomb_count *= 2;
    }

    fn on_event(&mut self, tunables: &mut Tunables, event: &GameEvent) {
        if let GameEvent::DoublePickup = event {
            tunables.hitpoints_max += 1;
        }
    }
}

/// A dispatcher with only `factory` registered for `character`.
pub fn dispatcher_with(character: Character, factory: knack::AbilityFactory) -> Dispatcher {
    let mut registry = Registry::new();
    registry.register(character, factory);
    Dispatcher::new(registry)
}
