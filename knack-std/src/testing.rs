//! Testing utilities for Knack.
//!
//! Registry factories are plain `fn` pointers, so test abilities cannot
//! capture shared state. Instead they record what happened to them; tests
//! read it back through [`Avatar::ability_as`](knack_core::Avatar::ability_as).
//!
//! - [`RecordingAbility`]: records every hook call in order
//! - [`CountingAbility`]: counts events of a single kind

use knack_core::{Ability, GameEvent, Tunables};

// ============================================================================
// Recording Ability
// ============================================================================

/// A hook call observed by [`RecordingAbility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// `customize` ran.
    Customize,
    /// `on_event` ran with this event.
    Event(GameEvent),
}

/// An ability that records every hook call it receives.
///
/// # Example
///
/// ```rust
/// use knack_core::{Avatar, Character, GameEvent, default_factory};
/// use knack_std::{Dispatcher, Registry, testing::{Call, RecordingAbility}};
///
/// let mut registry = Registry::new();
/// registry.register(Character::Mel, default_factory::<RecordingAbility>);
/// let dispatcher = Dispatcher::new(registry);
///
/// let mut avatar = Avatar::new("Mel");
/// dispatcher.on_spawn(&mut avatar);
/// dispatcher.on_event(&mut avatar, &GameEvent::DoublePunch);
///
/// let recorder = avatar.ability_as::<RecordingAbility>().unwrap();
/// assert_eq!(recorder.calls(), &[Call::Customize, Call::Event(GameEvent::DoublePunch)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingAbility {
    calls: Vec<Call>,
}

impl RecordingAbility {
    /// Create a new recording ability.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// How many times `customize` ran.
    pub fn customize_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Customize))
            .count()
    }

    /// The events received, in delivery order.
    pub fn events(&self) -> Vec<GameEvent> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Event(event) => Some(*event),
                Call::Customize => None,
            })
            .collect()
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Ability for RecordingAbility {
    fn customize(&mut self, _tunables: &mut Tunables) {
        self.calls.push(Call::Customize);
    }

    fn on_event(&mut self, _tunables: &mut Tunables, event: &GameEvent) {
        self.calls.push(Call::Event(*event));
    }
}

// ============================================================================
// Counting Ability
// ============================================================================

/// An ability that counts events of one kind and ignores the rest.
///
/// The [`Default`] value counts [`GameEvent::DoubleJump`].
#[derive(Debug, Clone)]
pub struct CountingAbility {
    kind: GameEvent,
    count: usize,
}

impl CountingAbility {
    /// Count events equal to `kind`.
    pub fn new(kind: GameEvent) -> Self {
        Self { kind, count: 0 }
    }

    /// The number of matching events received.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for CountingAbility {
    fn default() -> Self {
        Self::new(GameEvent::DoubleJump)
    }
}

impl Ability for CountingAbility {
    fn customize(&mut self, _tunables: &mut Tunables) {}

    fn on_event(&mut self, _tunables: &mut Tunables, event: &GameEvent) {
        if *event == self.kind {
            self.count += 1;
        }
    }
}
