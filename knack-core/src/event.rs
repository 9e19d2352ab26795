//! Gameplay events delivered to attached abilities.

use std::fmt;

/// A discrete gameplay occurrence reported by the host.
///
/// Events are plain values: they carry no identity beyond their kind, are
/// consumed by at most one ability and then dropped. New kinds are added as
/// new variants; abilities match only the kinds they care about and fall
/// through a `_ => {}` arm for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GameEvent {
    /// The avatar jumped twice in quick succession.
    DoubleJump,
    /// The avatar punched twice in quick succession.
    DoublePunch,
    /// The avatar pressed pickup twice in quick succession.
    DoublePickup,
}

impl GameEvent {
    /// A stable snake-case label for the event kind.
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::DoubleJump => "double_jump",
            GameEvent::DoublePunch => "double_punch",
            GameEvent::DoublePickup => "double_pickup",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
