//! Frosty: throws ice bombs.

use knack_core::{Ability, BombType, GameEvent, Tunables};

/// Frosty's ability.
///
/// Swaps the avatar's bombs for ice bombs at spawn and keeps count of double
/// jumps. Other events are ignored.
#[derive(Debug, Clone, Default)]
pub struct Frosty {
    double_jumps: u32,
}

impl Frosty {
    /// Number of double jumps seen since spawn.
    pub fn double_jumps(&self) -> u32 {
        self.double_jumps
    }
}

impl Ability for Frosty {
    fn customize(&mut self, tunables: &mut Tunables) {
        tunables.bomb_type = BombType::Ice;
    }

    fn on_event(&mut self, _tunables: &mut Tunables, event: &GameEvent) {
        match event {
            GameEvent::DoubleJump => {
                self.double_jumps += 1;

                #[cfg(feature = "tracing")]
                tracing::info!(count = self.double_jumps, "frosty double jumped");
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "Frosty"
    }
}

#[cfg(feature = "inventory")]
crate::register_ability!(knack_core::Character::Frosty, Frosty);
