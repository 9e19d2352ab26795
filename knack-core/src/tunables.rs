//! Avatar-owned gameplay parameters.

use std::fmt;

/// The kind of bomb an avatar throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BombType {
    /// Standard bomb.
    #[default]
    Normal,
    /// Freezes whatever it hits.
    Ice,
    /// Sticks to surfaces and players.
    Sticky,
    /// Explodes on contact.
    Impact,
    /// Arms on the ground and waits.
    LandMine,
    /// Large blast radius.
    Tnt,
}

impl BombType {
    /// The lower-case name of the bomb type.
    pub const fn as_str(self) -> &'static str {
        match self {
            BombType::Normal => "normal",
            BombType::Ice => "ice",
            BombType::Sticky => "sticky",
            BombType::Impact => "impact",
            BombType::LandMine => "land_mine",
            BombType::Tnt => "tnt",
        }
    }
}

impl fmt::Display for BombType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters an ability may adjust on the avatar it is attached to.
///
/// The host reads these back when the avatar acts; they are the only avatar
/// state an ability can reach.
#[derive(Debug, Clone, PartialEq)]
pub struct Tunables {
    /// Bomb thrown when the avatar bombs.
    pub bomb_type: BombType,
    /// How many bombs may be live at once.
    pub bomb_count: u32,
    /// Explosion radius multiplier.
    pub blast_radius: f32,
    /// Maximum hitpoints.
    pub hitpoints_max: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            bomb_type: BombType::Normal,
            bomb_count: 1,
            blast_radius: 2.0,
            hitpoints_max: 1000,
        }
    }
}
