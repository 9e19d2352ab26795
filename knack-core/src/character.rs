//! Character identities.
//!
//! A [`Character`] names one kind of playable character. It is the key the
//! registry files abilities under, and it is what the host reports when an
//! avatar spawns (as a display string, see [`Character::as_str`]).

use crate::error::ParseCharacterError;
use std::{fmt, str::FromStr};

/// The stable identity of a character kind.
///
/// Every variant maps to exactly one display string. The mapping is fixed at
/// compile time and is the form hosts use when naming a spawned avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Character {
    /// "Kronk"
    Kronk,
    /// "Zoe"
    Zoe,
    /// "Jack Morgan"
    JackMorgan,
    /// "Mel"
    Mel,
    /// "Snake Shadow"
    SnakeShadow,
    /// "Bones"
    Bones,
    /// "Bernard"
    Bernard,
    /// "Grumbledorf"
    Wizard,
    /// "Pascal"
    Pascal,
    /// "Frosty"
    Frosty,
    /// "B-9000"
    Cyborg,
    /// "Pixel"
    Pixie,
    /// "Agent Johnson"
    Agent,
    /// "Taobao Mascot"
    TaobaoMascot,
    /// "Santa Claus"
    Santa,
    /// "Easter Bunny"
    Bunny,
}

impl Character {
    /// Every known character, in declaration order.
    pub const ALL: [Character; 16] = [
        Character::Kronk,
        Character::Zoe,
        Character::JackMorgan,
        Character::Mel,
        Character::SnakeShadow,
        Character::Bones,
        Character::Bernard,
        Character::Wizard,
        Character::Pascal,
        Character::Frosty,
        Character::Cyborg,
        Character::Pixie,
        Character::Agent,
        Character::TaobaoMascot,
        Character::Santa,
        Character::Bunny,
    ];

    /// The display string the host uses for this character.
    pub const fn as_str(self) -> &'static str {
        match self {
            Character::Kronk => "Kronk",
            Character::Zoe => "Zoe",
            Character::JackMorgan => "Jack Morgan",
            Character::Mel => "Mel",
            Character::SnakeShadow => "Snake Shadow",
            Character::Bones => "Bones",
            Character::Bernard => "Bernard",
            Character::Wizard => "Grumbledorf",
            Character::Pascal => "Pascal",
            Character::Frosty => "Frosty",
            Character::Cyborg => "B-9000",
            Character::Pixie => "Pixel",
            Character::Agent => "Agent Johnson",
            Character::TaobaoMascot => "Taobao Mascot",
            Character::Santa => "Santa Claus",
            Character::Bunny => "Easter Bunny",
        }
    }

    /// Look up a character by its display string.
    ///
    /// Matching is exact. Returns `None` for names that belong to no known
    /// character.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Character {
    type Err = ParseCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseCharacterError(s.to_owned()))
    }
}
