//! Terminal result of an encounter.

/// Who won an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Winner {
    Player(String),
    Enemy(String),
    /// The player fled.
    Escaped,
}

impl Winner {
    /// Label used in logs when the player flees.
    pub const ESCAPE_LABEL: &'static str = "escape";

    /// The winner's name, or [`Winner::ESCAPE_LABEL`].
    pub fn name(&self) -> &str {
        match self {
            Self::Player(name) | Self::Enemy(name) => name,
            Self::Escaped => Self::ESCAPE_LABEL,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player(_))
    }
}

impl core::fmt::Display for Winner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`super::BattleEngine::run_battle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: Winner,
    /// Rounds played.
    pub rounds: u32,
    pub logs: Vec<String>,
}
