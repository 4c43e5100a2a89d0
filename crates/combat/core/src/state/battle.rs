//! Encounter state: the two combatants addressed by side.

use super::combatant::Combatant;

/// Which combatant of the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The opposing side.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Both combatants of a single encounter.
///
/// The scheduler owns this for the encounter's duration; the resolver borrows
/// it mutably and addresses combatants by [`Side`].
#[derive(Clone, Debug, PartialEq)]
pub struct BattleState {
    pub player: Combatant,
    pub enemy: Combatant,
    /// Number of rounds started so far.
    pub round: u32,
}

impl BattleState {
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self {
            player,
            enemy,
            round: 0,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// True while both combatants are alive.
    pub fn both_alive(&self) -> bool {
        self.player.is_alive() && self.enemy.is_alive()
    }

    /// True once either combatant has escaped.
    pub fn anyone_escaped(&self) -> bool {
        self.player.escaped || self.enemy.escaped
    }

    /// Consumes the state, returning `(player, enemy)`.
    pub fn into_parts(self) -> (Combatant, Combatant) {
        (self.player, self.enemy)
    }
}
