//! Status effect definitions.

use super::skills::Term;
use crate::state::StatusId;

/// Data definition of a named status.
///
/// Every modifier is optional; a status with none of them is purely cosmetic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusDefinition {
    /// Display name; falls back to the id.
    pub name: Option<String>,
    /// Independent per-turn chance that the bearer loses its action.
    pub skip_chance: Option<f64>,
    /// Multiplies the bearer's hit chance.
    pub accuracy_multiplier: Option<f64>,
    /// Multiplies damage the bearer takes.
    pub damage_taken_multiplier: Option<f64>,
    /// End-of-turn damage. Only `target_max_hp` is a supported source.
    pub damage_per_turn: Option<Term>,
}

impl StatusDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skip_chance(mut self, chance: f64) -> Self {
        self.skip_chance = Some(chance);
        self
    }

    #[must_use]
    pub fn with_accuracy_multiplier(mut self, multiplier: f64) -> Self {
        self.accuracy_multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn with_damage_taken_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_taken_multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn with_damage_per_turn(mut self, term: Term) -> Self {
        self.damage_per_turn = Some(term);
        self
    }
}

/// Read-only status definition lookup.
pub trait StatusOracle: Send + Sync {
    fn status(&self, id: &StatusId) -> Option<&StatusDefinition>;
}
