//! Combat configuration and tunable parameters.

use std::collections::HashMap;

use crate::state::{Element, SkillId, StatusId, TierId};

/// Balance parameters shared by every encounter.
///
/// Missing table entries are neutral (multiplier 1.0), never errors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Floor applied to every computed hit chance.
    pub accuracy_min: f64,
    /// `element_multipliers[skill_element][target_element]`.
    pub element_multipliers: HashMap<Element, HashMap<Element, f64>>,
    /// `status_resistance[tier][status]` scales the chance of a status landing.
    pub status_resistance: HashMap<TierId, HashMap<StatusId, f64>>,
    /// Fraction of every shield grant added to the recipient's shield cap.
    pub shield_cap_growth: f64,
    /// Skill id that means "flee the encounter".
    pub escape_skill: SkillId,
    /// Skill used when the chosen one is unaffordable.
    pub basic_attack: SkillId,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACCURACY_MIN: f64 = 0.05;
    pub const DEFAULT_SHIELD_CAP_GROWTH: f64 = 0.1;
    pub const DEFAULT_ESCAPE_SKILL: &'static str = "escape";
    pub const DEFAULT_BASIC_ATTACK: &'static str = "basic_attack";

    pub fn new() -> Self {
        Self {
            accuracy_min: Self::DEFAULT_ACCURACY_MIN,
            element_multipliers: HashMap::new(),
            status_resistance: HashMap::new(),
            shield_cap_growth: Self::DEFAULT_SHIELD_CAP_GROWTH,
            escape_skill: SkillId::new(Self::DEFAULT_ESCAPE_SKILL),
            basic_attack: SkillId::new(Self::DEFAULT_BASIC_ATTACK),
        }
    }

    /// Damage multiplier of `attack` against `defend`, 1.0 when unlisted.
    pub fn element_multiplier(&self, attack: &Element, defend: &Element) -> f64 {
        self.element_multipliers
            .get(attack)
            .and_then(|row| row.get(defend))
            .copied()
            .unwrap_or(1.0)
    }

    /// Status chance multiplier for a tier, 1.0 when unlisted or tierless.
    pub fn status_resistance(&self, tier: Option<&TierId>, status: &StatusId) -> f64 {
        tier.and_then(|tier| self.status_resistance.get(tier))
            .and_then(|row| row.get(status))
            .copied()
            .unwrap_or(1.0)
    }

    #[must_use]
    pub fn with_accuracy_min(mut self, accuracy_min: f64) -> Self {
        self.accuracy_min = accuracy_min;
        self
    }

    #[must_use]
    pub fn with_element_multiplier(
        mut self,
        attack: impl Into<Element>,
        defend: impl Into<Element>,
        multiplier: f64,
    ) -> Self {
        self.element_multipliers
            .entry(attack.into())
            .or_default()
            .insert(defend.into(), multiplier);
        self
    }

    #[must_use]
    pub fn with_status_resistance(
        mut self,
        tier: impl Into<TierId>,
        status: impl Into<StatusId>,
        multiplier: f64,
    ) -> Self {
        self.status_resistance
            .entry(tier.into())
            .or_default()
            .insert(status.into(), multiplier);
        self
    }

    /// True if `id` is the escape action.
    pub fn is_escape(&self, id: &SkillId) -> bool {
        id == &self.escape_skill
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_entries_are_neutral() {
        let config = CombatConfig::new().with_element_multiplier("fire", "ice", 2.0);
        let fire = Element::new("fire");
        let ice = Element::new("ice");
        let water = Element::new("water");

        assert_eq!(config.element_multiplier(&fire, &ice), 2.0);
        assert_eq!(config.element_multiplier(&fire, &water), 1.0);
        assert_eq!(config.element_multiplier(&water, &fire), 1.0);
    }

    #[test]
    fn missing_resistance_entries_are_neutral() {
        let config = CombatConfig::new().with_status_resistance("boss", "stun", 0.0);
        let boss = TierId::new("boss");
        let stun = StatusId::new("stun");

        assert_eq!(config.status_resistance(Some(&boss), &stun), 0.0);
        assert_eq!(config.status_resistance(Some(&boss), &StatusId::new("poison")), 1.0);
        assert_eq!(config.status_resistance(Some(&TierId::new("normal")), &stun), 1.0);
        assert_eq!(config.status_resistance(None, &stun), 1.0);
    }

    #[test]
    fn defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.accuracy_min, 0.05);
        assert_eq!(config.shield_cap_growth, 0.1);
        assert!(config.is_escape(&SkillId::new("escape")));
        assert_eq!(config.basic_attack, SkillId::new("basic_attack"));
    }
}
