//! The mutable combat actor.

use super::ids::{Element, SkillId, TierId};
use super::status::StatusEffects;
use crate::stats::Stats;

/// A skill the combatant knows, with its AI selection weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownSkill {
    pub id: SkillId,
    #[cfg_attr(feature = "serde", serde(default = "KnownSkill::default_weight"))]
    pub weight: u32,
}

impl KnownSkill {
    pub const DEFAULT_WEIGHT: u32 = 1;

    pub fn new(id: impl Into<SkillId>, weight: u32) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    #[cfg(feature = "serde")]
    fn default_weight() -> u32 {
        Self::DEFAULT_WEIGHT
    }
}

impl From<SkillId> for KnownSkill {
    fn from(id: SkillId) -> Self {
        Self {
            id,
            weight: Self::DEFAULT_WEIGHT,
        }
    }
}

/// Runtime actor in an encounter.
///
/// Pools are kept within `[0, max]` by every mutator on this type. Shield
/// capacity (`stats.max_shield`) may grow during a battle; the current shield
/// never exceeds it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub stats: Stats,
    pub current_hp: f64,
    pub current_mp: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_shield: f64,
    #[cfg_attr(feature = "serde", serde(default = "Element::neutral"))]
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub statuses: StatusEffects,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<KnownSkill>,
    /// Set when the combatant used the escape action.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub escaped: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: Option<TierId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_reward: Option<u32>,
}

impl Combatant {
    /// Creates a combatant at full HP, MP and shield.
    pub fn new(name: impl Into<String>, level: u32, stats: Stats) -> Self {
        Self {
            name: name.into(),
            level,
            stats,
            current_hp: stats.max_hp,
            current_mp: stats.max_mp,
            current_shield: stats.max_shield,
            element: Element::neutral(),
            statuses: StatusEffects::empty(),
            skills: Vec::new(),
            escaped: false,
            tier: None,
            xp_reward: None,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.element = element.into();
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: impl Into<TierId>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    #[must_use]
    pub fn with_xp_reward(mut self, xp_reward: u32) -> Self {
        self.xp_reward = Some(xp_reward);
        self
    }

    #[must_use]
    pub fn with_skill(mut self, id: impl Into<SkillId>, weight: u32) -> Self {
        self.skills.push(KnownSkill::new(id, weight));
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = KnownSkill>) -> Self {
        self.skills.extend(skills);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// `max_hp - current_hp`.
    pub fn missing_hp(&self) -> f64 {
        self.stats.max_hp - self.current_hp
    }

    /// Selection weight of a known skill, defaulting to 1.
    pub fn skill_weight(&self, id: &SkillId) -> u32 {
        self.skills
            .iter()
            .find(|s| &s.id == id)
            .map_or(KnownSkill::DEFAULT_WEIGHT, |s| s.weight)
    }

    /// Loses HP, floored at zero. Returns the amount actually lost.
    pub fn lose_hp(&mut self, amount: f64) -> f64 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp - amount).max(0.0);
        before - self.current_hp
    }

    /// Restores HP, capped at `max_hp`. Returns the amount actually restored.
    pub fn restore_hp(&mut self, amount: f64) -> f64 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount).min(self.stats.max_hp);
        self.current_hp - before
    }

    /// Spends MP, floored at zero.
    pub fn spend_mp(&mut self, amount: f64) {
        self.current_mp = (self.current_mp - amount).max(0.0);
    }

    /// Restores MP, capped at `max_mp`.
    pub fn restore_mp(&mut self, amount: f64) {
        self.current_mp = (self.current_mp + amount).min(self.stats.max_mp);
    }

    /// Drains the shield by up to `amount`. Returns the amount absorbed.
    pub fn absorb_with_shield(&mut self, amount: f64) -> f64 {
        if self.current_shield <= 0.0 || amount <= 0.0 {
            return 0.0;
        }
        let absorbed = self.current_shield.min(amount);
        self.current_shield -= absorbed;
        absorbed
    }

    /// Adds shield, capped at the current `max_shield`.
    pub fn add_shield(&mut self, amount: f64) {
        self.current_shield = (self.current_shield + amount).min(self.stats.max_shield);
    }

    /// Moves the shield cap by `delta`, floored at zero. The current shield
    /// is clamped to the new cap.
    pub fn grow_shield_cap(&mut self, delta: f64) {
        self.stats.max_shield = (self.stats.max_shield + delta).max(0.0);
        self.current_shield = self.current_shield.min(self.stats.max_shield);
    }

    /// Replaces the stat profile and clamps pools to the new maximums.
    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = stats;
        self.current_hp = self.current_hp.clamp(0.0, stats.max_hp);
        self.current_mp = self.current_mp.clamp(0.0, stats.max_mp);
        self.current_shield = self.current_shield.clamp(0.0, stats.max_shield);
    }

    /// Refills all pools and clears per-encounter state.
    pub fn restore(&mut self) {
        self.current_hp = self.stats.max_hp;
        self.current_mp = self.stats.max_mp;
        self.current_shield = self.stats.max_shield;
        self.statuses.clear();
        self.escaped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Combatant {
        Combatant::new(
            "Knight",
            3,
            Stats::new(100.0, 30.0, 12.0, 4.0, 10.0, 5.0, 9.0).with_max_shield(20.0),
        )
    }

    #[test]
    fn starts_full() {
        let knight = knight();
        assert_eq!(knight.current_hp, 100.0);
        assert_eq!(knight.current_mp, 30.0);
        assert_eq!(knight.current_shield, 20.0);
        assert_eq!(knight.element, Element::neutral());
        assert!(knight.is_alive());
    }

    #[test]
    fn pools_stay_in_bounds() {
        let mut knight = knight();

        assert_eq!(knight.lose_hp(250.0), 100.0);
        assert_eq!(knight.current_hp, 0.0);
        assert!(!knight.is_alive());

        assert_eq!(knight.restore_hp(500.0), 100.0);
        assert_eq!(knight.current_hp, 100.0);

        knight.spend_mp(45.0);
        assert_eq!(knight.current_mp, 0.0);
        knight.restore_mp(99.0);
        assert_eq!(knight.current_mp, 30.0);

        assert_eq!(knight.absorb_with_shield(8.0), 8.0);
        assert_eq!(knight.absorb_with_shield(50.0), 12.0);
        assert_eq!(knight.absorb_with_shield(5.0), 0.0);
        knight.add_shield(100.0);
        assert_eq!(knight.current_shield, 20.0);
    }

    #[test]
    fn negative_damage_never_feeds_the_shield() {
        let mut knight = knight();
        assert_eq!(knight.absorb_with_shield(-8.0), 0.0);
        assert_eq!(knight.current_shield, 20.0);
    }

    #[test]
    fn shield_cap_never_goes_below_zero() {
        let mut knight = knight();
        knight.grow_shield_cap(-5.0);
        assert_eq!(knight.stats.max_shield, 15.0);
        assert_eq!(knight.current_shield, 15.0);

        knight.grow_shield_cap(-40.0);
        assert_eq!(knight.stats.max_shield, 0.0);
        assert_eq!(knight.current_shield, 0.0);

        knight.grow_shield_cap(6.0);
        assert_eq!(knight.stats.max_shield, 6.0);
        assert_eq!(knight.current_shield, 0.0);
    }

    #[test]
    fn replacing_stats_clamps_pools() {
        let mut knight = knight();
        knight.set_stats(Stats::new(60.0, 10.0, 1.0, 1.0, 1.0, 1.0, 1.0));
        assert_eq!(knight.current_hp, 60.0);
        assert_eq!(knight.current_mp, 10.0);
        assert_eq!(knight.current_shield, 0.0);
    }

    #[test]
    fn unknown_skill_weight_defaults_to_one() {
        let knight = knight().with_skill("cleave", 4);
        assert_eq!(knight.skill_weight(&SkillId::new("cleave")), 4);
        assert_eq!(knight.skill_weight(&SkillId::new("bash")), 1);
    }
}
