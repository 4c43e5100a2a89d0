//! Enemy templates scaled to a level at encounter start.

use crate::state::{Combatant, Element, KnownSkill, TierId};
use crate::stats::Stats;

/// Data template an enemy combatant is instantiated from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub tier: TierId,
    #[cfg_attr(feature = "serde", serde(default = "Element::neutral"))]
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_reward: u32,
    pub base_level: u32,
    pub base_stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth_per_level: Stats,
    pub skills: Vec<KnownSkill>,
}

impl EnemyTemplate {
    /// Stats at `level`: `base + growth × max(level - base_level, 0)`.
    pub fn stats_for_level(&self, level: u32) -> Stats {
        let steps = level.saturating_sub(self.base_level);
        self.base_stats.grown_by(&self.growth_per_level, steps)
    }

    /// Builds a combatant at `level` with full pools.
    pub fn instantiate(&self, level: u32) -> Combatant {
        Combatant::new(self.name.clone(), level, self.stats_for_level(level))
            .with_element(self.element.clone())
            .with_tier(self.tier.clone())
            .with_xp_reward(self.xp_reward)
            .with_skills(self.skills.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> EnemyTemplate {
        EnemyTemplate {
            id: "goblin".into(),
            name: "Goblin".into(),
            tier: TierId::new("normal"),
            element: Element::new("earth"),
            description: String::new(),
            xp_reward: 15,
            base_level: 2,
            base_stats: Stats::new(40.0, 10.0, 8.0, 2.0, 3.0, 1.0, 7.0).with_max_shield(5.0),
            growth_per_level: Stats::new(6.0, 1.0, 1.5, 0.0, 0.5, 0.5, 0.25),
            skills: vec![KnownSkill::new("basic_attack", 3), KnownSkill::new("stab", 1)],
        }
    }

    #[test]
    fn levels_below_base_use_base_stats() {
        let goblin = goblin();
        assert_eq!(goblin.stats_for_level(1), goblin.base_stats);
        assert_eq!(goblin.stats_for_level(2), goblin.base_stats);
    }

    #[test]
    fn levels_above_base_add_growth() {
        let stats = goblin().stats_for_level(4);
        assert_eq!(stats.max_hp, 52.0);
        assert_eq!(stats.attack, 11.0);
        assert_eq!(stats.speed, 7.5);
        assert_eq!(stats.max_shield, 5.0);
    }

    #[test]
    fn instance_is_full_and_tagged() {
        let goblin = goblin().instantiate(3);
        assert_eq!(goblin.level, 3);
        assert_eq!(goblin.current_hp, 46.0);
        assert_eq!(goblin.current_shield, 5.0);
        assert_eq!(goblin.tier, Some(TierId::new("normal")));
        assert_eq!(goblin.xp_reward, Some(15));
        assert_eq!(goblin.element, Element::new("earth"));
        assert_eq!(goblin.skills.len(), 2);
        assert_eq!(goblin.skills[0].weight, 3);
    }
}
