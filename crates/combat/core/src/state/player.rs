//! Player-controlled combatant with persistent progression.

use std::collections::BTreeMap;

use super::combatant::{Combatant, KnownSkill};
use super::ids::SkillId;
use crate::stats::Stats;

/// The player's combatant plus progression that outlives a single encounter.
///
/// The resolver only ever sees [`Player::combatant`]; everything else is
/// carried for the persistence and equipment collaborators.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub combatant: Combatant,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: u32,
    /// Item id to count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: BTreeMap<String, u32>,
    /// Equipment slot to item id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked_skills: Vec<SkillId>,
    /// Stats before equipment bonuses.
    pub base_stats: Stats,
}

impl Player {
    /// Creates a level-`level` player at full pools with the given skills
    /// unlocked.
    pub fn new(
        name: impl Into<String>,
        level: u32,
        stats: Stats,
        unlocked_skills: impl IntoIterator<Item = SkillId>,
    ) -> Self {
        let unlocked_skills: Vec<SkillId> = unlocked_skills.into_iter().collect();
        let combatant = Combatant::new(name, level, stats)
            .with_skills(unlocked_skills.iter().cloned().map(KnownSkill::from));
        Self {
            combatant,
            xp: 0,
            gold: 0,
            inventory: BTreeMap::new(),
            equipment: BTreeMap::new(),
            unlocked_skills,
            base_stats: stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    /// Unlocks a skill once; returns false if it was already known.
    pub fn unlock_skill(&mut self, id: SkillId) -> bool {
        if self.unlocked_skills.contains(&id) {
            return false;
        }
        self.combatant.skills.push(KnownSkill::from(id.clone()));
        self.unlocked_skills.push(id);
        true
    }

    /// Credits the rewards of a defeated enemy and returns them.
    pub fn grant_rewards(&mut self, enemy: &Combatant) -> Rewards {
        let rewards = Rewards::for_enemy(enemy);
        self.xp = self.xp.saturating_add(rewards.xp);
        self.gold = self.gold.saturating_add(rewards.gold);
        rewards
    }
}

/// Spoils of a won encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rewards {
    pub xp: u32,
    pub gold: u32,
}

impl Rewards {
    /// XP per enemy level when the enemy declares no reward.
    pub const XP_PER_LEVEL: u32 = 5;

    /// `xp_reward` (or `level × 5`) XP, and 80% of that as gold, rounded down.
    pub fn for_enemy(enemy: &Combatant) -> Self {
        let xp = enemy
            .xp_reward
            .unwrap_or_else(|| enemy.level.saturating_mul(Self::XP_PER_LEVEL));
        let gold = u64::from(xp) * 4 / 5;
        Self {
            xp,
            gold: u32::try_from(gold).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocking_is_idempotent() {
        let mut player = Player::new(
            "Hero",
            1,
            Stats::new(80.0, 40.0, 10.0, 10.0, 5.0, 5.0, 10.0),
            [SkillId::new("basic_attack")],
        );
        assert!(player.unlock_skill(SkillId::new("fireball")));
        assert!(!player.unlock_skill(SkillId::new("fireball")));
        assert_eq!(player.unlocked_skills.len(), 2);
        assert_eq!(player.combatant.skills.len(), 2);
    }

    #[test]
    fn rewards_accumulate_xp_and_gold() {
        let mut player = Player::new("Hero", 1, Stats::default(), []);
        let slime = Combatant::new("Slime", 1, Stats::default()).with_xp_reward(12);

        assert_eq!(player.grant_rewards(&slime), Rewards { xp: 12, gold: 9 });
        player.grant_rewards(&slime);

        assert_eq!(player.xp, 24);
        assert_eq!(player.gold, 18);
    }

    #[test]
    fn missing_xp_reward_scales_with_level() {
        let mut player = Player::new("Hero", 1, Stats::default(), []);
        let wolf = Combatant::new("Wolf", 7, Stats::default());

        let rewards = player.grant_rewards(&wolf);

        assert_eq!(rewards, Rewards { xp: 35, gold: 28 });
        assert_eq!(player.xp, 35);
        assert_eq!(player.gold, 28);
    }
}
