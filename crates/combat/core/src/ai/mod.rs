//! Enemy skill selection.
//!
//! Weighted random pick over the skills the enemy can currently afford.

use crate::action::can_afford;
use crate::engine::{Dice, RollKind};
use crate::env::CombatEnv;
use crate::error::CombatError;
use crate::state::{Combatant, SkillId};

/// Picks a skill for `entity`.
///
/// Each affordable known skill is weighted by its configured weight; a
/// uniform draw over the total selects the first skill whose cumulative
/// weight reaches it. With nothing affordable the basic attack is chosen
/// regardless of its cost.
///
/// # Errors
///
/// Returns `CombatError::SkillNotFound` if a known skill is not defined.
pub fn choose_skill(
    entity: &Combatant,
    env: CombatEnv<'_>,
    dice: &mut Dice<'_>,
) -> Result<SkillId, CombatError> {
    let config = env.config();
    let mut options = Vec::with_capacity(entity.skills.len());
    for known in &entity.skills {
        let affordable =
            config.is_escape(&known.id) || can_afford(env.skill(&known.id)?, entity);
        if affordable {
            options.push(known);
        }
    }

    let Some(last) = options.last() else {
        tracing::debug!(combatant = %entity.name, "no affordable skill, using basic attack");
        return Ok(config.basic_attack.clone());
    };

    let total: f64 = options.iter().map(|known| f64::from(known.weight)).sum();
    let pick = dice.uniform(RollKind::AiPick, total);

    let mut cumulative = 0.0;
    for known in &options {
        cumulative += f64::from(known.weight);
        if pick <= cumulative {
            tracing::debug!(combatant = %entity.name, skill = %known.id, pick, total, "skill chosen");
            return Ok(known.id.clone());
        }
    }
    Ok(last.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::env::{Catalog, MpCost, RngOracle, Skill};
    use crate::stats::Stats;

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog
            .insert_skill("basic_attack", Skill::new("Attack"))
            .insert_skill("bite", Skill::new("Bite"))
            .insert_skill("howl", Skill::new("Howl"))
            .insert_skill("frenzy", Skill::new("Frenzy").with_cost(MpCost::Flat(30.0)));
        catalog
    }

    fn wolf() -> Combatant {
        Combatant::new("Wolf", 2, Stats::new(40.0, 10.0, 8.0, 0.0, 2.0, 1.0, 12.0))
    }

    #[test]
    fn draw_selects_by_cumulative_weight() {
        let catalog = catalog();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let wolf = wolf().with_skill("bite", 1).with_skill("howl", 3);

        // unit 0.0 -> pick 0 -> first skill
        let zero = Fixed(0);
        let mut dice = Dice::new(&zero, 0);
        assert_eq!(choose_skill(&wolf, env, &mut dice).unwrap(), SkillId::new("bite"));

        // unit 0.5 -> pick 2 of 4 -> second skill
        let half = Fixed(1 << 31);
        let mut dice = Dice::new(&half, 0);
        assert_eq!(choose_skill(&wolf, env, &mut dice).unwrap(), SkillId::new("howl"));
    }

    #[test]
    fn unaffordable_skills_are_never_picked() {
        let catalog = catalog();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let wolf = wolf().with_skill("frenzy", 100).with_skill("bite", 1);

        let high = Fixed(u32::MAX);
        let mut dice = Dice::new(&high, 0);
        assert_eq!(choose_skill(&wolf, env, &mut dice).unwrap(), SkillId::new("bite"));
    }

    #[test]
    fn falls_back_to_basic_attack() {
        let catalog = catalog();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let wolf = wolf().with_skill("frenzy", 1);

        let rng = Fixed(0);
        let mut dice = Dice::new(&rng, 0);
        assert_eq!(
            choose_skill(&wolf, env, &mut dice).unwrap(),
            SkillId::new("basic_attack")
        );
        assert_eq!(dice.nonce(), 0);
    }

    #[test]
    fn undefined_skill_is_an_error() {
        let catalog = catalog();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let wolf = wolf().with_skill("moonbeam", 1);

        let rng = Fixed(0);
        let mut dice = Dice::new(&rng, 0);
        assert!(matches!(
            choose_skill(&wolf, env, &mut dice),
            Err(CombatError::SkillNotFound(id)) if id.as_str() == "moonbeam"
        ));
    }
}
