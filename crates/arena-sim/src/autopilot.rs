//! Automatic player decisions.
use combat_core::{ActionSource, CombatEnv, Combatant, Dice, SkillId, choose_skill};

/// Plays the player side by picking uniformly among its affordable skills.
///
/// Draws from its own [`Dice`], so the enemy's rolls are the same whatever
/// the autopilot picks.
pub struct AutoPilot<'a> {
    env: CombatEnv<'a>,
    dice: Dice<'a>,
}

impl<'a> AutoPilot<'a> {
    pub fn new(env: CombatEnv<'a>, dice: Dice<'a>) -> Self {
        Self { env, dice }
    }
}

impl ActionSource for AutoPilot<'_> {
    fn choose(&mut self, actor: &Combatant) -> SkillId {
        choose_skill(actor, self.env, &mut self.dice).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "autopilot falling back to basic attack");
            self.env.config().basic_attack.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Catalog, CombatConfig, MpCost, PcgRng, Skill, Stats};

    #[test]
    fn only_affordable_skills_are_picked() {
        let mut catalog = Catalog::default();
        catalog
            .insert_skill("basic_attack", Skill::new("Attack"))
            .insert_skill("meteor", Skill::new("Meteor").with_cost(MpCost::Flat(50.0)));
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let hero = Combatant::new("Hero", 1, Stats::new(50.0, 10.0, 5.0, 5.0, 1.0, 1.0, 5.0))
            .with_skill("basic_attack", 1)
            .with_skill("meteor", 1);

        let mut pilot = AutoPilot::new(env, Dice::new(&PcgRng, 11));
        for _ in 0..50 {
            assert_eq!(pilot.choose(&hero), SkillId::new("basic_attack"));
        }
    }

    #[test]
    fn undefined_skill_falls_back_to_basic_attack() {
        let catalog = Catalog::default();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let hero = Combatant::new("Hero", 1, Stats::default()).with_skill("nova", 1);

        let mut pilot = AutoPilot::new(env, Dice::new(&PcgRng, 0));
        assert_eq!(pilot.choose(&hero), SkillId::new("basic_attack"));
    }
}
