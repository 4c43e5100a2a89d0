//! Linear stat formulas.

use super::context::EffectContext;
use crate::env::{StatSource, Term};

/// `Σ coef × value(stat)` over all terms.
pub fn evaluate(terms: &[Term], ctx: &EffectContext<'_>) -> f64 {
    terms
        .iter()
        .map(|term| term.coef * stat_value(&term.stat, ctx))
        .sum()
}

/// Current value of a stat source. Unknown sources read as 0.
pub fn stat_value(stat: &StatSource, ctx: &EffectContext<'_>) -> f64 {
    let caster = ctx.attacker();
    let target = ctx.target();
    match stat {
        StatSource::Constant => 1.0,
        StatSource::SelfAttack => caster.stats.attack,
        StatSource::SelfMagic => caster.stats.magic,
        StatSource::SelfMaxHp => caster.stats.max_hp,
        StatSource::SelfMissingHp => caster.missing_hp(),
        StatSource::TargetHp => target.current_hp,
        StatSource::TargetMaxHp => target.stats.max_hp,
        StatSource::TargetMissingHp => target.missing_hp(),
        StatSource::SelfSpentMp => ctx.spent_mp,
        StatSource::Unknown(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::env::{Catalog, CombatEnv};
    use crate::state::{BattleState, Combatant, Side};
    use crate::stats::Stats;

    #[test]
    fn terms_are_summed() {
        let catalog = Catalog::default();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);

        let mut mage = Combatant::new("Mage", 1, Stats::new(80.0, 40.0, 4.0, 20.0, 0.0, 0.0, 5.0));
        mage.current_hp = 60.0;
        let mut golem =
            Combatant::new("Golem", 1, Stats::new(300.0, 0.0, 15.0, 0.0, 30.0, 0.0, 2.0));
        golem.current_hp = 200.0;
        let mut state = BattleState::new(mage, golem);
        let ctx = EffectContext::new(Side::Player, Side::Enemy, &mut state, env, 12.0);

        let terms = [
            Term::new(StatSource::SelfMagic, 1.5),
            Term::new(StatSource::Constant, 4.0),
            Term::new(StatSource::SelfMissingHp, 0.5),
            Term::new(StatSource::TargetMissingHp, 0.25),
            Term::new(StatSource::SelfSpentMp, 2.0),
        ];
        // 30 + 4 + 10 + 25 + 24
        assert_eq!(evaluate(&terms, &ctx), 93.0);
    }

    #[test]
    fn unknown_stat_contributes_nothing() {
        let catalog = Catalog::default();
        let config = CombatConfig::default();
        let env = CombatEnv::from_catalog(&catalog, &config);
        let stats = Stats::new(10.0, 0.0, 10.0, 0.0, 0.0, 0.0, 1.0);
        let mut state = BattleState::new(Combatant::new("A", 1, stats), Combatant::new("B", 1, stats));
        let ctx = EffectContext::new(Side::Player, Side::Enemy, &mut state, env, 0.0);

        let terms = [
            Term::new(StatSource::parse("self_luck"), 100.0),
            Term::new(StatSource::SelfAttack, 1.0),
        ];
        assert_eq!(evaluate(&terms, &ctx), 10.0);
    }
}
