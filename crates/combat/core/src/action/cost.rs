//! MP costs.

use crate::env::{MpCost, Skill};
use crate::state::Combatant;

/// MP the caster would pay for `skill` right now.
pub fn mp_cost(skill: &Skill, caster: &Combatant) -> f64 {
    match skill.mp_cost {
        MpCost::Flat(amount) => amount,
        MpCost::AllCurrentMp => caster.current_mp,
    }
}

pub fn can_afford(skill: &Skill, caster: &Combatant) -> bool {
    mp_cost(skill, caster) <= caster.current_mp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stats;

    fn caster(mp: f64) -> Combatant {
        let mut c = Combatant::new("Caster", 1, Stats::new(10.0, 50.0, 1.0, 1.0, 0.0, 0.0, 1.0));
        c.current_mp = mp;
        c
    }

    #[test]
    fn flat_cost_needs_enough_mp() {
        let bolt = Skill::new("Bolt").with_cost(MpCost::Flat(10.0));
        assert!(can_afford(&bolt, &caster(10.0)));
        assert!(!can_afford(&bolt, &caster(9.5)));
    }

    #[test]
    fn all_current_mp_is_always_affordable() {
        let burst = Skill::new("Burst").with_cost(MpCost::AllCurrentMp);
        assert_eq!(mp_cost(&burst, &caster(37.0)), 37.0);
        assert!(can_afford(&burst, &caster(0.0)));
    }
}
