//! Target selection.

use crate::env::{Skill, SkillTarget};
use crate::state::Side;

/// Sides a skill resolves against, in order.
///
/// Self-targeted skills hit the caster; everything else, including area
/// skills, hits the single opponent.
pub fn select_targets(skill: &Skill, attacker: Side) -> Vec<Side> {
    match skill.target {
        SkillTarget::Caster => vec![attacker],
        SkillTarget::Single | SkillTarget::Aoe => vec![attacker.opponent()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_skills_collapse_to_the_opponent() {
        let nova = Skill::new("Nova").with_target(SkillTarget::Aoe);
        assert_eq!(select_targets(&nova, Side::Enemy), [Side::Player]);
    }

    #[test]
    fn self_skills_target_the_caster() {
        let mend = Skill::new("Mend").with_target(SkillTarget::Caster);
        assert_eq!(select_targets(&mend, Side::Player), [Side::Player]);
    }
}
