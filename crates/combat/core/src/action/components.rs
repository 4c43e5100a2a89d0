//! Skill component effects: damage, heal, shield.

use super::context::EffectContext;
use super::formula::evaluate;
use crate::combat::mitigate;
use crate::engine::BattleLog;
use crate::env::{ComponentKind, Skill, SkillComponent};

/// Applies every component of `skill` to the context target, in order.
pub(super) fn apply_components(skill: &Skill, ctx: &mut EffectContext<'_>, log: &mut BattleLog) {
    for component in &skill.components {
        apply_component(component, skill, ctx, log);
    }
}

fn apply_component(
    component: &SkillComponent,
    skill: &Skill,
    ctx: &mut EffectContext<'_>,
    log: &mut BattleLog,
) {
    let amount = evaluate(&component.terms, ctx);
    match component.kind {
        ComponentKind::Damage => apply_damage(amount, component, skill, ctx, log),
        ComponentKind::Heal => {
            let amount = amount.max(0.0);
            let target = ctx.target_mut();
            target.restore_hp(amount);
            log.push(format!("{} recovers {:.1} HP!", target.name, amount));
        }
        ComponentKind::Shield => {
            let amount = amount.max(0.0);
            let growth = ctx.env.config().shield_cap_growth;
            let target = ctx.target_mut();
            target.grow_shield_cap(amount * growth);
            target.add_shield(amount);
            log.push(format!("{} gains a {:.1} shield!", target.name, amount));
        }
    }
}

/// Element and status multipliers, then shield, then defense.
fn apply_damage(
    amount: f64,
    component: &SkillComponent,
    skill: &Skill,
    ctx: &mut EffectContext<'_>,
    log: &mut BattleLog,
) {
    let element = ctx
        .env
        .config()
        .element_multiplier(&skill.element, &ctx.target().element);
    let taken = ctx.env.registry().damage_taken_multiplier(ctx.target());
    // Negative formulas deal nothing; they never heal or feed the shield.
    let raw = (amount * element * taken).max(0.0);
    ctx.raw_damage = raw;

    let target = ctx.target_mut();
    let absorbed = target.absorb_with_shield(raw);
    if absorbed > 0.0 {
        log.push(format!("{}'s shield absorbs {:.1} damage!", target.name, absorbed));
    }

    let dealt = mitigate(raw - absorbed, component.damage_type, &target.stats);
    target.lose_hp(dealt);
    log.push(format!("{} takes {:.1} damage!", target.name, dealt));
    if !target.is_alive() {
        log.push(format!("{} is defeated!", target.name));
    }

    tracing::debug!(raw, absorbed, dealt, element, taken, "damage applied");
    ctx.final_damage = dealt;
}
