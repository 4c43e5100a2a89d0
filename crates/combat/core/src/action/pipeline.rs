//! Action resolution pipeline.
//!
//! ## Execution Flow
//! 1. Escape: mark the attacker escaped and stop
//! 2. Status interrupt: a successful `skip_chance` roll consumes the action
//! 3. Cost: unaffordable skills fall back to the basic attack; pay MP
//! 4. For each target:
//!    - `pre_accuracy` tags
//!    - Hit check (overrides first, then the speed ratio roll)
//!    - On hit: components, status rolls, `per_target` tags
//! 5. `after_resolve` tags, once per tag, against the opponent

use super::components::apply_components;
use super::context::EffectContext;
use super::cost::{can_afford, mp_cost};
use super::targeting::select_targets;
use crate::combat::{hit_chance, is_hit};
use crate::engine::{BattleLog, Dice, RollKind};
use crate::env::{CombatEnv, Skill, SpecialHook, StatusTarget};
use crate::error::CombatError;
use crate::hooks;
use crate::state::{BattleState, Side, SkillId};

// ============================================================================
// Pipeline Orchestration
// ============================================================================

/// Resolves one action of `attacker` against the encounter.
///
/// Gameplay fallbacks (unaffordable skill, unknown status or tag, missing
/// table entries) are silent. The only failures are undefined skill ids.
///
/// # Errors
///
/// Returns `CombatError::SkillNotFound` if `skill_id` is not defined, or
/// `CombatError::BasicAttackMissing` if a fallback is needed and the basic
/// attack is not defined.
pub fn resolve_action(
    state: &mut BattleState,
    attacker: Side,
    skill_id: &SkillId,
    env: CombatEnv<'_>,
    dice: &mut Dice<'_>,
    log: &mut BattleLog,
) -> Result<(), CombatError> {
    let registry = env.registry();

    if env.config().is_escape(skill_id) {
        let actor = state.combatant_mut(attacker);
        actor.escaped = true;
        log.push(format!("{} fled the battle!", actor.name));
        return Ok(());
    }

    if registry.blocks_action(state.combatant(attacker), dice) {
        log.push(format!("{} is unable to act!", state.combatant(attacker).name));
        return Ok(());
    }

    let skill = pay_for(state, attacker, skill_id, env, log)?;
    let actor = state.combatant_mut(attacker);
    let spent_mp = mp_cost(skill, actor);
    actor.spend_mp(spent_mp);
    log.push(format!("{} uses {}!", actor.name, skill.name));

    for target in select_targets(skill, attacker) {
        resolve_target(state, attacker, target, skill, spent_mp, env, dice, log);
    }

    for tag_id in &skill.special_tags {
        let mut ctx = EffectContext::new(attacker, attacker.opponent(), state, env, spent_mp);
        hooks::execute(tag_id, SpecialHook::AfterResolve, &mut ctx);
        log.extend(ctx.take_logs());
    }

    Ok(())
}

/// Looks up the chosen skill, swapping in the basic attack if unaffordable.
fn pay_for<'e>(
    state: &BattleState,
    attacker: Side,
    skill_id: &SkillId,
    env: CombatEnv<'e>,
    log: &mut BattleLog,
) -> Result<&'e Skill, CombatError> {
    let actor = state.combatant(attacker);
    let chosen = env.skill(skill_id)?;
    if can_afford(chosen, actor) {
        return Ok(chosen);
    }

    let fallback = env.basic_attack()?;
    tracing::debug!(
        combatant = %actor.name,
        skill = %skill_id,
        mp = actor.current_mp,
        "unaffordable skill, using basic attack"
    );
    log.push(format!(
        "{} lacks the MP for {} and uses {} instead!",
        actor.name, chosen.name, fallback.name
    ));
    Ok(fallback)
}

// ============================================================================
// Per-Target Resolution
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn resolve_target(
    state: &mut BattleState,
    attacker: Side,
    target: Side,
    skill: &Skill,
    spent_mp: f64,
    env: CombatEnv<'_>,
    dice: &mut Dice<'_>,
    log: &mut BattleLog,
) {
    let mut ctx = EffectContext::new(attacker, target, state, env, spent_mp);
    hooks::run(&skill.special_tags, SpecialHook::PreAccuracy, &mut ctx);

    if !check_hit(&ctx, dice) {
        log.push(format!("{}'s attack missed!", ctx.attacker().name));
        return;
    }

    log.push(format!("{}'s attack hit!", ctx.attacker().name));
    apply_components(skill, &mut ctx, log);
    roll_status_effects(skill, &mut ctx, dice, log);
    hooks::run(&skill.special_tags, SpecialHook::PerTarget, &mut ctx);
    log.extend(ctx.take_logs());
}

/// Overrides win without consuming a roll; `force_hit` beats `force_miss`.
fn check_hit(ctx: &EffectContext<'_>, dice: &mut Dice<'_>) -> bool {
    if ctx.force_hit {
        return true;
    }
    if ctx.force_miss {
        return false;
    }

    let attacker = ctx.attacker();
    let chance = hit_chance(
        attacker.stats.speed,
        ctx.target().stats.speed,
        ctx.env.registry().accuracy_multiplier(attacker),
        ctx.env.config().accuracy_min,
    );
    let roll = dice.roll(RollKind::Hit);
    tracing::debug!(chance, roll, "hit check");
    is_hit(chance, roll)
}

/// Rolls each status effect of the skill.
///
/// A chance scaled to zero or below by tier resistance is reported as an
/// immunity and never rolled. A failed roll leaves no log line.
fn roll_status_effects(
    skill: &Skill,
    ctx: &mut EffectContext<'_>,
    dice: &mut Dice<'_>,
    log: &mut BattleLog,
) {
    let registry = ctx.env.registry();
    let config = ctx.env.config();
    let source = ctx.attacker().name.clone();

    for effect in &skill.status_effects {
        let side = match effect.target {
            StatusTarget::Caster => ctx.attacker,
            StatusTarget::Target => ctx.target,
        };
        let recipient = ctx.state.combatant_mut(side);
        let status_name = registry.display_name(&effect.status);
        let chance =
            effect.chance * config.status_resistance(recipient.tier.as_ref(), &effect.status);

        if chance <= 0.0 {
            log.push(format!("{} is immune to {}!", recipient.name, status_name));
            continue;
        }

        let roll = dice.roll(RollKind::StatusApply);
        if roll > chance {
            tracing::debug!(status = %effect.status, chance, roll, "status roll failed");
            continue;
        }

        if registry.apply_status(recipient, &effect.status, effect.duration, Some(&source)) {
            log.push(format!("{} is afflicted with {}!", recipient.name, status_name));
        }
    }
}
