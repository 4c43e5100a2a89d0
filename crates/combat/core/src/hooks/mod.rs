//! Special tag dispatcher.
//!
//! A skill lists special tag ids; at each [`SpecialHook`] point the resolver
//! hands every id to [`execute`], which runs the tag only if it is declared
//! for that hook. Effects are a closed set ([`SpecialKind`]) bound to ids when
//! content is loaded.
use crate::action::EffectContext;
use crate::env::{SpecialHook, SpecialKind};
use crate::state::SpecialId;

/// Runs one tag if it is bound to `hook`. Unknown ids are ignored.
pub fn execute(tag_id: &SpecialId, hook: SpecialHook, ctx: &mut EffectContext<'_>) {
    let Some(tag) = ctx.env.special(tag_id) else {
        tracing::debug!(tag = %tag_id, "ignoring unknown special tag");
        return;
    };
    if tag.hook != hook {
        return;
    }
    tracing::debug!(tag = %tag_id, %hook, "special tag fired");
    apply(tag.kind, ctx);
}

/// Runs every tag of a skill for one hook, in declaration order.
pub fn run(tags: &[SpecialId], hook: SpecialHook, ctx: &mut EffectContext<'_>) {
    for tag_id in tags {
        execute(tag_id, hook, ctx);
    }
}

fn apply(kind: SpecialKind, ctx: &mut EffectContext<'_>) {
    match kind {
        SpecialKind::ForceHit => ctx.force_hit = true,
        SpecialKind::ForceMiss => ctx.force_miss = true,
        SpecialKind::LifeSteal { ratio } => {
            let amount = (ctx.final_damage * ratio).max(0.0);
            let attacker = ctx.attacker_mut();
            attacker.restore_hp(amount);
            let line = format!("{} drains {:.1} HP!", attacker.name, amount);
            ctx.log(line);
        }
        SpecialKind::ShieldCapBoost { amount } => {
            let attacker = ctx.attacker_mut();
            attacker.grow_shield_cap(amount);
            let line = format!("{}'s maximum shield rises by {:.0}!", attacker.name, amount);
            ctx.log(line);
        }
    }
}
