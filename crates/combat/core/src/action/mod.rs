//! Action resolution.
//!
//! [`resolve_action`] turns one chosen skill id into state changes and log
//! lines: escape and status interrupts, MP payment with the basic-attack
//! fallback, target selection, then per target the hit check, components,
//! status rolls and special tag hooks.
mod components;
mod context;
mod cost;
mod formula;
mod pipeline;
mod targeting;

pub use context::EffectContext;
pub use cost::{can_afford, mp_cost};
pub use formula::{evaluate, stat_value};
pub use pipeline::resolve_action;
pub use targeting::select_targets;

use crate::state::{Combatant, SkillId};

/// Supplies the player's skill choice each turn.
///
/// Implemented for any `FnMut(&Combatant) -> SkillId`, so a closure works as a
/// scripted or interactive source.
pub trait ActionSource {
    fn choose(&mut self, actor: &Combatant) -> SkillId;
}

impl<F> ActionSource for F
where
    F: FnMut(&Combatant) -> SkillId,
{
    fn choose(&mut self, actor: &Combatant) -> SkillId {
        self(actor)
    }
}
