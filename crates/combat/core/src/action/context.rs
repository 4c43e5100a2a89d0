//! Effect context threaded through one target's resolution.

use crate::env::CombatEnv;
use crate::state::{BattleState, Combatant, Side};

// ============================================================================
// Effect Context
// ============================================================================

/// Per-target scratch space for one action.
///
/// Created fresh for every target (and for every `after_resolve` tag). Special
/// tags read and write it; the hit check consumes the overrides; the damage
/// component records what it dealt so later hooks can react.
pub struct EffectContext<'a> {
    /// The acting combatant.
    pub attacker: Side,

    /// The combatant currently being resolved against.
    pub target: Side,

    /// Mutable encounter state.
    pub state: &'a mut BattleState,

    /// Definitions and configuration.
    pub env: CombatEnv<'a>,

    /// MP paid for this cast.
    pub spent_mp: f64,

    /// Damage after element and status multipliers, before shield.
    pub raw_damage: f64,

    /// Damage that actually reached HP.
    pub final_damage: f64,

    pub force_hit: bool,
    pub force_miss: bool,

    /// Lines produced by special tags, flushed after the target resolves.
    pub logs: Vec<String>,
}

impl<'a> EffectContext<'a> {
    pub fn new(
        attacker: Side,
        target: Side,
        state: &'a mut BattleState,
        env: CombatEnv<'a>,
        spent_mp: f64,
    ) -> Self {
        Self {
            attacker,
            target,
            state,
            env,
            spent_mp,
            raw_damage: 0.0,
            final_damage: 0.0,
            force_hit: false,
            force_miss: false,
            logs: Vec::new(),
        }
    }

    pub fn attacker(&self) -> &Combatant {
        self.state.combatant(self.attacker)
    }

    pub fn attacker_mut(&mut self) -> &mut Combatant {
        self.state.combatant_mut(self.attacker)
    }

    pub fn target(&self) -> &Combatant {
        self.state.combatant(self.target)
    }

    pub fn target_mut(&mut self) -> &mut Combatant {
        self.state.combatant_mut(self.target)
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }

    /// Takes the accumulated special tag lines.
    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }
}
