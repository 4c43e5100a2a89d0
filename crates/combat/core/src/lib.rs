//! Deterministic turn-based combat rules shared by every front end.
//!
//! `combat-core` resolves one-on-one encounters whose capabilities (damage
//! formulas, status effects, elemental interactions, special hooks) are defined
//! entirely by external data. All state mutation flows through
//! [`engine::BattleEngine`]; definitions are read through the oracle traits in
//! [`env`], and the only source of randomness is an injected [`env::RngOracle`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod hooks;
pub mod state;
pub mod stats;
pub mod status;

pub use action::{ActionSource, EffectContext, resolve_action};
pub use ai::choose_skill;
pub use config::CombatConfig;
pub use engine::{BattleEngine, BattleLog, BattleOutcome, Dice, RollKind, Winner};
pub use env::{
    Catalog, CombatEnv, ComponentKind, DamageType, EnemyTemplate, MpCost, PcgRng, RngOracle,
    Skill, SkillComponent, SkillOracle, SkillStatusEffect, SkillTarget, SpecialHook, SpecialKind,
    SpecialOracle, SpecialTag, StatSource, StatusDefinition, StatusOracle, StatusTarget, Term,
    compute_seed,
};
pub use error::{CombatError, ErrorSeverity};
pub use state::{
    ActiveStatus, BattleState, Combatant, Element, KnownSkill, Player, Side, SkillId, SpecialId,
    Rewards, StatusEffects, StatusId, TierId,
};
pub use stats::Stats;
pub use status::StatusRegistry;
