//! Runtime combat state.
//!
//! - [`Combatant`]: the mutable actor (pools, statuses, known skills)
//! - [`StatusEffects`]: the per-combatant list of active statuses
//! - [`Player`]: a combatant plus persistent progression
//! - [`BattleState`]: both combatants of one encounter, addressed by [`Side`]
mod battle;
mod combatant;
mod ids;
mod player;
mod status;

pub use battle::{BattleState, Side};
pub use combatant::{Combatant, KnownSkill};
pub use ids::{Element, SkillId, SpecialId, StatusId, TierId};
pub use player::{Player, Rewards};
pub use status::{ActiveStatus, StatusEffects};
