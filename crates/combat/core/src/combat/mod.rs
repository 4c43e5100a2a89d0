//! Pure combat formulas: hit chance and damage mitigation.
//!
//! Nothing here touches battle state; the action pipeline feeds these
//! functions the numbers it reads from the combatants.
mod damage;
mod hit;

pub use damage::{defense_multiplier, mitigate};
pub use hit::{hit_chance, is_hit};
