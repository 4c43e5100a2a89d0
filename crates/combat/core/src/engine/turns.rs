//! Acting order within a round.

use crate::state::{BattleState, Side};

/// Sides ordered by speed, fastest first. Ties keep the player first.
pub fn turn_order(state: &BattleState) -> [Side; 2] {
    let mut order = [Side::Player, Side::Enemy];
    // Stable sort, so equal speeds keep enumeration order.
    order.sort_by(|a, b| {
        let a = state.combatant(*a).stats.speed;
        let b = state.combatant(*b).stats.speed;
        b.total_cmp(&a)
    });
    order
}
