//! Hit chance.

/// Probability that an attack connects.
///
/// `min(1, attacker_speed / defender_speed)` scaled by the attacker's status
/// accuracy multiplier and floored at `accuracy_min`. A defender with no
/// speed is always hit (before the multiplier).
pub fn hit_chance(
    attacker_speed: f64,
    defender_speed: f64,
    accuracy_multiplier: f64,
    accuracy_min: f64,
) -> f64 {
    let base = if defender_speed <= 0.0 {
        1.0
    } else {
        (attacker_speed / defender_speed).min(1.0)
    };
    (base * accuracy_multiplier).max(accuracy_min)
}

/// Hit when the unit roll falls strictly below the chance.
pub fn is_hit(chance: f64, roll: f64) -> bool {
    roll < chance
}
