//! Damage mitigation.

use crate::env::DamageType;
use crate::stats::Stats;

/// `100 / (100 + d)` for non-negative defense, 1.0 otherwise.
pub fn defense_multiplier(defense: f64) -> f64 {
    if defense >= 0.0 {
        100.0 / (100.0 + defense)
    } else {
        1.0
    }
}

/// Applies the defender's mitigation to post-shield damage.
///
/// True damage passes through untouched; physical damage is reduced by
/// `defense` and every other type by `magic_resist`. Never negative.
pub fn mitigate(damage: f64, damage_type: DamageType, defender: &Stats) -> f64 {
    let mitigated = match damage_type {
        DamageType::True => damage,
        DamageType::Physical => damage * defense_multiplier(defender.defense),
        DamageType::Magical => damage * defense_multiplier(defender.magic_resist),
    };
    mitigated.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Stats {
        Stats::new(100.0, 0.0, 0.0, 0.0, 100.0, 300.0, 1.0)
    }

    #[test]
    fn physical_uses_defense() {
        assert_eq!(mitigate(50.0, DamageType::Physical, &wall()), 25.0);
    }

    #[test]
    fn magical_uses_magic_resist() {
        assert_eq!(mitigate(40.0, DamageType::Magical, &wall()), 10.0);
    }

    #[test]
    fn true_damage_ignores_defenses() {
        assert_eq!(mitigate(40.0, DamageType::True, &wall()), 40.0);
    }

    #[test]
    fn negative_defense_does_not_amplify() {
        let mut stats = wall();
        stats.defense = -50.0;
        assert_eq!(mitigate(30.0, DamageType::Physical, &stats), 30.0);
    }

    #[test]
    fn result_is_floored_at_zero() {
        assert_eq!(mitigate(-5.0, DamageType::True, &wall()), 0.0);
    }
}
