//! Status registry: applies, ticks and queries active statuses.
//!
//! Definitions come from a [`StatusOracle`]; the active list lives on each
//! [`Combatant`]. Every query scans the active list and folds the matching
//! definition fields:
//!
//! | Query | Fold |
//! |-------|------|
//! | [`StatusRegistry::blocks_action`] | any independent `skip_chance` roll succeeds |
//! | [`StatusRegistry::accuracy_multiplier`] | product of `accuracy_multiplier` |
//! | [`StatusRegistry::damage_taken_multiplier`] | product of `damage_taken_multiplier` |
//! | [`StatusRegistry::apply_status_damage`] | each `damage_per_turn` hits in turn |
use crate::engine::{BattleLog, Dice, RollKind};
use crate::env::{StatSource, StatusDefinition, StatusOracle};
use crate::state::{ActiveStatus, Combatant, StatusId};

/// Read-only view over status definitions with the status rules attached.
#[derive(Clone, Copy)]
pub struct StatusRegistry<'a> {
    statuses: &'a dyn StatusOracle,
}

impl<'a> StatusRegistry<'a> {
    pub fn new(statuses: &'a dyn StatusOracle) -> Self {
        Self { statuses }
    }

    pub fn definition(&self, id: &StatusId) -> Option<&'a StatusDefinition> {
        self.statuses.status(id)
    }

    /// Display name of a status, falling back to its id.
    pub fn display_name<'b>(&self, id: &'b StatusId) -> &'b str
    where
        'a: 'b,
    {
        self.definition(id)
            .and_then(|def| def.name.as_deref())
            .unwrap_or(id.as_str())
    }

    /// Applies a status, refreshing to the longer duration if already present.
    ///
    /// Unknown ids are ignored. Returns true if the status is now active.
    pub fn apply_status(
        &self,
        target: &mut Combatant,
        id: &StatusId,
        duration: i32,
        source: Option<&str>,
    ) -> bool {
        if self.definition(id).is_none() {
            tracing::debug!(status = %id, "ignoring unknown status");
            return false;
        }
        target
            .statuses
            .add(id.clone(), duration, source.map(str::to_owned));
        true
    }

    /// Expires then decrements every active status.
    pub fn tick(&self, entity: &mut Combatant) {
        entity.statuses.tick();
    }

    /// Rolls every `skip_chance`; the first success blocks the action.
    pub fn blocks_action(&self, entity: &Combatant, dice: &mut Dice<'_>) -> bool {
        for (active, def) in self.active(entity) {
            let Some(chance) = def.skip_chance else {
                continue;
            };
            if dice.roll(RollKind::StatusSkip) < chance {
                tracing::debug!(
                    combatant = %entity.name,
                    status = %active.status_id,
                    "action skipped"
                );
                return true;
            }
        }
        false
    }

    pub fn accuracy_multiplier(&self, entity: &Combatant) -> f64 {
        self.active(entity)
            .filter_map(|(_, def)| def.accuracy_multiplier)
            .product()
    }

    pub fn damage_taken_multiplier(&self, entity: &Combatant) -> f64 {
        self.active(entity)
            .filter_map(|(_, def)| def.damage_taken_multiplier)
            .product()
    }

    /// Applies end-of-turn damage from every status that deals it.
    ///
    /// Only `target_max_hp` terms contribute; any other source deals 0. A
    /// line is logged for each damaging status even when the amount is 0.
    pub fn apply_status_damage(&self, entity: &mut Combatant, log: &mut BattleLog) {
        let ticks: Vec<(StatusId, f64)> = self
            .active(entity)
            .filter_map(|(active, def)| {
                let term = def.damage_per_turn.as_ref()?;
                let amount = match term.stat {
                    StatSource::TargetMaxHp => entity.stats.max_hp * term.coef,
                    _ => 0.0,
                };
                Some((active.status_id.clone(), amount.max(0.0)))
            })
            .collect();

        for (status_id, amount) in ticks {
            entity.lose_hp(amount);
            log.push(format!(
                "{} takes {:.1} damage from {}!",
                entity.name,
                amount,
                self.display_name(&status_id)
            ));
        }
    }

    fn active<'c>(
        &self,
        entity: &'c Combatant,
    ) -> impl Iterator<Item = (&'c ActiveStatus, &'a StatusDefinition)> + 'c
    where
        'a: 'c,
    {
        let statuses = self.statuses;
        entity
            .statuses
            .iter()
            .filter_map(move |active| Some((active, statuses.status(&active.status_id)?)))
    }
}

impl core::fmt::Debug for StatusRegistry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StatusRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::{RngOracle, Term};
    use crate::stats::Stats;

    struct Defs(HashMap<StatusId, StatusDefinition>);

    impl StatusOracle for Defs {
        fn status(&self, id: &StatusId) -> Option<&StatusDefinition> {
            self.0.get(id)
        }
    }

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn defs() -> Defs {
        let mut map = HashMap::new();
        map.insert(
            StatusId::new("stun"),
            StatusDefinition::new().with_skip_chance(1.0),
        );
        map.insert(
            StatusId::new("blind"),
            StatusDefinition::new().with_accuracy_multiplier(0.5),
        );
        map.insert(
            StatusId::new("dazzle"),
            StatusDefinition::new().with_accuracy_multiplier(0.8),
        );
        map.insert(
            StatusId::new("vulnerable"),
            StatusDefinition::new().with_damage_taken_multiplier(1.5),
        );
        let mut poison = StatusDefinition::new()
            .with_damage_per_turn(Term::new(StatSource::TargetMaxHp, 0.05));
        poison.name = Some("Poison".into());
        map.insert(StatusId::new("poison"), poison);
        map.insert(
            StatusId::new("hex"),
            StatusDefinition::new().with_damage_per_turn(Term::new(StatSource::SelfAttack, 1.0)),
        );
        Defs(map)
    }

    fn dummy() -> Combatant {
        Combatant::new("Dummy", 1, Stats::new(200.0, 0.0, 5.0, 0.0, 0.0, 0.0, 5.0))
    }

    #[test]
    fn unknown_status_is_ignored() {
        let defs = defs();
        let registry = StatusRegistry::new(&defs);
        let mut dummy = dummy();
        assert!(!registry.apply_status(&mut dummy, &StatusId::new("doom"), 3, None));
        assert!(dummy.statuses.is_empty());
    }

    #[test]
    fn reapplying_keeps_one_entry() {
        let defs = defs();
        let registry = StatusRegistry::new(&defs);
        let mut dummy = dummy();
        let blind = StatusId::new("blind");
        registry.apply_status(&mut dummy, &blind, 2, Some("Imp"));
        registry.apply_status(&mut dummy, &blind, 4, Some("Imp"));
        assert_eq!(dummy.statuses.len(), 1);
        assert_eq!(dummy.statuses.get(&blind).unwrap().remaining_turns, 4);
    }

    #[test]
    fn multipliers_multiply() {
        let defs = defs();
        let registry = StatusRegistry::new(&defs);
        let mut dummy = dummy();
        assert_eq!(registry.accuracy_multiplier(&dummy), 1.0);
        assert_eq!(registry.damage_taken_multiplier(&dummy), 1.0);

        registry.apply_status(&mut dummy, &StatusId::new("blind"), 2, None);
        registry.apply_status(&mut dummy, &StatusId::new("dazzle"), 2, None);
        registry.apply_status(&mut dummy, &StatusId::new("vulnerable"), 2, None);

        assert!((registry.accuracy_multiplier(&dummy) - 0.4).abs() < 1e-12);
        assert_eq!(registry.damage_taken_multiplier(&dummy), 1.5);
    }

    #[test]
    fn skip_chance_blocks_on_success() {
        let defs = defs();
        let registry = StatusRegistry::new(&defs);
        let rng = Fixed(u32::MAX);
        let mut dice = Dice::new(&rng, 0);
        let mut dummy = dummy();

        assert!(!registry.blocks_action(&dummy, &mut dice));
        registry.apply_status(&mut dummy, &StatusId::new("stun"), 1, None);
        assert!(registry.blocks_action(&dummy, &mut dice));
    }

    #[test]
    fn status_damage_uses_max_hp_only() {
        let defs = defs();
        let registry = StatusRegistry::new(&defs);
        let mut dummy = dummy();
        let mut log = BattleLog::new();
        registry.apply_status(&mut dummy, &StatusId::new("poison"), 2, None);
        registry.apply_status(&mut dummy, &StatusId::new("hex"), 2, None);

        registry.apply_status_damage(&mut dummy, &mut log);

        assert_eq!(dummy.current_hp, 190.0);
        assert_eq!(
            log.lines(),
            [
                "Dummy takes 10.0 damage from Poison!",
                "Dummy takes 0.0 damage from hex!",
            ]
        );
    }
}
