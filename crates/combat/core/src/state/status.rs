//! Active status list for a combatant.
//!
//! Statuses are turn-counted: `remaining_turns` is decremented once per round
//! by [`StatusEffects::tick`]. A status applied with duration `D` stays active
//! for exactly `D` subsequent ticks before it is removed.

use super::ids::StatusId;

/// Ordered set of active statuses, at most one per [`StatusId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusEffects {
    effects: Vec<ActiveStatus>,
}

/// A single applied status with its remaining duration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveStatus {
    pub status_id: StatusId,
    pub remaining_turns: i32,
    /// Name of the combatant that applied it, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<String>,
}

impl ActiveStatus {
    pub fn new(status_id: StatusId, remaining_turns: i32, source: Option<String>) -> Self {
        Self {
            status_id,
            remaining_turns,
            source,
        }
    }
}

impl StatusEffects {
    /// Creates an empty status list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks if a status is present.
    pub fn has(&self, status_id: &StatusId) -> bool {
        self.effects.iter().any(|e| &e.status_id == status_id)
    }

    /// Returns the active instance of a status.
    pub fn get(&self, status_id: &StatusId) -> Option<&ActiveStatus> {
        self.effects.iter().find(|e| &e.status_id == status_id)
    }

    /// Adds a status with the given duration.
    ///
    /// If the status is already present its duration is extended to the
    /// longer of the two; magnitude never stacks.
    pub fn add(&mut self, status_id: StatusId, duration: i32, source: Option<String>) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.status_id == status_id) {
            existing.remaining_turns = existing.remaining_turns.max(duration);
            return;
        }

        self.effects.push(ActiveStatus::new(status_id, duration, source));
    }

    /// Removes a status immediately.
    pub fn remove(&mut self, status_id: &StatusId) {
        self.effects.retain(|e| &e.status_id != status_id);
    }

    /// Advances all durations by one round.
    ///
    /// Expired statuses (`remaining_turns <= 0`) are removed first, then every
    /// survivor is decremented.
    pub fn tick(&mut self) {
        self.effects.retain(|e| e.remaining_turns > 0);
        for effect in &mut self.effects {
            effect.remaining_turns -= 1;
        }
    }

    /// Removes every status.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Returns an iterator over all statuses in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveStatus> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poison() -> StatusId {
        StatusId::new("poison")
    }

    #[test]
    fn reapplication_keeps_longest_duration() {
        let mut statuses = StatusEffects::empty();
        statuses.add(poison(), 3, None);
        statuses.add(poison(), 1, Some("Slime".into()));
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses.get(&poison()).unwrap().remaining_turns, 3);

        statuses.add(poison(), 5, None);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses.get(&poison()).unwrap().remaining_turns, 5);
    }

    #[test]
    fn status_lasts_exactly_duration_ticks() {
        let mut statuses = StatusEffects::empty();
        statuses.add(poison(), 2, None);

        // 2 -> 1 -> 0 while still present, removed on the third tick.
        statuses.tick();
        assert!(statuses.has(&poison()));
        statuses.tick();
        assert!(statuses.has(&poison()));
        statuses.tick();
        assert!(!statuses.has(&poison()));
    }

    #[test]
    fn zero_duration_is_removed_on_first_tick() {
        let mut statuses = StatusEffects::empty();
        statuses.add(poison(), 0, None);
        assert!(statuses.has(&poison()));
        statuses.tick();
        assert!(statuses.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let mut statuses = StatusEffects::empty();
        statuses.add(StatusId::new("burn"), 2, None);
        statuses.add(poison(), 2, None);
        statuses.add(StatusId::new("burn"), 4, None);

        let ids: Vec<_> = statuses.iter().map(|s| s.status_id.as_str()).collect();
        assert_eq!(ids, ["burn", "poison"]);
    }
}
