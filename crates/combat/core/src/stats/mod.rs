//! Stat model - the numeric profile of a combatant.
//!
//! A [`Stats`] value is the *effective* profile used by the resolver for a
//! whole turn. It is only replaced wholesale (equipment recompute, level
//! scaling); the one exception is `max_shield`, which shield grants and the
//! `shield_cap_boost` special grow in place.
//!
//! Pools (current HP/MP/shield) live on [`crate::state::Combatant`], not here.

/// Offense, defense and pool maximums of a combatant.
///
/// All fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub max_hp: f64,
    pub max_mp: f64,
    pub attack: f64,
    pub magic: f64,
    pub defense: f64,
    pub magic_resist: f64,
    pub speed: f64,
    pub max_shield: f64,
}

impl Stats {
    /// Creates a profile with no shield capacity.
    pub const fn new(
        max_hp: f64,
        max_mp: f64,
        attack: f64,
        magic: f64,
        defense: f64,
        magic_resist: f64,
        speed: f64,
    ) -> Self {
        Self {
            max_hp,
            max_mp,
            attack,
            magic,
            defense,
            magic_resist,
            speed,
            max_shield: 0.0,
        }
    }

    /// Sets the shield capacity (builder pattern).
    #[must_use]
    pub const fn with_max_shield(mut self, max_shield: f64) -> Self {
        self.max_shield = max_shield;
        self
    }

    /// Returns `self + growth × steps`, field by field.
    ///
    /// Used for level scaling of enemy templates.
    #[must_use]
    pub fn grown_by(&self, growth: &Stats, steps: u32) -> Self {
        let n = f64::from(steps);
        Self {
            max_hp: self.max_hp + growth.max_hp * n,
            max_mp: self.max_mp + growth.max_mp * n,
            attack: self.attack + growth.attack * n,
            magic: self.magic + growth.magic * n,
            defense: self.defense + growth.defense * n,
            magic_resist: self.magic_resist + growth.magic_resist * n,
            speed: self.speed + growth.speed * n,
            max_shield: self.max_shield + growth.max_shield * n,
        }
    }

    /// Returns true if every field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.max_hp,
            self.max_mp,
            self.attack,
            self.magic,
            self.defense,
            self.magic_resist,
            self.speed,
            self.max_shield,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}
