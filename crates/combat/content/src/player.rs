//! Starting profile for a new player.

use combat_core::{Player, SkillId, Stats};

/// The `[player]` section of the content configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBase {
    #[cfg_attr(feature = "serde", serde(default = "PlayerBase::default_name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "PlayerBase::default_level"))]
    pub level: u32,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_skills: Vec<SkillId>,
}

impl PlayerBase {
    pub const DEFAULT_NAME: &'static str = "Hero";

    fn default_name() -> String {
        Self::DEFAULT_NAME.to_owned()
    }

    fn default_level() -> u32 {
        1
    }

    /// Builds a fresh player at full pools.
    pub fn build(&self) -> Player {
        let mut player = Player::new(
            self.name.clone(),
            self.level,
            self.stats,
            self.starting_skills.iter().cloned(),
        );
        player.xp = self.xp;
        player.gold = self.gold;
        player
    }

    /// Like [`PlayerBase::build`] under a different name.
    pub fn build_named(&self, name: impl Into<String>) -> Player {
        let mut player = self.build();
        player.combatant.name = name.into();
        player
    }
}

impl Default for PlayerBase {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            level: Self::default_level(),
            stats: Stats::new(100.0, 30.0, 10.0, 10.0, 5.0, 5.0, 10.0),
            xp: 0,
            gold: 0,
            starting_skills: Vec::new(),
        }
    }
}
