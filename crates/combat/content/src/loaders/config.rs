//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::player::PlayerBase;

/// Top-level layout of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub combat: CombatConfig,
    #[serde(default)]
    pub player: PlayerBase,
}

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<ContentConfig> {
        toml::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Element, StatusId, TierId};

    #[test]
    fn empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.combat, CombatConfig::default());
        assert_eq!(config.player, PlayerBase::default());
    }

    #[test]
    fn nested_tables_fill_the_lookups() {
        let config = ConfigLoader::parse(
            r#"
            [combat]
            accuracy_min = 0.1

            [combat.element_multipliers.fire]
            nature = 1.5
            water = 0.5

            [combat.status_resistance.boss]
            stun = 0.0

            [player]
            name = "Aria"
            starting_skills = ["basic_attack"]

            [player.stats]
            max_hp = 90.0
            speed = 11.0
            "#,
        )
        .unwrap();

        let combat = &config.combat;
        assert_eq!(combat.accuracy_min, 0.1);
        assert_eq!(combat.shield_cap_growth, CombatConfig::DEFAULT_SHIELD_CAP_GROWTH);
        assert_eq!(
            combat.element_multiplier(&Element::new("fire"), &Element::new("water")),
            0.5
        );
        assert_eq!(
            combat.status_resistance(Some(&TierId::new("boss")), &StatusId::new("stun")),
            0.0
        );
        assert_eq!(config.player.name, "Aria");
        assert_eq!(config.player.level, 1);
        assert_eq!(config.player.stats.max_hp, 90.0);
        assert_eq!(config.player.stats.attack, 0.0);
    }
}
