//! Enemy template loader.

use std::path::Path;

use combat_core::EnemyTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy templates from RON files.
///
/// RON format: `Vec<EnemyTemplate>`; each template carries its own id.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<Vec<EnemyTemplate>> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse enemies RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_default_to_one() {
        let enemies = EnemyLoader::parse(
            r#"[
                (
                    id: "bat",
                    name: "Cave Bat",
                    tier: "normal",
                    base_level: 1,
                    base_stats: (max_hp: 20.0, attack: 4.0, speed: 14.0),
                    growth_per_level: (max_hp: 3.0, attack: 0.5),
                    skills: [(id: "basic_attack"), (id: "screech", weight: 2)],
                ),
            ]"#,
        )
        .unwrap();

        let bat = &enemies[0];
        assert_eq!(bat.skills[0].weight, 1);
        assert_eq!(bat.skills[1].weight, 2);
        assert_eq!(bat.base_stats.defense, 0.0);
        assert_eq!(bat.element.as_str(), "neutral");
        assert_eq!(bat.stats_for_level(5).max_hp, 32.0);
    }
}
