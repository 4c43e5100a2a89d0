//! Status definition loader.

use std::path::Path;

use combat_core::{StatusDefinition, StatusId};

use crate::loaders::{LoadResult, read_file};

/// Loader for status definitions from RON files.
///
/// RON format: `Vec<(StatusId, StatusDefinition)>`.
pub struct StatusLoader;

impl StatusLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<(StatusId, StatusDefinition)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<Vec<(StatusId, StatusDefinition)>> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse statuses RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::StatSource;

    #[test]
    fn omitted_modifiers_stay_unset() {
        let statuses = StatusLoader::parse(
            r#"[
                ("poison", (name: Some("Poison"), damage_per_turn: Some((stat: "target_max_hp", coef: 0.05)))),
                ("stun", (skip_chance: Some(1.0))),
            ]"#,
        )
        .unwrap();

        let (_, poison) = &statuses[0];
        assert_eq!(poison.name.as_deref(), Some("Poison"));
        assert_eq!(poison.damage_per_turn.as_ref().unwrap().stat, StatSource::TargetMaxHp);
        assert_eq!(poison.skip_chance, None);

        let (_, stun) = &statuses[1];
        assert_eq!(stun.skip_chance, Some(1.0));
        assert_eq!(stun.accuracy_multiplier, None);
    }
}
