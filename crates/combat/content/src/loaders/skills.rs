//! Skill catalog loader.

use std::path::Path;

use combat_core::{Skill, SkillId};

use crate::loaders::{LoadResult, read_file};

/// Loader for skill definitions from RON files.
///
/// RON format: `Vec<(SkillId, Skill)>`, in declaration order.
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(SkillId, Skill)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse skill definitions from RON source.
    pub fn parse(source: &str) -> LoadResult<Vec<(SkillId, Skill)>> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse skills RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{ComponentKind, DamageType, MpCost, SkillTarget, StatSource, StatusTarget};

    #[test]
    fn parses_a_full_skill() {
        let skills = SkillLoader::parse(
            r#"[
                ("frost_nova", (
                    name: "Frost Nova",
                    element: "ice",
                    category: "attack",
                    target: aoe,
                    mp_cost: flat(12.0),
                    components: [
                        (kind: damage, damage_type: magical, terms: [
                            (stat: "self_magic", coef: 1.3),
                            (stat: "constant", coef: 4.0),
                        ]),
                    ],
                    status_effects: [
                        (status: "chill", chance: 0.35, duration: 2),
                    ],
                    special_tags: ["sure_hit"],
                )),
                ("focus", (
                    name: "Focus",
                    target: caster,
                    mp_cost: all_current_mp,
                    components: [(kind: shield, terms: [(stat: "self_spent_mp", coef: 1.0)])],
                )),
            ]"#,
        )
        .unwrap();

        assert_eq!(skills.len(), 2);
        let (id, nova) = &skills[0];
        assert_eq!(id.as_str(), "frost_nova");
        assert_eq!(nova.element.as_str(), "ice");
        assert_eq!(nova.target, SkillTarget::Aoe);
        assert_eq!(nova.mp_cost, MpCost::Flat(12.0));
        assert_eq!(nova.components[0].kind, ComponentKind::Damage);
        assert_eq!(nova.components[0].damage_type, DamageType::Magical);
        assert_eq!(nova.components[0].terms[0].stat, StatSource::SelfMagic);
        assert_eq!(nova.status_effects[0].target, StatusTarget::Target);
        assert_eq!(nova.special_tags[0].as_str(), "sure_hit");

        let (_, focus) = &skills[1];
        assert_eq!(focus.target, SkillTarget::Caster);
        assert_eq!(focus.mp_cost, MpCost::AllCurrentMp);
        assert_eq!(focus.element.as_str(), "neutral");
    }

    #[test]
    fn unknown_stat_names_survive_parsing() {
        let skills = SkillLoader::parse(
            r#"[("luck", (name: "Luck", components: [(kind: damage, terms: [(stat: "self_luck", coef: 2.0)])]))]"#,
        )
        .unwrap();
        assert!(!skills[0].1.components[0].terms[0].stat.is_known());
    }

    #[test]
    fn malformed_source_is_an_error() {
        let err = SkillLoader::parse("[(\"x\", (name: 3))]").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse skills RON"));
    }
}
