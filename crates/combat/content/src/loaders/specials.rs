//! Special tag loader.
//!
//! Tags are written as `{hook, kind, params}` records and bound to
//! [`SpecialTag`] variants here, so an unknown hook or kind is caught with
//! the rest of the content problems instead of at battle time.

use std::path::Path;

use combat_core::{SpecialHook, SpecialId, SpecialKind, SpecialTag};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::validation::{IssueCode, ValidationReport};

/// Special tag as written in data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialSpec {
    pub hook: String,
    pub kind: String,
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl SpecialSpec {
    /// Resolves the spec to a tag, reporting anything that does not bind.
    pub fn bind(&self, id: &SpecialId, report: &mut ValidationReport) -> Option<SpecialTag> {
        let at = |field: &str| format!("specials.ron:{id}.{field}");

        let hook = match self.hook.as_str() {
            "pre_accuracy" => Some(SpecialHook::PreAccuracy),
            "per_target" => Some(SpecialHook::PerTarget),
            "after_resolve" => Some(SpecialHook::AfterResolve),
            other => {
                report.push(IssueCode::InvalidEnum, at("hook"), format!("unknown hook '{other}'"));
                None
            }
        };

        let mut param = |value: Option<f64>, field: &str| {
            if value.is_none() {
                report.push(
                    IssueCode::MissingField,
                    at(field),
                    format!("'{}' requires {field}", self.kind),
                );
            }
            value
        };

        let kind = match self.kind.as_str() {
            "force_hit" => Some(SpecialKind::ForceHit),
            "force_miss" => Some(SpecialKind::ForceMiss),
            "life_steal" => param(self.ratio, "ratio").map(|ratio| SpecialKind::LifeSteal { ratio }),
            "shield_cap_boost" => {
                param(self.amount, "amount").map(|amount| SpecialKind::ShieldCapBoost { amount })
            }
            other => {
                report.push(IssueCode::InvalidEnum, at("kind"), format!("unknown kind '{other}'"));
                None
            }
        };

        Some(SpecialTag::new(hook?, kind?))
    }
}

/// Loader for special tags from RON files.
///
/// RON format: `Vec<(SpecialId, SpecialSpec)>`.
pub struct SpecialLoader;

impl SpecialLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<(SpecialId, SpecialSpec)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(source: &str) -> LoadResult<Vec<(SpecialId, SpecialSpec)>> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse specials RON: {}", e))
    }

    /// Binds every spec, skipping (and reporting) the ones that do not bind.
    pub fn bind_all(
        specs: &[(SpecialId, SpecialSpec)],
        report: &mut ValidationReport,
    ) -> Vec<(SpecialId, SpecialTag)> {
        specs
            .iter()
            .filter_map(|(id, spec)| Some((id.clone(), spec.bind(id, report)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_every_kind() {
        let specs = SpecialLoader::parse(
            r#"[
                ("sure", (hook: "pre_accuracy", kind: "force_hit")),
                ("clumsy", (hook: "pre_accuracy", kind: "force_miss")),
                ("vampiric", (hook: "per_target", kind: "life_steal", ratio: Some(0.3))),
                ("bulwark", (hook: "after_resolve", kind: "shield_cap_boost", amount: Some(5.0))),
            ]"#,
        )
        .unwrap();
        let mut report = ValidationReport::new();

        let tags = SpecialLoader::bind_all(&specs, &mut report);

        assert!(report.is_empty());
        assert_eq!(tags.len(), 4);
        assert_eq!(
            tags[2].1,
            SpecialTag::new(SpecialHook::PerTarget, SpecialKind::LifeSteal { ratio: 0.3 })
        );
        assert_eq!(
            tags[3].1,
            SpecialTag::new(
                SpecialHook::AfterResolve,
                SpecialKind::ShieldCapBoost { amount: 5.0 }
            )
        );
    }

    #[test]
    fn unknown_kind_and_missing_params_are_reported() {
        let specs = SpecialLoader::parse(
            r#"[
                ("teleport", (hook: "per_target", kind: "blink")),
                ("leech", (hook: "per_target", kind: "life_steal")),
                ("early", (hook: "before_everything", kind: "force_hit")),
            ]"#,
        )
        .unwrap();
        let mut report = ValidationReport::new();

        let tags = SpecialLoader::bind_all(&specs, &mut report);

        assert!(tags.is_empty());
        let locations: Vec<&str> = report.issues().iter().map(|i| i.location.as_str()).collect();
        assert_eq!(
            locations,
            [
                "specials.ron:teleport.kind",
                "specials.ron:leech.ratio",
                "specials.ron:early.hook",
            ]
        );
    }
}
