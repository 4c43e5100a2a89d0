//! Special tag definitions.
//!
//! A special tag is a data-declared side effect bound to one hook point of
//! action resolution. The set of effect kinds is closed; the binding from tag
//! id to kind happens when content is loaded.

use crate::state::SpecialId;

/// Point in action resolution where a tag fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SpecialHook {
    /// Before the hit roll, once per target.
    PreAccuracy,
    /// After components and status rolls land on a target.
    PerTarget,
    /// Once per action, after every target.
    AfterResolve,
}

/// Effect of a special tag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialKind {
    /// The hit check always succeeds.
    ForceHit,
    /// The hit check always fails unless also forced to hit.
    ForceMiss,
    /// Heals the caster by `final_damage × ratio`.
    LifeSteal { ratio: f64 },
    /// Permanently raises the caster's shield capacity.
    ShieldCapBoost { amount: f64 },
}

/// A special tag definition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTag {
    pub hook: SpecialHook,
    pub kind: SpecialKind,
}

impl SpecialTag {
    pub const fn new(hook: SpecialHook, kind: SpecialKind) -> Self {
        Self { hook, kind }
    }
}

/// Read-only special tag lookup.
pub trait SpecialOracle: Send + Sync {
    fn special(&self, id: &SpecialId) -> Option<&SpecialTag>;
}
