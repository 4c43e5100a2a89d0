//! Skill definitions and the formula language they use.
//!
//! A skill is a list of [`SkillComponent`]s, each a linear formula over named
//! stat sources:
//!
//! ```text
//! amount = Σ coef × value(stat)
//! ```
//!
//! ## Examples
//!
//! ```ignore
//! // 120% of the caster's attack plus 5 flat
//! SkillComponent::damage(DamageType::Physical, vec![
//!     Term::new(StatSource::SelfAttack, 1.2),
//!     Term::new(StatSource::Constant, 5.0),
//! ])
//! ```

use std::str::FromStr;

use crate::state::{Element, SkillId, SpecialId, StatusId};

/// Named value a formula term reads.
///
/// Unrecognized names are kept as [`StatSource::Unknown`] and evaluate to 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatSource {
    /// The coefficient itself.
    Constant,
    SelfAttack,
    SelfMagic,
    SelfMaxHp,
    /// Caster's `max_hp - current_hp`.
    SelfMissingHp,
    TargetHp,
    TargetMaxHp,
    /// Target's `max_hp - current_hp`.
    TargetMissingHp,
    /// MP spent on the current cast.
    SelfSpentMp,
    #[strum(default)]
    Unknown(String),
}

impl StatSource {
    /// Parses a stat name; never fails.
    pub fn parse(name: &str) -> Self {
        // EnumString with a default variant is infallible.
        Self::from_str(name).unwrap_or_else(|_| Self::Unknown(name.to_owned()))
    }

    /// The data name of this source.
    pub fn name(&self) -> &str {
        match self {
            Self::Unknown(name) => name,
            known => known.as_ref(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatSource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// One weighted stat reference inside a formula.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub stat: StatSource,
    pub coef: f64,
}

impl Term {
    pub fn new(stat: StatSource, coef: f64) -> Self {
        Self { stat, coef }
    }
}

/// What a component does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ComponentKind {
    Damage,
    Heal,
    Shield,
}

/// Mitigation class of a damage component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    /// Mitigated by `defense`.
    #[default]
    Physical,
    /// Mitigated by `magic_resist`.
    Magical,
    /// Never mitigated. `true` is a RON keyword, so data files may spell it `pure`.
    #[cfg_attr(feature = "serde", serde(alias = "pure"))]
    True,
}

/// One effect unit of a skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillComponent {
    pub kind: ComponentKind,
    /// Only meaningful for [`ComponentKind::Damage`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: DamageType,
    pub terms: Vec<Term>,
}

impl SkillComponent {
    pub fn damage(damage_type: DamageType, terms: Vec<Term>) -> Self {
        Self {
            kind: ComponentKind::Damage,
            damage_type,
            terms,
        }
    }

    pub fn heal(terms: Vec<Term>) -> Self {
        Self {
            kind: ComponentKind::Heal,
            damage_type: DamageType::True,
            terms,
        }
    }

    pub fn shield(terms: Vec<Term>) -> Self {
        Self {
            kind: ComponentKind::Shield,
            damage_type: DamageType::True,
            terms,
        }
    }
}

/// Who a skill is aimed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SkillTarget {
    /// The caster.
    #[cfg_attr(feature = "serde", serde(alias = "self"))]
    Caster,
    /// The opponent.
    #[default]
    Single,
    /// Every opponent; one-on-one encounters resolve this to the opponent.
    Aoe,
}

/// Who a skill's status effect lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusTarget {
    #[cfg_attr(feature = "serde", serde(alias = "self"))]
    Caster,
    #[default]
    Target,
}

/// A status a skill may inflict on hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillStatusEffect {
    pub status: StatusId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: StatusTarget,
    /// Probability in `[0, 1]`.
    pub chance: f64,
    /// Duration in turns.
    pub duration: i32,
}

/// MP cost of a skill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MpCost {
    Flat(f64),
    /// Spend the caster's entire current MP.
    AllCurrentMp,
}

impl Default for MpCost {
    fn default() -> Self {
        Self::Flat(0.0)
    }
}

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    /// Display name used in battle logs.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "Element::neutral"))]
    pub element: Element,
    /// Free-form grouping (e.g. `attack`, `support`); not interpreted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: SkillTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_cost: MpCost,
    #[cfg_attr(feature = "serde", serde(default))]
    pub components: Vec<SkillComponent>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effects: Vec<SkillStatusEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_tags: Vec<SpecialId>,
}

impl Skill {
    /// Creates a free, neutral, single-target skill with no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: Element::neutral(),
            category: String::new(),
            target: SkillTarget::Single,
            mp_cost: MpCost::default(),
            components: Vec::new(),
            status_effects: Vec::new(),
            special_tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.element = element.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: SkillTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, mp_cost: MpCost) -> Self {
        self.mp_cost = mp_cost;
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: SkillComponent) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn with_status(
        mut self,
        status: impl Into<StatusId>,
        target: StatusTarget,
        chance: f64,
        duration: i32,
    ) -> Self {
        self.status_effects.push(SkillStatusEffect {
            status: status.into(),
            target,
            chance,
            duration,
        });
        self
    }

    #[must_use]
    pub fn with_special(mut self, tag: impl Into<SpecialId>) -> Self {
        self.special_tags.push(tag.into());
        self
    }
}

/// Read-only skill lookup.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &SkillId) -> Option<&Skill>;
}
