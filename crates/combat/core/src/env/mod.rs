//! Traits describing read-only combat data.
//!
//! Oracles expose skill, status and special tag definitions plus the RNG. The
//! [`CombatEnv`] aggregate bundles the definition oracles with the
//! configuration so the resolver can reach everything it needs without
//! coupling to a concrete store.
mod catalog;
mod enemies;
mod rng;
mod skills;
mod specials;
mod status;

pub use catalog::Catalog;
pub use enemies::EnemyTemplate;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use skills::{
    ComponentKind, DamageType, MpCost, Skill, SkillComponent, SkillOracle, SkillStatusEffect,
    SkillTarget, StatSource, StatusTarget, Term,
};
pub use specials::{SpecialHook, SpecialKind, SpecialOracle, SpecialTag};
pub use status::{StatusDefinition, StatusOracle};

use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::state::{SkillId, SpecialId, StatusId};
use crate::status::StatusRegistry;

/// Aggregates the read-only definitions an encounter needs.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    skills: &'a dyn SkillOracle,
    statuses: &'a dyn StatusOracle,
    specials: &'a dyn SpecialOracle,
    config: &'a CombatConfig,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        skills: &'a dyn SkillOracle,
        statuses: &'a dyn StatusOracle,
        specials: &'a dyn SpecialOracle,
        config: &'a CombatConfig,
    ) -> Self {
        Self {
            skills,
            statuses,
            specials,
            config,
        }
    }

    /// Uses one [`Catalog`] for every definition oracle.
    pub fn from_catalog(catalog: &'a Catalog, config: &'a CombatConfig) -> Self {
        Self::new(catalog, catalog, catalog, config)
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    /// Looks up a skill.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::SkillNotFound` if the id is not defined.
    pub fn skill(&self, id: &SkillId) -> Result<&'a Skill, CombatError> {
        self.skills.skill(id).ok_or_else(|| {
            tracing::warn!(skill = %id, "skill lookup failed");
            CombatError::SkillNotFound(id.clone())
        })
    }

    /// The configured basic attack skill.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::BasicAttackMissing` if the basic attack is not
    /// defined.
    pub fn basic_attack(&self) -> Result<&'a Skill, CombatError> {
        let id = &self.config.basic_attack;
        self.skills
            .skill(id)
            .ok_or_else(|| CombatError::BasicAttackMissing(id.clone()))
    }

    pub fn status(&self, id: &StatusId) -> Option<&'a StatusDefinition> {
        self.statuses.status(id)
    }

    /// Status rules over this environment's definitions.
    pub fn registry(&self) -> StatusRegistry<'a> {
        StatusRegistry::new(self.statuses)
    }

    pub fn special(&self, id: &SpecialId) -> Option<&'a SpecialTag> {
        self.specials.special(id)
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
