//! In-memory definition tables implementing every lookup oracle.

use std::collections::HashMap;

use super::skills::{Skill, SkillOracle};
use super::specials::{SpecialOracle, SpecialTag};
use super::status::{StatusDefinition, StatusOracle};
use crate::state::{SkillId, SpecialId, StatusId};

/// Skill, status and special tag definitions keyed by id.
///
/// Loaded once before any encounter and only read afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    skills: HashMap<SkillId, Skill>,
    statuses: HashMap<StatusId, StatusDefinition>,
    specials: HashMap<SpecialId, SpecialTag>,
}

impl Catalog {
    pub fn new(
        skills: HashMap<SkillId, Skill>,
        statuses: HashMap<StatusId, StatusDefinition>,
        specials: HashMap<SpecialId, SpecialTag>,
    ) -> Self {
        Self {
            skills,
            statuses,
            specials,
        }
    }

    pub fn insert_skill(&mut self, id: impl Into<SkillId>, skill: Skill) -> &mut Self {
        self.skills.insert(id.into(), skill);
        self
    }

    pub fn insert_status(
        &mut self,
        id: impl Into<StatusId>,
        definition: StatusDefinition,
    ) -> &mut Self {
        self.statuses.insert(id.into(), definition);
        self
    }

    pub fn insert_special(&mut self, id: impl Into<SpecialId>, tag: SpecialTag) -> &mut Self {
        self.specials.insert(id.into(), tag);
        self
    }

    pub fn skills(&self) -> impl Iterator<Item = (&SkillId, &Skill)> {
        self.skills.iter()
    }

    pub fn statuses(&self) -> impl Iterator<Item = (&StatusId, &StatusDefinition)> {
        self.statuses.iter()
    }

    pub fn specials(&self) -> impl Iterator<Item = (&SpecialId, &SpecialTag)> {
        self.specials.iter()
    }
}

impl SkillOracle for Catalog {
    fn skill(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.get(id)
    }
}

impl StatusOracle for Catalog {
    fn status(&self, id: &StatusId) -> Option<&StatusDefinition> {
        self.statuses.get(id)
    }
}

impl SpecialOracle for Catalog {
    fn special(&self, id: &SpecialId) -> Option<&SpecialTag> {
        self.specials.get(id)
    }
}
