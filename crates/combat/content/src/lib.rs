//! Data-driven combat content and its loaders.
//!
//! This crate is the only place combat definitions are read from disk:
//! - Skill, status and special tag definitions (RON)
//! - Enemy templates (RON)
//! - Combat configuration and the player's starting profile (TOML)
//!
//! Everything is validated as a whole before a battle can start; the engine
//! in `combat-core` assumes the definitions it is handed are consistent.

pub mod player;
pub mod validation;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use player::PlayerBase;
pub use validation::{ContentError, ContentValidator, IssueCode, ValidationIssue, ValidationReport};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentConfig, ContentSources, EnemyLoader, LoadResult, SkillLoader,
    SpecialLoader, SpecialSpec, StatusLoader,
};
