//! Error infrastructure for combat-core.
//!
//! Gameplay problems (unaffordable skills, unknown stat names, unknown
//! statuses, missing table entries) are resolved with silent defaults and never
//! surface here. Errors are reserved for definitions the engine cannot do
//! without.

use crate::state::SkillId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: a player action naming a skill that does not exist
    Validation,
    /// Definitions are inconsistent; the encounter cannot continue.
    ///
    /// Examples: the configured basic attack is not defined
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Errors raised while resolving an encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A skill id has no definition.
    #[error("skill not found: {0}")]
    SkillNotFound(SkillId),

    /// The configured basic attack has no definition.
    #[error("basic attack skill not defined: {0}")]
    BasicAttackMissing(SkillId),
}

impl CombatError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SkillNotFound(_) => ErrorSeverity::Validation,
            Self::BasicAttackMissing(_) => ErrorSeverity::Fatal,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SkillNotFound(_) => "COMBAT_SKILL_NOT_FOUND",
            Self::BasicAttackMissing(_) => "COMBAT_BASIC_ATTACK_MISSING",
        }
    }
}
