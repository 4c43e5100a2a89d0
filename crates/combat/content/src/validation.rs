//! Whole-content validation.
//!
//! Loaders parse each file on its own; [`ContentValidator`] then checks the
//! definitions against each other and collects every problem into a
//! [`ValidationReport`] instead of stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use combat_core::{
    CombatConfig, EnemyTemplate, MpCost, Skill, SkillId, SpecialId, SpecialKind, SpecialTag,
    StatSource, StatusDefinition, StatusId, Stats,
};

use crate::player::PlayerBase;

/// Stable identifier of a kind of content problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueCode {
    MissingField,
    InvalidEnum,
    DuplicateId,
    SkillRef,
    SpecialTagRef,
    StatusRef,
    ChanceOutOfRange,
    DurationOutOfRange,
    InvalidValue,
    GrowthNegative,
    EmptyComponents,
}

impl IssueCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "E1001",
            Self::InvalidEnum => "E1003",
            Self::DuplicateId => "E1004",
            Self::SkillRef => "E2001",
            Self::SpecialTagRef => "E2005",
            Self::StatusRef => "E2006",
            Self::ChanceOutOfRange => "E3001",
            Self::DurationOutOfRange => "E3002",
            Self::InvalidValue => "E3003",
            Self::GrowthNegative => "E3004",
            Self::EmptyComponents => "E4001",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content problem: `code: location - message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// `file:path`, e.g. `skills.ron:fireball.status_effects[0].chance`.
    pub location: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.code, self.location, self.message)
    }
}

/// Every issue found in one validation pass, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        code: IssueCode,
        location: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.issues.push(ValidationIssue {
            code,
            location: location.into(),
            message: message.into(),
        });
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True if any issue carries `code`.
    pub fn contains(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }

    /// `Ok` when clean, otherwise the whole report as an error.
    pub fn into_result(self) -> Result<(), ContentError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Content that cannot be used to run battles.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content validation failed with {count} issue(s):\n{0}", count = .0.len())]
    Validation(ValidationReport),
}

impl ContentError {
    pub fn report(&self) -> &ValidationReport {
        match self {
            Self::Validation(report) => report,
        }
    }
}

const SKILLS_FILE: &str = "skills.ron";
const STATUSES_FILE: &str = "statuses.ron";
const SPECIALS_FILE: &str = "specials.ron";
const ENEMIES_FILE: &str = "enemies.ron";
const CONFIG_FILE: &str = "config.toml";

/// Cross-checks a full set of definitions.
#[derive(Clone, Copy, Debug)]
pub struct ContentValidator<'a> {
    pub skills: &'a [(SkillId, Skill)],
    pub statuses: &'a [(StatusId, StatusDefinition)],
    pub specials: &'a [(SpecialId, SpecialTag)],
    pub enemies: &'a [EnemyTemplate],
    pub config: &'a CombatConfig,
    pub player: &'a PlayerBase,
}

impl ContentValidator<'_> {
    /// Runs every check, appending findings to `report`.
    pub fn validate(&self, report: &mut ValidationReport) {
        let skill_ids = unique_ids(SKILLS_FILE, self.skills.iter().map(|(id, _)| id.as_str()), report);
        let status_ids =
            unique_ids(STATUSES_FILE, self.statuses.iter().map(|(id, _)| id.as_str()), report);
        let special_ids =
            unique_ids(SPECIALS_FILE, self.specials.iter().map(|(id, _)| id.as_str()), report);

        for (id, skill) in self.skills {
            self.check_skill(id, skill, &status_ids, &special_ids, report);
        }
        self.check_basic_attack(report);
        for (id, status) in self.statuses {
            check_status(id, status, report);
        }
        for (id, tag) in self.specials {
            check_special(id, tag, report);
        }

        unique_ids(ENEMIES_FILE, self.enemies.iter().map(|e| e.id.as_str()), report);
        for enemy in self.enemies {
            self.check_enemy(enemy, &skill_ids, report);
        }

        self.check_config(report);
        self.check_player(&skill_ids, report);
    }

    fn check_skill(
        &self,
        id: &SkillId,
        skill: &Skill,
        status_ids: &HashSet<&str>,
        special_ids: &HashSet<&str>,
        report: &mut ValidationReport,
    ) {
        let at = |path: &str| format!("{SKILLS_FILE}:{id}.{path}");

        if skill.name.trim().is_empty() {
            report.push(IssueCode::MissingField, at("name"), "missing name");
        }
        if let MpCost::Flat(cost) = skill.mp_cost
            && !(cost.is_finite() && cost >= 0.0)
        {
            report.push(IssueCode::InvalidValue, at("mp_cost"), "mp_cost must be >= 0");
        }
        if skill.components.is_empty() {
            report.push(
                IssueCode::EmptyComponents,
                at("components"),
                "skill must have at least one component",
            );
        }
        for (i, component) in skill.components.iter().enumerate() {
            for (j, term) in component.terms.iter().enumerate() {
                if !term.coef.is_finite() {
                    report.push(
                        IssueCode::InvalidValue,
                        at(&format!("components[{i}].terms[{j}].coef")),
                        "coef must be finite",
                    );
                }
                if let StatSource::Unknown(name) = &term.stat {
                    tracing::warn!(skill = %id, stat = %name, "unknown stat source evaluates to 0");
                }
            }
        }
        for (i, effect) in skill.status_effects.iter().enumerate() {
            if !(0.0..=1.0).contains(&effect.chance) {
                report.push(
                    IssueCode::ChanceOutOfRange,
                    at(&format!("status_effects[{i}].chance")),
                    format!("chance {} must be in [0, 1]", effect.chance),
                );
            }
            if effect.duration < 0 {
                report.push(
                    IssueCode::DurationOutOfRange,
                    at(&format!("status_effects[{i}].duration")),
                    format!("duration {} must be >= 0", effect.duration),
                );
            }
            if !status_ids.contains(effect.status.as_str()) {
                report.push(
                    IssueCode::StatusRef,
                    at(&format!("status_effects[{i}].status")),
                    format!("unknown status '{}'", effect.status),
                );
            }
        }
        for (i, tag) in skill.special_tags.iter().enumerate() {
            if !special_ids.contains(tag.as_str()) {
                report.push(
                    IssueCode::SpecialTagRef,
                    at(&format!("special_tags[{i}]")),
                    format!("unknown special tag '{tag}'"),
                );
            }
        }
    }

    fn check_basic_attack(&self, report: &mut ValidationReport) {
        let id = &self.config.basic_attack;
        match self.skills.iter().find(|(skill_id, _)| skill_id == id) {
            None => report.push(
                IssueCode::SkillRef,
                format!("{CONFIG_FILE}:combat.basic_attack"),
                format!("basic attack skill '{id}' is not defined"),
            ),
            Some((_, skill)) if skill.mp_cost != MpCost::Flat(0.0) => report.push(
                IssueCode::InvalidValue,
                format!("{SKILLS_FILE}:{id}.mp_cost"),
                "the basic attack must be free",
            ),
            Some(_) => {}
        }
    }

    fn check_enemy(
        &self,
        enemy: &EnemyTemplate,
        skill_ids: &HashSet<&str>,
        report: &mut ValidationReport,
    ) {
        let at = |path: &str| format!("{ENEMIES_FILE}:{}.{path}", enemy.id);

        if enemy.name.trim().is_empty() {
            report.push(IssueCode::MissingField, at("name"), "missing name");
        }
        check_stats(&enemy.base_stats, &at("base_stats"), report);
        if !enemy.growth_per_level.is_valid() {
            report.push(
                IssueCode::GrowthNegative,
                at("growth_per_level"),
                "growth must be non-negative",
            );
        }
        if enemy.skills.is_empty() {
            report.push(IssueCode::MissingField, at("skills"), "enemy has no skills");
        }
        for (i, known) in enemy.skills.iter().enumerate() {
            if !skill_ids.contains(known.id.as_str()) && !self.config.is_escape(&known.id) {
                report.push(
                    IssueCode::SkillRef,
                    at(&format!("skills[{i}]")),
                    format!("unknown skill '{}'", known.id),
                );
            }
        }
    }

    fn check_config(&self, report: &mut ValidationReport) {
        let at = |path: &str| format!("{CONFIG_FILE}:combat.{path}");
        let config = self.config;

        if !(0.0..=1.0).contains(&config.accuracy_min) {
            report.push(
                IssueCode::ChanceOutOfRange,
                at("accuracy_min"),
                "accuracy_min must be in [0, 1]",
            );
        }
        if !(config.shield_cap_growth.is_finite() && config.shield_cap_growth >= 0.0) {
            report.push(
                IssueCode::InvalidValue,
                at("shield_cap_growth"),
                "shield_cap_growth must be >= 0",
            );
        }
        for (attack, row) in &config.element_multipliers {
            for (defend, value) in row {
                if !(value.is_finite() && *value >= 0.0) {
                    report.push(
                        IssueCode::InvalidValue,
                        at(&format!("element_multipliers.{attack}.{defend}")),
                        "element multiplier must be >= 0",
                    );
                }
            }
        }
        for (tier, row) in &config.status_resistance {
            for (status, value) in row {
                if !(value.is_finite() && *value >= 0.0) {
                    report.push(
                        IssueCode::InvalidValue,
                        at(&format!("status_resistance.{tier}.{status}")),
                        "status resistance must be >= 0",
                    );
                }
            }
        }
    }

    fn check_player(&self, skill_ids: &HashSet<&str>, report: &mut ValidationReport) {
        check_stats(&self.player.stats, &format!("{CONFIG_FILE}:player.stats"), report);
        for (i, id) in self.player.starting_skills.iter().enumerate() {
            if !skill_ids.contains(id.as_str()) {
                report.push(
                    IssueCode::SkillRef,
                    format!("{CONFIG_FILE}:player.starting_skills[{i}]"),
                    format!("unknown skill '{id}'"),
                );
            }
        }
    }
}

/// Collects ids, reporting blanks and duplicates.
fn unique_ids<'a>(
    file: &str,
    ids: impl Iterator<Item = &'a str>,
    report: &mut ValidationReport,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            report.push(IssueCode::MissingField, format!("{file}:id"), "id must not be blank");
        } else if !seen.insert(id) {
            report.push(IssueCode::DuplicateId, format!("{file}:{id}"), format!("duplicate id '{id}'"));
        }
    }
    seen
}

fn check_status(id: &StatusId, status: &StatusDefinition, report: &mut ValidationReport) {
    let at = |path: &str| format!("{STATUSES_FILE}:{id}.{path}");

    if let Some(chance) = status.skip_chance
        && !(0.0..=1.0).contains(&chance)
    {
        report.push(IssueCode::ChanceOutOfRange, at("skip_chance"), "skip_chance must be in [0, 1]");
    }
    for (field, value) in [
        ("accuracy_multiplier", status.accuracy_multiplier),
        ("damage_taken_multiplier", status.damage_taken_multiplier),
    ] {
        if let Some(value) = value
            && !(value.is_finite() && value >= 0.0)
        {
            report.push(IssueCode::InvalidValue, at(field), format!("{field} must be >= 0"));
        }
    }
    if let Some(term) = &status.damage_per_turn {
        if term.stat != StatSource::TargetMaxHp {
            tracing::warn!(
                status = %id,
                stat = %term.stat.name(),
                "only target_max_hp drives damage_per_turn; this status deals 0"
            );
        }
        if !(term.coef.is_finite() && term.coef >= 0.0) {
            report.push(IssueCode::InvalidValue, at("damage_per_turn.coef"), "coef must be >= 0");
        }
    }
}

fn check_special(id: &SpecialId, tag: &SpecialTag, report: &mut ValidationReport) {
    let at = |path: &str| format!("{SPECIALS_FILE}:{id}.{path}");
    match tag.kind {
        SpecialKind::LifeSteal { ratio } if !(ratio.is_finite() && ratio >= 0.0) => {
            report.push(IssueCode::InvalidValue, at("ratio"), "ratio must be >= 0");
        }
        SpecialKind::ShieldCapBoost { amount } if !(amount.is_finite() && amount >= 0.0) => {
            report.push(IssueCode::InvalidValue, at("amount"), "amount must be >= 0");
        }
        _ => {}
    }
}

fn check_stats(stats: &Stats, location: &str, report: &mut ValidationReport) {
    if !stats.is_valid() {
        report.push(
            IssueCode::InvalidValue,
            location,
            "stats must be finite and non-negative",
        );
    }
    if stats.max_hp <= 0.0 {
        report.push(IssueCode::InvalidValue, format!("{location}.max_hp"), "max_hp must be > 0");
    }
}
