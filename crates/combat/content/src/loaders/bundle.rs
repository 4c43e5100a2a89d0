//! Whole-directory content loading.

use std::path::Path;

use combat_core::{Catalog, CombatConfig, CombatEnv, EnemyTemplate, Player};

use crate::loaders::{
    ConfigLoader, EnemyLoader, LoadResult, SkillLoader, SpecialLoader, StatusLoader, read_file,
};
use crate::player::PlayerBase;
use crate::validation::{ContentValidator, ValidationReport};

/// Raw text of every content file.
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub skills: &'a str,
    pub statuses: &'a str,
    pub specials: &'a str,
    pub enemies: &'a str,
    pub config: &'a str,
}

impl ContentSources<'static> {
    /// The sample content shipped with this crate.
    pub const EMBEDDED: Self = Self {
        skills: include_str!("../../data/skills.ron"),
        statuses: include_str!("../../data/statuses.ron"),
        specials: include_str!("../../data/specials.ron"),
        enemies: include_str!("../../data/enemies.ron"),
        config: include_str!("../../data/config.toml"),
    };
}

/// Validated content ready to run battles.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// ├── statuses.ron
/// ├── specials.ron
/// └── enemies.ron
/// ```
#[derive(Debug, Clone)]
pub struct ContentBundle {
    catalog: Catalog,
    config: CombatConfig,
    enemies: Vec<EnemyTemplate>,
    player: PlayerBase,
}

impl ContentBundle {
    pub const SKILLS_FILE: &'static str = "skills.ron";
    pub const STATUSES_FILE: &'static str = "statuses.ron";
    pub const SPECIALS_FILE: &'static str = "specials.ron";
    pub const ENEMIES_FILE: &'static str = "enemies.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Loads and validates every file in `data_dir`.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or unparsable files, or with a
    /// [`crate::ContentError`] listing every validation issue.
    pub fn load(data_dir: impl AsRef<Path>) -> LoadResult<Self> {
        let dir = data_dir.as_ref();
        let skills = read_file(&dir.join(Self::SKILLS_FILE))?;
        let statuses = read_file(&dir.join(Self::STATUSES_FILE))?;
        let specials = read_file(&dir.join(Self::SPECIALS_FILE))?;
        let enemies = read_file(&dir.join(Self::ENEMIES_FILE))?;
        let config = read_file(&dir.join(Self::CONFIG_FILE))?;

        tracing::info!(dir = %dir.display(), "loading combat content");
        Self::from_sources(ContentSources {
            skills: &skills,
            statuses: &statuses,
            specials: &specials,
            enemies: &enemies,
            config: &config,
        })
    }

    /// Loads the bundled sample content.
    pub fn embedded() -> LoadResult<Self> {
        Self::from_sources(ContentSources::EMBEDDED)
    }

    /// Parses, binds and validates content from memory.
    pub fn from_sources(sources: ContentSources<'_>) -> LoadResult<Self> {
        let skills = SkillLoader::parse(sources.skills)?;
        let statuses = StatusLoader::parse(sources.statuses)?;
        let special_specs = SpecialLoader::parse(sources.specials)?;
        let enemies = EnemyLoader::parse(sources.enemies)?;
        let config = ConfigLoader::parse(sources.config)?;

        let mut report = ValidationReport::new();
        let specials = SpecialLoader::bind_all(&special_specs, &mut report);
        ContentValidator {
            skills: &skills,
            statuses: &statuses,
            specials: &specials,
            enemies: &enemies,
            config: &config.combat,
            player: &config.player,
        }
        .validate(&mut report);

        if !report.is_empty() {
            tracing::warn!(issues = report.len(), "combat content rejected");
        }
        report.into_result()?;

        let mut catalog = Catalog::default();
        for (id, skill) in skills {
            catalog.insert_skill(id, skill);
        }
        for (id, status) in statuses {
            catalog.insert_status(id, status);
        }
        for (id, tag) in specials {
            catalog.insert_special(id, tag);
        }

        tracing::debug!(enemies = enemies.len(), "combat content loaded");
        Ok(Self {
            catalog,
            config: config.combat,
            enemies,
            player: config.player,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Definitions and configuration as an engine environment.
    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::from_catalog(&self.catalog, &self.config)
    }

    /// Enemy templates in file order.
    pub fn enemies(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn player_base(&self) -> &PlayerBase {
        &self.player
    }

    /// A fresh player built from the configured starting profile.
    pub fn new_player(&self) -> Player {
        self.player.build()
    }
}
