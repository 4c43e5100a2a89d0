//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON/TOML file into `combat-core` types;
//! [`ContentBundle`] loads a whole data directory, validates it as a unit and
//! exposes the result as oracles.

pub mod bundle;
pub mod config;
pub mod enemies;
pub mod skills;
pub mod specials;
pub mod statuses;

pub use bundle::{ContentBundle, ContentSources};
pub use config::{ConfigLoader, ContentConfig};
pub use enemies::EnemyLoader;
pub use skills::SkillLoader;
pub use specials::{SpecialLoader, SpecialSpec};
pub use statuses::StatusLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
