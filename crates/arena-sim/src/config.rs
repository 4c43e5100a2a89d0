//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// What the simulator fights and how often.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Content directory; the bundled sample content when unset.
    pub data_dir: Option<PathBuf>,
    /// Enemy template id.
    pub enemy: String,
    /// Enemy level; the template's base level when unset.
    pub level: Option<u32>,
    /// Seed of the first battle. Battle `n` uses `seed + n`.
    pub seed: u64,
    pub battles: u32,
    /// Print every battle log line, not just the summary.
    pub verbose: bool,
}

impl ArenaConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: bundled content)
    /// - `ARENA_ENEMY` - Enemy template id (default: `goblin`)
    /// - `ARENA_LEVEL` - Enemy level (default: template base level)
    /// - `ARENA_SEED` - First battle seed (default: 0)
    /// - `ARENA_BATTLES` - Number of battles (default: 1)
    /// - `ARENA_VERBOSE` - Print battle logs, `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARENA_DATA_DIR")
            && !dir.trim().is_empty()
        {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(enemy) = env::var("ARENA_ENEMY") {
            config.enemy = enemy;
        }
        config.level = read_env("ARENA_LEVEL");
        if let Some(seed) = read_env("ARENA_SEED") {
            config.seed = seed;
        }
        if let Some(battles) = read_env::<u32>("ARENA_BATTLES") {
            config.battles = battles.max(1);
        }
        if let Some(verbose) = read_env("ARENA_VERBOSE") {
            config.verbose = verbose;
        }

        config
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            enemy: "goblin".to_owned(),
            level: None,
            seed: 0,
            battles: 1,
            verbose: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
