//! Arena simulator entry point.
//!
//! Runs seeded battles between the configured player and an enemy template
//! with both sides picked automatically, printing each battle log and a
//! win summary.
mod autopilot;
mod config;

use anyhow::{Context, Result};
use combat_content::ContentBundle;
use combat_core::{BattleEngine, BattleState, Dice, PcgRng, Winner};

use autopilot::AutoPilot;
use config::ArenaConfig;

/// Keeps the autopilot's stream apart from the engine's.
const AUTOPILOT_SALT: u64 = 0x5eed_a070_9170_7000;

#[derive(Debug, Default)]
struct Tally {
    player: u32,
    enemy: u32,
    escaped: u32,
    rounds: u64,
}

impl Tally {
    fn record(&mut self, winner: &Winner, rounds: u32) {
        match winner {
            Winner::Player(_) => self.player += 1,
            Winner::Enemy(_) => self.enemy += 1,
            Winner::Escaped => self.escaped += 1,
        }
        self.rounds += u64::from(rounds);
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::from_env();
    let bundle = match &config.data_dir {
        Some(dir) => ContentBundle::load(dir)?,
        None => ContentBundle::embedded()?,
    };
    let template = bundle
        .enemy(&config.enemy)
        .with_context(|| format!("unknown enemy '{}'", config.enemy))?;
    let level = config.level.unwrap_or(template.base_level);

    tracing::info!(enemy = %template.id, level, battles = config.battles, "arena starting");

    let env = bundle.env();
    let rng = PcgRng;
    let mut tally = Tally::default();

    for n in 0..config.battles {
        let seed = config.seed.wrapping_add(u64::from(n));
        let mut state =
            BattleState::new(bundle.new_player().combatant, template.instantiate(level));
        let mut pilot = AutoPilot::new(env, Dice::new(&rng, seed ^ AUTOPILOT_SALT));

        let outcome = BattleEngine::new(env, &rng, seed).run_battle(&mut state, &mut pilot)?;

        if config.verbose {
            println!("=== Battle {} (seed {seed}) ===", n + 1);
            for line in &outcome.logs {
                println!("{line}");
            }
            println!();
        }
        tally.record(&outcome.winner, outcome.rounds);
    }

    let total = config.battles.max(1);
    println!(
        "{} vs {} (level {level}): {} battle(s)",
        bundle.player_base().name,
        template.name,
        config.battles
    );
    println!("  player wins: {}", tally.player);
    println!("  enemy wins:  {}", tally.enemy);
    println!("  escapes:     {}", tally.escaped);
    println!(
        "  avg rounds:  {:.1}",
        tally.rounds as f64 / f64::from(total)
    );

    Ok(())
}
