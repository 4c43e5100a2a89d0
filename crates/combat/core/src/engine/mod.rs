//! Turn scheduler.
//!
//! [`BattleEngine`] drives an encounter round by round:
//!
//! 1. Order both sides by speed (ties: player first)
//! 2. Collect both choices (player from an [`ActionSource`], enemy from the AI)
//! 3. Resolve in order, stopping the round once someone is down or escaped
//! 4. Apply end-of-turn status damage, then tick statuses
//!
//! The battle ends when a combatant is down or someone has escaped.
mod dice;
mod log;
mod outcome;
mod turns;

pub use dice::{Dice, RollKind};
pub use log::BattleLog;
pub use outcome::{BattleOutcome, Winner};
pub use turns::turn_order;

use crate::action::{ActionSource, resolve_action};
use crate::ai::choose_skill;
use crate::env::{CombatEnv, RngOracle};
use crate::error::CombatError;
use crate::state::{BattleState, Side, SkillId};

/// Runs encounters against one environment and one random stream.
#[derive(Debug)]
pub struct BattleEngine<'a> {
    env: CombatEnv<'a>,
    dice: Dice<'a>,
}

impl<'a> BattleEngine<'a> {
    /// Creates an engine whose draws derive from `seed`.
    pub fn new(env: CombatEnv<'a>, rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            env,
            dice: Dice::new(rng, seed),
        }
    }

    pub fn env(&self) -> CombatEnv<'a> {
        self.env
    }

    pub fn dice(&self) -> &Dice<'a> {
        &self.dice
    }

    /// Fights until one side is down or escaped.
    ///
    /// The state is left as the battle ended; callers read rewards and
    /// survivors from it.
    ///
    /// # Errors
    ///
    /// Returns `CombatError` if a chosen or known skill is undefined.
    pub fn run_battle(
        &mut self,
        state: &mut BattleState,
        player_source: &mut impl ActionSource,
    ) -> Result<BattleOutcome, CombatError> {
        tracing::info!(
            player = %state.player.name,
            enemy = %state.enemy.name,
            seed = self.dice.seed(),
            "battle started"
        );
        let mut log = BattleLog::new();

        while state.both_alive() && !state.anyone_escaped() {
            self.run_round(state, player_source, &mut log)?;
        }

        let winner = decide_winner(state);
        log.push(format!("Battle over! Winner: {winner}"));
        tracing::info!(%winner, rounds = state.round, "battle finished");

        Ok(BattleOutcome {
            winner,
            rounds: state.round,
            logs: log.into_lines(),
        })
    }

    /// Plays a single round.
    ///
    /// Remaining actions are skipped once either combatant is down or has
    /// escaped; an enemy escape ends the round the same way a player escape
    /// does. Status damage and ticks still run at the end of the round.
    ///
    /// # Errors
    ///
    /// Returns `CombatError` if a chosen or known skill is undefined.
    pub fn run_round(
        &mut self,
        state: &mut BattleState,
        player_source: &mut impl ActionSource,
        log: &mut BattleLog,
    ) -> Result<(), CombatError> {
        state.round += 1;
        log.push(format!("-- Round {} --", state.round));

        let order = turn_order(state);
        let mut choices: Vec<(Side, SkillId)> = Vec::with_capacity(order.len());
        for side in order {
            let choice = match side {
                Side::Player => player_source.choose(&state.player),
                Side::Enemy => choose_skill(&state.enemy, self.env, &mut self.dice)?,
            };
            tracing::debug!(round = state.round, %side, skill = %choice, "action chosen");
            choices.push((side, choice));
        }

        for (side, skill_id) in &choices {
            if !state.both_alive() {
                break;
            }
            resolve_action(state, *side, skill_id, self.env, &mut self.dice, log)?;
            if state.anyone_escaped() {
                break;
            }
        }

        let registry = self.env.registry();
        for side in [Side::Player, Side::Enemy] {
            registry.apply_status_damage(state.combatant_mut(side), log);
        }
        for side in [Side::Player, Side::Enemy] {
            registry.tick(state.combatant_mut(side));
        }

        Ok(())
    }
}

/// Player escape first, then the player's survival; both down means the
/// enemy wins. An escaped enemy concedes.
fn decide_winner(state: &BattleState) -> Winner {
    if state.player.escaped {
        Winner::Escaped
    } else if state.player.is_alive() {
        Winner::Player(state.player.name.clone())
    } else {
        Winner::Enemy(state.enemy.name.clone())
    }
}
