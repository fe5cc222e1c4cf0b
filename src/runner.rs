//! Round orchestration and match control.
//!
//! Each round walks a fixed four-slot order: sheep1, sheep2, then (on even
//! rounds only, and only if the match is still running) wolf1 and wolf2.
//! Every slot hands the corresponding agent a deep-copy snapshot of the
//! field and waits for its decision on an isolated worker thread, bounded
//! by a hard wall-clock deadline. A missed deadline (or a worker that
//! panics) is fatal to the match and attributed to the offending player;
//! the abandoned worker's late result, if any, is discarded.
//!
//! The match controller loops rounds until a terminal event or the round
//! budget runs out, then derives the final grading from the scores.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::agents::Agent;
use crate::error::SetupError;
use crate::game::{
    Awards, EndReason, Field, Figure, GameState, Move, Player, StepResult, assert_invariants,
};
use crate::map::validate_figures;

/// Default round budget (`NO_ITERATIONS` in the original tournament).
pub const DEFAULT_ROUNDS: u32 = 100;

/// Default per-move deadline (`MAX_CALC_TIME`).
pub const DEFAULT_MOVE_DEADLINE: Duration = Duration::from_secs(1);

/// Configuration for one match.
///
/// There is no process-wide mutable configuration; everything the engine
/// consumes is in this value.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Round budget: the match ends after this many rounds at the latest.
    pub rounds: u32,
    /// Hard wall-clock deadline for each agent decision.
    pub move_deadline: Duration,
    /// Food award table.
    pub awards: Awards,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            move_deadline: DEFAULT_MOVE_DEADLINE,
            awards: Awards::default(),
        }
    }
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Player 1's final score.
    pub score1: u32,
    /// Player 2's final score.
    pub score2: u32,
    /// Player 1's grading in [0, 1].
    pub grading1: f64,
    /// Player 2's grading in [0, 1].
    pub grading2: f64,
    /// Rounds actually run, including the terminal one.
    pub rounds_played: u32,
    /// The first terminal event, or `None` if the round budget ran out.
    pub reason: Option<EndReason>,
}

/// Run a complete match on the given field.
///
/// This is the main entry point: agents in, result out. Given the same
/// field, configuration and deterministic agents, two runs produce the
/// same result.
///
/// # Errors
///
/// Returns a [`SetupError`] if the field is missing a figure marker or has
/// duplicates. This is the only error path; once the match starts, agent
/// faults and illegal moves fold into the result.
pub fn run_match(
    field: Field,
    agents: [Arc<dyn Agent>; 2],
    config: &MatchConfig,
) -> Result<MatchResult, SetupError> {
    validate_figures(&field)?;
    Ok(MatchRunner::new(field, agents, *config).run())
}

/// Compute both gradings from the final scores.
///
/// Equal scores (including 0:0) grade 0.5 each. Otherwise each side gets
/// `0.9 * own / (own + other)` rounded to 3 decimals, and the strictly
/// larger score additionally gets the 0.1 winner floor, so the winner
/// always grades above the loser.
#[must_use]
pub fn grade(score1: u32, score2: u32) -> (f64, f64) {
    if score1 == score2 {
        return (0.5, 0.5);
    }

    let total = f64::from(score1) + f64::from(score2);
    let share1 = round3(0.9 * f64::from(score1) / total);
    let share2 = round3(0.9 * f64::from(score2) / total);

    if score1 > score2 {
        (0.1 + share1, share2)
    } else {
        (share1, 0.1 + share2)
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Drives the rounds of a single match.
struct MatchRunner {
    state: GameState,
    agents: [Arc<dyn Agent>; 2],
    config: MatchConfig,
}

impl MatchRunner {
    fn new(field: Field, agents: [Arc<dyn Agent>; 2], config: MatchConfig) -> Self {
        Self {
            state: GameState::new(field),
            agents,
            config,
        }
    }

    /// Run the match to completion and build the result.
    fn run(mut self) -> MatchResult {
        let mut reason: Option<EndReason> = None;
        let mut rounds_played = 0;

        for round in 1..=self.config.rounds {
            let game_over = self.play_round(round, &mut reason);
            rounds_played = round;
            assert_invariants(&self.state.field);
            if game_over {
                break;
            }
        }

        let score1 = self.state.scores.get(Player::One);
        let score2 = self.state.scores.get(Player::Two);
        let (grading1, grading2) = grade(score1, score2);

        MatchResult {
            score1,
            score2,
            grading1,
            grading2,
            rounds_played,
            reason,
        }
    }

    /// Play the fixed four-slot order of one round.
    ///
    /// Both sheep slots always run, even when an earlier slot in the same
    /// round already ended the match. The wolf block as a whole is guarded
    /// once: wolves act only on even rounds and only if no slot so far this
    /// round (or earlier) ended the match — so wolf2 still acts when wolf1's
    /// own slot was the terminal one.
    fn play_round(&mut self, round: u32, reason: &mut Option<EndReason>) -> bool {
        let mut game_over = false;

        for player in Player::BOTH {
            let outcome = self.play_slot(Figure::Sheep(player), *reason);
            game_over = game_over || outcome.game_over;
            *reason = outcome.reason;
        }

        if round % 2 == 0 && !game_over {
            for player in Player::BOTH {
                let outcome = self.play_slot(Figure::Wolf(player), *reason);
                game_over = game_over || outcome.game_over;
                *reason = outcome.reason;
            }
        }

        game_over
    }

    /// Run one slot: snapshot, decide under deadline, resolve.
    fn play_slot(&mut self, figure: Figure, carried: Option<EndReason>) -> StepResult {
        let player = figure.player();
        let snapshot = self.state.field.snapshot();
        let agent = Arc::clone(&self.agents[player.index()]);

        match decide_with_deadline(agent, figure, snapshot, self.config.move_deadline) {
            Some(mv) => self.state.apply(self.config.awards, figure, mv, carried),
            None => StepResult::terminal(EndReason::Timeout(player)),
        }
    }
}

/// Invoke one agent decision on an isolated worker thread under a deadline.
///
/// Returns `None` when the deadline elapses, when the worker panics, or
/// when it cannot be spawned; all three count as a timeout against the
/// player. The worker is detached on timeout: whenever it eventually
/// finishes, its result is discarded because the receiving end is gone.
fn decide_with_deadline(
    agent: Arc<dyn Agent>,
    figure: Figure,
    snapshot: Field,
    deadline: Duration,
) -> Option<Move> {
    let (tx, rx) = mpsc::sync_channel(1);

    let worker = thread::Builder::new()
        .name(format!("decide-{figure}"))
        .spawn(move || {
            let mv = match figure {
                Figure::Sheep(player) => agent.decide_sheep_move(player, &snapshot),
                Figure::Wolf(player) => agent.decide_wolf_move(player, &snapshot),
            };
            // The receiver may already have given up; that is fine.
            let _ = tx.send(mv);
        });

    if worker.is_err() {
        return None;
    }

    rx.recv_timeout(deadline).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::PassiveAgent;
    use crate::map::parse_map;

    const TEST_MAP: &str = "\
S.g.W
.....
.r...
s...w
";

    fn passive_pair() -> [Arc<dyn Agent>; 2] {
        [Arc::new(PassiveAgent), Arc::new(PassiveAgent)]
    }

    #[test]
    fn test_grading_examples() {
        let (g1, g2) = grade(7, 3);
        assert!((g1 - 0.73).abs() < 1e-9, "g1 = {g1}");
        assert!((g2 - 0.27).abs() < 1e-9, "g2 = {g2}");

        let (g1, g2) = grade(5, 5);
        assert!((g1 - 0.5).abs() < 1e-9 && (g2 - 0.5).abs() < 1e-9);
        let (g1, g2) = grade(0, 0);
        assert!((g1 - 0.5).abs() < 1e-9 && (g2 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_grading_winner_always_above_loser() {
        for (s1, s2) in [(1, 0), (0, 3), (100, 99), (2, 50)] {
            let (g1, g2) = grade(s1, s2);
            if s1 > s2 {
                assert!(g1 > g2, "({s1},{s2}) -> ({g1},{g2})");
            } else {
                assert!(g2 > g1, "({s1},{s2}) -> ({g1},{g2})");
            }
        }
    }

    #[test]
    fn test_passive_match_runs_out_the_budget() {
        let field = parse_map(TEST_MAP).expect("valid map");
        let config = MatchConfig {
            rounds: 10,
            ..MatchConfig::default()
        };

        let result = run_match(field, passive_pair(), &config).expect("valid setup");
        assert_eq!(result.rounds_played, 10);
        assert_eq!(result.reason, None);
        assert_eq!(result.score1, 0);
        assert_eq!(result.score2, 0);
        assert!((result.grading1 - 0.5).abs() < 1e-9);
        assert!((result.grading2 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_setup_rejects_missing_figure() {
        let mut field = parse_map(TEST_MAP).expect("valid map");
        let wolf2 = field
            .locate(Figure::Wolf(Player::Two))
            .expect("wolf2 present");
        field.set(wolf2, crate::game::Cell::Empty);

        let result = run_match(field, passive_pair(), &MatchConfig::default());
        assert!(matches!(
            result,
            Err(SetupError::MissingFigure(Figure::Wolf(Player::Two)))
        ));
    }
}
