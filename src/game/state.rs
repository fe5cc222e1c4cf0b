//! Match state: field plus score ledger.

use crate::game::{Awards, EndReason, Field, Figure, Move, Player, StepResult, apply_move};

/// The score ledger: one counter per player.
///
/// Counters only grow, except for the all-or-nothing transfer on a suicide
/// or eaten outcome, which moves the loser's whole score to the winner and
/// zeroes the loser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: [u32; 2],
}

impl Scoreboard {
    /// Create a fresh ledger with both scores at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: [0, 0] }
    }

    /// Get a player's score.
    #[must_use]
    pub const fn get(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    /// Award points to a player.
    pub fn award(&mut self, player: Player, points: u32) {
        self.points[player.index()] = self.points[player.index()].saturating_add(points);
    }

    /// Move the loser's whole score to the opponent and zero the loser.
    pub fn transfer_all(&mut self, loser: Player) {
        let winner = loser.opponent();
        let transferred = self.points[loser.index()];
        self.points[winner.index()] =
            self.points[winner.index()].saturating_add(transferred);
        self.points[loser.index()] = 0;
    }
}

/// Authoritative match state, owned exclusively by the match controller.
///
/// Agents only ever see deep-copy snapshots of the field; the field and the
/// ledger are mutated between agent invocations on the controller's thread,
/// never concurrently.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The game field.
    pub field: Field,
    /// The score ledger.
    pub scores: Scoreboard,
}

impl GameState {
    /// Create a new match state over the given field.
    #[must_use]
    pub const fn new(field: Field) -> Self {
        Self {
            field,
            scores: Scoreboard::new(),
        }
    }

    /// Resolve one slot's move against this state.
    pub fn apply(
        &mut self,
        awards: Awards,
        figure: Figure,
        mv: Move,
        carried: Option<EndReason>,
    ) -> StepResult {
        apply_move(&mut self.field, &mut self.scores, awards, figure, mv, carried)
    }
}
