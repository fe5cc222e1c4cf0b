//! Game layer for Kingsheep.
//!
//! Implements the rules of the game:
//! - Field of cells (figures, food, fences)
//! - Movement legality and resolution
//! - Score ledger with the all-or-nothing transfer events
//! - Per-round sanity invariants

mod field;
mod invariants;
mod rules;
mod state;

pub use field::{Cell, Coord, Field, Figure, Move, Player};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use rules::{Awards, EndReason, StepResult, apply_move};
pub use state::{GameState, Scoreboard};
