//! The do-nothing strategy.

use crate::agents::Agent;
use crate::game::{Field, Move, Player};

/// Always passes. Useful as a baseline opponent and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAgent;

impl Agent for PassiveAgent {
    fn name(&self) -> &str {
        "passive"
    }

    fn decide_sheep_move(&self, _player: Player, _field: &Field) -> Move {
        Move::None
    }

    fn decide_wolf_move(&self, _player: Player, _field: &Field) -> Move {
        Move::None
    }
}
