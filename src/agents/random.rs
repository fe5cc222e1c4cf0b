//! Seeded random strategy.

use std::sync::{Mutex, PoisonError};

use crate::agents::Agent;
use crate::game::{Field, Figure, Move, Player};

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
struct XorShift {
    state: u64,
}

impl XorShift {
    /// Create a new RNG with the given seed.
    const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Pick a random index in `[0, len)`.
    #[allow(clippy::cast_possible_truncation)]
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }
}

/// Plays a uniformly random legal move each turn.
///
/// The PRNG is seeded, so a match against the same opponent on the same map
/// replays identically — the same snapshot sequence yields the same move
/// sequence.
#[derive(Debug)]
pub struct RandomAgent {
    rng: Mutex<XorShift>,
}

impl RandomAgent {
    /// Create a new random agent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(XorShift::new(seed)),
        }
    }

    fn pick(&self, figure: Figure, field: &Field) -> Move {
        let Some(origin) = field.locate(figure) else {
            return Move::None;
        };

        let legal: Vec<Move> = Move::DIRECTIONS
            .into_iter()
            .filter(|&mv| field.is_legal(figure, origin.step(mv)))
            .collect();
        if legal.is_empty() {
            return Move::None;
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        legal[rng.next_index(legal.len())]
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn decide_sheep_move(&self, player: Player, field: &Field) -> Move {
        self.pick(Figure::Sheep(player), field)
    }

    fn decide_wolf_move(&self, player: Player, field: &Field) -> Move {
        self.pick(Figure::Wolf(player), field)
    }
}
