//! Agent strategies.
//!
//! An [`Agent`] is an opaque decision strategy satisfying a fixed calling
//! contract: given a player index and a read-only snapshot of the field,
//! return a move for the sheep or the wolf. Agents run on worker threads
//! under a hard deadline and must not depend on engine-internal state.
//!
//! Three strategies ship with the engine:
//! - [`PassiveAgent`] always passes
//! - [`RandomAgent`] plays a seeded uniformly random legal move
//! - [`GreedyAgent`] walks shortest paths to food (sheep) or prey (wolf)

mod greedy;
mod passive;
mod random;

pub use greedy::GreedyAgent;
pub use passive::PassiveAgent;
pub use random::RandomAgent;

use crate::game::{Field, Move, Player};

/// A pluggable decision strategy for one player's two figures.
///
/// Implementations are invoked from isolated worker threads with an owned
/// deep copy of the field; whatever they do to their copy is invisible to
/// the engine. A decision that outlives the per-move deadline is discarded
/// and ends the match against the offending player.
pub trait Agent: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Decide the sheep's move for this round.
    fn decide_sheep_move(&self, player: Player, field: &Field) -> Move;

    /// Decide the wolf's move for this round.
    fn decide_wolf_move(&self, player: Player, field: &Field) -> Move;
}
