// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Kingsheep: a deterministic two-player adversarial grid game engine.
//!
//! Each player controls a sheep and a wolf on a shared fenced field. Sheep
//! score by eating food every round; wolves move on even rounds and end the
//! match by catching the opposing sheep. Agent decisions run on isolated
//! workers under a hard per-move deadline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Match Controller             │
//! ├─────────────────────────────────────┤
//! │        Round Orchestrator           │
//! ├─────────────────────────────────────┤
//! │   Move Resolver / Field / Scores    │
//! └─────────────────────────────────────┘
//! ```
//!
//! The match controller owns the authoritative state for the whole match;
//! agents only ever see deep-copy snapshots, and all mutation happens on
//! the controller's thread between agent invocations.

pub mod agents;
pub mod error;
pub mod game;
pub mod map;
pub mod runner;

pub use error::SetupError;

// Re-export key game types at crate root for convenience
pub use agents::{Agent, GreedyAgent, PassiveAgent, RandomAgent};
pub use game::{Cell, Coord, EndReason, Field, Figure, Move, Player, Scoreboard};
pub use map::{load_map, parse_map};
pub use runner::{MatchConfig, MatchResult, grade, run_match};
