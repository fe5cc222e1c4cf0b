//! Field invariants - sanity checks that detect bugs.
//!
//! In a correctly implemented engine these never trigger: the move resolver
//! only ever relocates a marker or replaces it with its dead form. If one
//! fires, it indicates a bug in move resolution, not a gameplay situation.

use crate::game::{Cell, Field, Player};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all field invariants.
///
/// Returns the violations found, or empty if all invariants hold:
/// - at most one live sheep marker per player, and never a live marker
///   together with a dead marker for the same sheep;
/// - at most one dead sheep marker per player;
/// - exactly one wolf marker per player (wolves are never removed).
#[must_use]
pub fn check_invariants(field: &Field) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for player in Player::BOTH {
        let mut live_sheep = 0u32;
        let mut dead_sheep = 0u32;
        let mut wolves = 0u32;

        for (_, cell) in field.iter() {
            match cell {
                Cell::Sheep(p) if p == player => live_sheep += 1,
                Cell::DeadSheep(p) if p == player => dead_sheep += 1,
                Cell::Wolf(p) if p == player => wolves += 1,
                _ => {}
            }
        }

        if live_sheep > 1 {
            violations.push(InvariantViolation {
                message: format!("{live_sheep} live sheep{} markers", player.number()),
            });
        }
        if dead_sheep > 1 {
            violations.push(InvariantViolation {
                message: format!("{dead_sheep} dead sheep{} markers", player.number()),
            });
        }
        if live_sheep >= 1 && dead_sheep >= 1 {
            violations.push(InvariantViolation {
                message: format!(
                    "sheep{} has both a live and a dead marker",
                    player.number()
                ),
            });
        }
        if wolves != 1 {
            violations.push(InvariantViolation {
                message: format!("{wolves} wolf{} markers, expected 1", player.number()),
            });
        }
    }

    violations
}

/// Assert all field invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(field: &Field) {
    let violations = check_invariants(field);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Field invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_field: &Field) {}
