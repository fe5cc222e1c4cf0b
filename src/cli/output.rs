//! Output formatting utilities for CLI.

use kingsheep::runner::MatchResult;
use serde::Serialize;

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchResult {
    /// Map identifier (the path as given).
    pub(super) map: String,
    /// Player 1's final score.
    pub(super) score1: u32,
    /// Player 2's final score.
    pub(super) score2: u32,
    /// Player 1's grading, rounded to 2 decimals.
    pub(super) grading1: f64,
    /// Player 2's grading, rounded to 2 decimals.
    pub(super) grading2: f64,
    /// Rounds actually run.
    pub(super) rounds_played: u32,
    /// Termination reason tag (null if the round budget ran out).
    pub(super) reason: Option<String>,
}

impl JsonMatchResult {
    /// Create from a `MatchResult`.
    pub(super) fn from_match_result(map: &str, result: &MatchResult) -> Self {
        Self {
            map: map.to_string(),
            score1: result.score1,
            score2: result.score2,
            grading1: round2(result.grading1),
            grading2: round2(result.grading2),
            rounds_played: result.rounds_played,
            reason: result.reason.map(|r| r.to_string()),
        }
    }
}

/// Round to 2 decimals, as the reporting contract requires.
pub(super) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// The reporting line consumed by external tooling:
/// `<map>,<grading1>,<grading2>`.
pub(super) fn reporting_line(map: &str, result: &MatchResult) -> String {
    format!(
        "{map},{},{}",
        round2(result.grading1),
        round2(result.grading2)
    )
}

/// The reporting line for a setup failure: `<map>,0,0,<description>`.
pub(super) fn failure_line(map: &str, description: &str) -> String {
    format!("{map},0,0,{description}")
}

/// Format a match result as a human-readable summary.
pub(super) fn format_text(result: &MatchResult, names: [&str; 2]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Scores: {} {} - {} {}\n",
        names[0], result.score1, names[1], result.score2
    ));
    output.push_str(&format!("Rounds played: {}\n", result.rounds_played));
    match &result.reason {
        Some(reason) => output.push_str(&format!("Ended by: {reason}\n")),
        None => output.push_str("Ended by: round budget\n"),
    }

    output
}
