//! CLI command implementations for Kingsheep.

pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use kingsheep::agents::{Agent, GreedyAgent, PassiveAgent, RandomAgent};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output ending with the reporting line.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Build a bundled agent from its CLI name.
pub(crate) fn agent_by_name(name: &str, seed: u64) -> Result<Arc<dyn Agent>, CliError> {
    match name {
        "passive" => Ok(Arc::new(PassiveAgent)),
        "random" => Ok(Arc::new(RandomAgent::new(seed))),
        "greedy" => Ok(Arc::new(GreedyAgent)),
        other => Err(CliError::new(format!(
            "unknown agent {other:?} (expected passive, random or greedy)"
        ))),
    }
}
