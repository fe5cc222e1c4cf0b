//! Run command implementation.

use super::output::{JsonMatchResult, failure_line, format_text, reporting_line};
use super::{CliError, OutputFormat, agent_by_name};
use kingsheep::map::load_map;
use kingsheep::runner::{MatchConfig, run_match};
use std::path::PathBuf;
use std::time::Duration;

/// Execute the run command.
///
/// Setup failures (bad map, missing figures) are not process errors: they
/// print the `<map>,0,0,<description>` reporting line, per the match result
/// contract, and exit successfully.
///
/// # Errors
///
/// Returns an error for CLI misuse (unknown agent name) or output failures.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    map: PathBuf,
    player1: String,
    player2: String,
    rounds: u32,
    deadline_ms: u64,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let map_id = map.display().to_string();

    // Generate seed if not provided
    #[allow(clippy::cast_possible_truncation)]
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let agents = [
        agent_by_name(&player1, seed)?,
        agent_by_name(&player2, seed.wrapping_add(1))?,
    ];
    let names = [agents[0].name().to_string(), agents[1].name().to_string()];

    let config = MatchConfig {
        rounds,
        move_deadline: Duration::from_millis(deadline_ms),
        ..MatchConfig::default()
    };

    let field = match load_map(&map) {
        Ok(field) => field,
        Err(e) => {
            println!("{}", failure_line(&map_id, &e.to_string()));
            return Ok(());
        }
    };

    if !quiet {
        println!("Running {map_id} with seed {seed}...");
        println!("Players: {}, {}", names[0], names[1]);
        println!();
    }

    let result = match run_match(field, agents, &config) {
        Ok(result) => result,
        Err(e) => {
            println!("{}", failure_line(&map_id, &e.to_string()));
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            if !quiet {
                print!("{}", format_text(&result, [names[0].as_str(), names[1].as_str()]));
            }
            println!("{}", reporting_line(&map_id, &result));
        }
        OutputFormat::Json => {
            let json_result = JsonMatchResult::from_match_result(&map_id, &result);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
