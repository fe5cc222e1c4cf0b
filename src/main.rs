//! Kingsheep CLI - run and inspect Kingsheep matches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Kingsheep - a deterministic adversarial grid game engine
#[derive(Parser, Debug)]
#[command(name = "kingsheep")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single match between two agents
    Run {
        /// Map file
        #[arg(required = true)]
        map: std::path::PathBuf,

        /// Agent for player 1: passive, random, or greedy
        #[arg(long, default_value = "random")]
        player1: String,

        /// Agent for player 2: passive, random, or greedy
        #[arg(long, default_value = "random")]
        player2: String,

        /// Round budget (default: 100)
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Per-move deadline in milliseconds (default: 1000)
        #[arg(long, default_value = "1000")]
        deadline_ms: u64,

        /// Random seed for seeded agents (default: from clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the reporting line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a map file
    Validate {
        /// Map file to validate
        #[arg(required = true)]
        map: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            map,
            player1,
            player2,
            rounds,
            deadline_ms,
            seed,
            format,
            quiet,
        } => cli::run::execute(
            map,
            player1,
            player2,
            rounds,
            deadline_ms,
            seed,
            format,
            quiet,
        ),

        Commands::Validate { map } => cli::validate::execute(map),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
