//! tictactoe_duel - unified CLI
//!
//! Terminal play and a headless move suggester.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_duel::{Grid, Mark, MoveSelector, Position, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            seed,
            delay_ms,
            config,
        } => {
            tui::init_file_logging(tui::LOG_FILE)?;
            let settings = Settings::load_or_default(&config)
                .context("Failed to load settings")?
                .with_overrides(mode, delay_ms, seed)
                .context("Invalid settings")?;
            tui::run_tui(settings).await
        }
        Command::Suggest {
            grid,
            mark,
            seed,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            run_suggest(&grid, mark, seed, json)
        }
    }
}

/// JSON shape printed by `suggest --json`.
#[derive(Debug, Serialize)]
struct Suggestion {
    index: usize,
    position: &'static str,
    reason: String,
}

/// Prints the automated opponent's choice for a grid.
#[instrument]
fn run_suggest(grid: &str, mark: Mark, seed: Option<u64>, json: bool) -> Result<()> {
    let grid: Grid = grid.parse().context("Invalid grid")?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let selection = MoveSelector
        .select(&grid, mark, mark.opponent(), &mut rng)
        .context("Cannot suggest a move")?;
    let position = Position::from_index(selection.index)
        .context("Selector returned an index outside the grid")?;
    info!(index = selection.index, "Suggested move");

    if json {
        let suggestion = Suggestion {
            index: selection.index,
            position: position.label(),
            reason: selection.reason.to_string(),
        };
        println!("{}", serde_json::to_string(&suggestion)?);
    } else {
        println!("{}\n", grid);
        println!(
            "{} plays {} (index {}, {})",
            mark, position, selection.index, selection.reason
        );
    }

    Ok(())
}
