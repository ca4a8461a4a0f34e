//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use tictactoe_duel::{Mark, Mode};

/// Tic-tac-toe against a friend or an automated opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Tic-tac-toe with a heuristic automated opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode: hvh (human vs human) or hva (human vs automated)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Seed for the automated opponent's tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Automated opponent's thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to the settings file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,
    },

    /// Print the automated opponent's choice for a grid
    Suggest {
        /// Nine cells, row-major: X, O, or . for empty (e.g. "XX.O.....")
        #[arg(long)]
        grid: String,

        /// Mark the automated opponent plays
        #[arg(long, default_value = "O")]
        mark: Mark,

        /// Seed for tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
