//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Headless tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (symbols, prompt, log filter)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session on stdin/stdout
    Play,

    /// Apply cells in order and print the resulting position
    Replay {
        /// Cells to play, as an index 0-8 or a label such as `center`
        cells: Vec<String>,

        /// Jump to this history position after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
