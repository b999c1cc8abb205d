//! tictactoe_history - headless tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use tictactoe_history_cli::{Cli, CliConfig, Command, Session, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { cells, jump, json } => run_replay(&cells, jump, json, &config),
    }
}

/// Logs go to stderr so stdout carries only game output.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: CliConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Replay a move list and print the result
#[instrument(skip(config))]
fn run_replay(cells: &[String], jump: Option<usize>, json: bool, config: &CliConfig) -> Result<()> {
    let report = replay(cells, jump, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
