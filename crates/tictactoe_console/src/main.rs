//! Tic-tac-toe in the terminal against a minimax opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_console::{
    Cli, ComputerPlayer, GameConfig, HumanPlayer, Orchestrator, Player, play_series,
};
use tictactoe_core::Player as Mark;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
        .with_overrides(cli.mark, cli.name.clone());

    initialize_tracing(config.log_filter());
    info!(?config, games = ?cli.games, "Starting tictactoe");

    let human: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.human_name().clone(),
        io::stdin().lock(),
        io::stdout(),
    ));
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(config.computer_name().clone()));
    let mut orchestrator =
        Orchestrator::seated(human, computer, config.computer_mark(), io::stdout());
    orchestrator.say("Enter moves as column then row, like b2. Type ? for a hint or q to quit.\n")?;

    let tally = play_series(&mut orchestrator, cli.games)?;

    let summary = tally.summary(orchestrator.name_of(Mark::X), orchestrator.name_of(Mark::O));
    orchestrator.say(&summary)?;
    info!(games = tally.games(), "Exiting");

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
