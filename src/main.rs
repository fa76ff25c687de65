//! Strictly Ludo - terminal front end
//!
//! Plays a hot-seat game over standard input and output.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_ludo::{Game, RuleSet};
use strictly_ludo_play::{Cli, Command, PlayConfig, Session, render_board};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed } => run_play(&config, seed),
        Command::Board => print_board(),
        Command::Rules { traditional } => print_rules(traditional),
    }
}

/// Runs an interactive game.
#[instrument]
fn run_play(config: &Path, seed: Option<u64>) -> Result<()> {
    let config = PlayConfig::load_or_default(Some(config))?.with_seed(seed);
    info!(rules = ?config.rules(), seed = ?config.seed(), "Starting game");

    let mut session = Session::from_config(&config)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Prints the starting board.
fn print_board() -> Result<()> {
    let game = Game::new(RuleSet::default())?;
    print!("{}", render_board(game.state()));
    Ok(())
}

/// Prints a rules file.
fn print_rules(traditional: bool) -> Result<()> {
    let rules = if traditional {
        RuleSet::traditional()
    } else {
        RuleSet::default()
    };
    print!("{}", PlayConfig::new(rules, None).to_toml()?);
    Ok(())
}
