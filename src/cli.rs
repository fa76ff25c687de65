//! Command-line interface for strictly_ludo.

use clap::{Parser, Subcommand};

/// Strictly Ludo - four-player Ludo in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_ludo")]
#[command(about = "Four-player Ludo with a strict rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on standard input
    Play {
        /// Path to a TOML config file (missing file means defaults)
        #[arg(short, long, default_value = "ludo.toml")]
        config: std::path::PathBuf,

        /// Dice seed, overriding the config file
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the empty board layout
    Board,

    /// Print the default rules as TOML
    Rules {
        /// Print the traditional rules (six to leave the yard) instead
        #[arg(long)]
        traditional: bool,
    },
}
