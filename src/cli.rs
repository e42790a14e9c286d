//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tic-Tac-Toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Generalized Tic-Tac-Toe with a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal as X against the AI
    Terminal {
        /// Board rows
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns
        #[arg(long)]
        cols: Option<usize>,

        /// AI search depth
        #[arg(short, long)]
        depth: Option<u32>,

        /// Prefer faster wins and slower losses
        #[arg(long)]
        depth_aware: bool,

        /// TOML config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Open the windowed 3x3 game
    Window {
        /// AI search depth
        #[arg(short, long)]
        depth: Option<u32>,

        /// Prefer faster wins and slower losses
        #[arg(long)]
        depth_aware: bool,
    },
}
