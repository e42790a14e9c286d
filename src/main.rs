//! Tic-Tac-Toe
//!
//! Play in the terminal against the AI, or open the windowed game with
//! Human vs Human and Human vs AI modes.

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::config::GameConfig;
use tictactoe::search::Scoring;
use tictactoe::terminal::TerminalGame;
use tictactoe::ui::{GameState, TicTacToeApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the terminal game keeps stdout to itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Terminal {
            rows,
            cols,
            depth,
            depth_aware,
            config,
        } => {
            let mut config = match config {
                Some(path) => GameConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => GameConfig::terminal(),
            };
            config.rows = rows.unwrap_or(config.rows);
            config.cols = cols.unwrap_or(config.cols);
            config.depth = depth.or(config.depth);
            if depth_aware {
                config.search = Scoring::DepthAware;
            }
            run_terminal(&config)
        }
        Command::Window { depth, depth_aware } => {
            let mut config = GameConfig::window();
            config.depth = depth.or(config.depth);
            if depth_aware {
                config.search = Scoring::DepthAware;
            }
            run_window(&config)
        }
    }
}

/// Run the text game on stdin/stdout
fn run_terminal(config: &GameConfig) -> Result<()> {
    info!(
        rows = config.rows,
        cols = config.cols,
        depth = config.search_depth(),
        "starting terminal game"
    );
    let stdin = io::stdin();
    let mut game = TerminalGame::new(stdin.lock(), io::stdout(), config)
        .context("invalid game configuration")?;
    game.run().context("terminal I/O failed")?;
    Ok(())
}

/// Open the windowed game
fn run_window(config: &GameConfig) -> Result<()> {
    info!(depth = config.search_depth(), "starting windowed game");
    let state = GameState::new(config).context("invalid game configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([520.0, 400.0])
            .with_title("Tic-Tac-Toe Battle"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
