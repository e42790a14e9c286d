//! Generalized Tic-Tac-Toe with a minimax opponent
//!
//! Rules on an R x C board:
//! - Players X and O alternate, X first
//! - N in a row wins, horizontally, vertically or diagonally
//! - General rules use N = min(4, R, C), classic rules N = min(3, R, C)
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation and scoped trial moves
//! - [`rules`]: Win detection and game outcome
//! - [`search`]: Depth-limited minimax with a pluggable fallback picker
//! - [`engine`]: AI facade with depth capping and statistics
//! - [`game`]: One round of play shared by both front-ends
//! - [`scores`], [`config`]: Score tallies and TOML configuration
//! - [`terminal`], [`ui`]: Text and egui front-ends
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Pos, Symbol};
//!
//! let mut board = Board::classic();
//! let mut engine = AIEngine::new();
//!
//! board.place(Pos::new(1, 1), Symbol::X);
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_move(&mut board, Symbol::O) {
//!     board.place(pos, Symbol::O);
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod scores;
pub mod search;
pub mod terminal;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Symbol, Variant, CLASSIC_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use rules::Outcome;
