//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Depth-limited minimax with row-major move enumeration
//! - Pluggable fallback move pickers (random or deterministic)

pub mod minimax;
pub mod picker;

pub use minimax::{best_move, evaluate, Scoring, SearchResult, Searcher, WIN_SCORE};
pub use picker::{FirstPicker, MovePicker, RandomPicker};
