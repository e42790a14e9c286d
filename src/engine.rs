//! AI engine facade used by the front-ends
//!
//! Wraps the minimax [`Searcher`] with a configured depth, derives the
//! opponent from the side to move and records timing and node statistics.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Pos, Symbol};
//!
//! let mut engine = AIEngine::with_config(9, Default::default());
//! let mut board = Board::classic();
//! board.place(Pos::new(0, 0), Symbol::X);
//! board.place(Pos::new(1, 1), Symbol::X);
//! board.place(Pos::new(0, 1), Symbol::O);
//!
//! let result = engine.get_move_with_stats(&mut board, Symbol::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Pos, Symbol};
use crate::search::{MovePicker, RandomPicker, Scoring, SearchResult, Searcher};

/// Default search depth; exhaustive on a 3x3 board
pub const DEFAULT_DEPTH: u32 = 9;

/// Default search depth on boards larger than 3x3
pub const LARGE_BOARD_DEPTH: u32 = 3;

/// How the engine arrived at its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Chosen by minimax
    Minimax,
    /// Chosen by the fallback picker
    Fallback,
    /// Board had no empty cell
    NoMove,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the move from the mover's point of view
    pub score: i32,
    /// Source of the move
    pub search_type: SearchType,
    /// Depth actually searched
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, depth: u32, time_ms: u64) -> Self {
        let search_type = match (result.best_move, result.used_fallback) {
            (None, _) => SearchType::NoMove,
            (Some(_), true) => SearchType::Fallback,
            (Some(_), false) => SearchType::Minimax,
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Computer opponent.
///
/// Holds the search depth and scoring mode; the board is borrowed per call
/// and handed back unchanged.
pub struct AIEngine<P = RandomPicker> {
    searcher: Searcher<P>,
    max_depth: u32,
}

impl AIEngine<RandomPicker> {
    /// Engine at the default depth with flat scoring and a random fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, Scoring::Flat)
    }

    /// Engine with a custom depth and scoring mode.
    #[must_use]
    pub fn with_config(max_depth: u32, scoring: Scoring) -> Self {
        Self::with_picker(RandomPicker::new(), max_depth, scoring)
    }
}

impl Default for AIEngine<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MovePicker> AIEngine<P> {
    /// Engine with an explicit fallback picker.
    #[must_use]
    pub fn with_picker(picker: P, max_depth: u32, scoring: Scoring) -> Self {
        Self {
            searcher: Searcher::with_picker(picker).with_scoring(scoring),
            max_depth,
        }
    }

    /// Best move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, color: Symbol) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move for `color` with search statistics.
    ///
    /// The opponent of `color` is the minimizing side. The depth is capped
    /// at the number of empty cells, which cannot change the answer but
    /// keeps large depth settings cheap on crowded boards.
    #[instrument(
        level = "debug",
        skip(self, board),
        fields(rows = board.rows(), cols = board.cols())
    )]
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Symbol) -> MoveResult {
        let start = Instant::now();
        let depth = self.max_depth.min(board.empty_count() as u32).max(1);

        let result = self
            .searcher
            .best_move(board, color, color.opponent(), depth);
        let result = MoveResult::from_search(result, depth, start.elapsed().as_millis() as u64);

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            depth,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "AI move chosen"
        );
        result
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn scoring(&self) -> Scoring {
        self.searcher.scoring()
    }
}
