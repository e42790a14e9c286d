//! Terminal state detection

use crate::board::{Board, Symbol};

use super::win::has_won;

/// State of play on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty cells left and nobody has won
    InProgress,
    /// `Symbol` completed a winning run
    Won(Symbol),
    /// Board full without a winner
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning symbol, if any
    #[inline]
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}

/// Classify the board.
///
/// A win takes precedence over a full board. X is checked before O; in
/// real play only one side can have a run since the game stops at the
/// first win.
pub fn outcome(board: &Board) -> Outcome {
    for symbol in [Symbol::X, Symbol::O] {
        if has_won(board, symbol) {
            return Outcome::Won(symbol);
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
