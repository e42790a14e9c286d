//! Board representation for generalized tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, TrialMove};

/// Classic board size (3x3)
pub const CLASSIC_SIZE: usize = 3;

/// Player markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get opponent symbol
    #[inline]
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => f.write_str("X"),
            Symbol::O => f.write_str("O"),
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Symbol),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Does this cell hold `symbol`
    #[inline]
    pub fn holds(self, symbol: Symbol) -> bool {
        self == Cell::Taken(symbol)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Rule set deciding how long a winning run must be.
///
/// The win length is capped by the board's smaller side, so a 2x5 board
/// under the general rules is won with two in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Up to four in a row on any board
    #[default]
    General,
    /// Up to three in a row
    Classic,
}

impl Variant {
    /// Longest run this variant ever asks for
    #[inline]
    pub fn max_win_length(self) -> usize {
        match self {
            Variant::General => 4,
            Variant::Classic => 3,
        }
    }

    /// Win length for a `rows` x `cols` board
    #[inline]
    pub fn win_length(self, rows: usize, cols: usize) -> usize {
        self.max_win_length().min(rows).min(cols)
    }
}
