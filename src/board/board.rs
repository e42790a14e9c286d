//! Board structure with move validation

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Cell, Pos, Symbol, Variant, CLASSIC_SIZE};
use crate::error::BoardError;
use crate::rules::{self, Outcome};

/// Game board of `rows` x `cols` cells with a fixed win length.
///
/// Dimensions and win length are set at construction and never change.
/// Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board under the general rules (up to four in a row).
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::for_variant(Variant::General, rows, cols)
    }

    /// Create an empty board whose win length is derived from `variant`.
    pub fn for_variant(variant: Variant, rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_win_length(rows, cols, variant.win_length(rows, cols))
    }

    /// Create an empty board with an explicit win length.
    ///
    /// The win length must be between 1 and the board's smaller side.
    pub fn with_win_length(
        rows: usize,
        cols: usize,
        win_length: usize,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        if win_length == 0 || win_length > rows.min(cols) {
            return Err(BoardError::InvalidWinLength {
                rows,
                cols,
                win_length,
            });
        }
        Ok(Self {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Classic 3x3 board, three in a row
    pub fn classic() -> Self {
        Self {
            rows: CLASSIC_SIZE,
            cols: CLASSIC_SIZE,
            win_length: CLASSIC_SIZE,
            cells: vec![Cell::Empty; CLASSIC_SIZE * CLASSIC_SIZE],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Consecutive cells needed to win
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells
    #[inline]
    fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Get cell at position, `None` when out of bounds
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Rows top to bottom
    pub fn cells(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.cols)
    }

    /// Check if a move is in bounds and targets an empty cell
    #[inline]
    pub fn is_valid(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Place `symbol` at `pos` if the move is valid.
    ///
    /// Returns whether the move was applied. Occupied and out-of-bounds
    /// targets leave the board untouched.
    pub fn place(&mut self, pos: Pos, symbol: Symbol) -> bool {
        if !self.is_valid(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = Cell::Taken(symbol);
        true
    }

    /// Tentatively place `symbol` at `pos`.
    ///
    /// The cell is emptied again when the returned guard is dropped.
    /// Returns `None` when the move is not valid.
    pub fn trial(&mut self, pos: Pos, symbol: Symbol) -> Option<TrialMove<'_>> {
        if self.place(pos, symbol) {
            Some(TrialMove { board: self, pos })
        } else {
            None
        }
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Pos::new(idx / cols, idx % cols))
            .collect()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Number of taken cells
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.size() - self.empty_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Check if `symbol` has a run of at least `win_length` cells
    #[inline]
    pub fn has_won(&self, symbol: Symbol) -> bool {
        rules::has_won(self, symbol)
    }

    /// Cells of the first winning run for `symbol`, if any
    pub fn find_winning_line(&self, symbol: Symbol) -> Option<Vec<Pos>> {
        rules::find_winning_line(self, symbol)
    }

    /// Current state of play
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Empty every cell, keeping dimensions and win length
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    #[inline]
    fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.cols).map(|c| c.to_string()).collect();
        let separator = format!("  +{}", "---+".repeat(self.cols));

        writeln!(f, "    {}", header.join("   "))?;
        writeln!(f, "{separator}")?;
        for r in 0..self.rows {
            let marks: Vec<String> = self
                .row(r)
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Taken(symbol) => symbol.to_string(),
                })
                .collect();
            writeln!(f, "{r} | {} |", marks.join(" | "))?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

/// A move placed for exploration only.
///
/// Derefs to the board it was placed on; the cell goes back to empty
/// when the guard is dropped, including on early return or unwinding.
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl TrialMove<'_> {
    /// Position of the tentative move
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
