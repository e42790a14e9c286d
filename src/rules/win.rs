//! Win detection for boards of any size
//!
//! A symbol wins with `win_length` consecutive cells along a row, a column
//! or either diagonal. Rows and columns are scanned end to end. Diagonals
//! are scanned as overlapping windows of exactly `win_length` cells, one per
//! anchor, so runs shorter than the board side are found anywhere.

use crate::board::{Board, Pos, Symbol};

/// Direction a line is walked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Along a row
    Right,
    /// Down a column
    Down,
    /// Top-left to bottom-right
    DownRight,
    /// Top-right to bottom-left
    DownLeft,
}

/// A straight run of cells to scan
#[derive(Debug, Clone, Copy)]
struct Line {
    start: Pos,
    step: Step,
    len: usize,
}

impl Line {
    /// The `i`-th cell of the line. `i < len` keeps it on the board.
    #[inline]
    fn at(&self, i: usize) -> Pos {
        let Pos { row, col } = self.start;
        match self.step {
            Step::Right => Pos::new(row, col + i),
            Step::Down => Pos::new(row + i, col),
            Step::DownRight => Pos::new(row + i, col + i),
            Step::DownLeft => Pos::new(row + i, col - i),
        }
    }
}

/// Every line the win check scans, in scan order:
/// rows, columns, descending windows, ascending windows.
fn lines(board: &Board) -> impl Iterator<Item = Line> {
    let (rows, cols, n) = (board.rows(), board.cols(), board.win_length());
    let anchor_rows = rows + 1 - n;

    let full_rows = (0..rows).map(move |r| Line {
        start: Pos::new(r, 0),
        step: Step::Right,
        len: cols,
    });
    let full_cols = (0..cols).map(move |c| Line {
        start: Pos::new(0, c),
        step: Step::Down,
        len: rows,
    });
    let descending = (0..anchor_rows).flat_map(move |r| {
        (0..=cols - n).map(move |c| Line {
            start: Pos::new(r, c),
            step: Step::DownRight,
            len: n,
        })
    });
    let ascending = (0..anchor_rows).flat_map(move |r| {
        (n - 1..cols).map(move |c| Line {
            start: Pos::new(r, c),
            step: Step::DownLeft,
            len: n,
        })
    });

    full_rows.chain(full_cols).chain(descending).chain(ascending)
}

/// Walk `line` counting consecutive `symbol` cells.
///
/// Returns the index at which the count first reaches `n`.
#[inline]
fn scan_line(board: &Board, line: &Line, symbol: Symbol, n: usize) -> Option<usize> {
    let mut count = 0;
    for i in 0..line.len {
        let holds = board.get(line.at(i)).is_some_and(|cell| cell.holds(symbol));
        if holds {
            count += 1;
            if count == n {
                return Some(i);
            }
        } else {
            count = 0;
        }
    }
    None
}

/// Check if `symbol` has `win_length` or more in a row
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    let n = board.win_length();
    lines(board).any(|line| scan_line(board, &line, symbol, n).is_some())
}

/// Find the first winning run for `symbol`
///
/// Returns exactly `win_length` positions, ordered along the line, or
/// `None` if `symbol` has not won.
pub fn find_winning_line(board: &Board, symbol: Symbol) -> Option<Vec<Pos>> {
    let n = board.win_length();
    lines(board).find_map(|line| {
        scan_line(board, &line, symbol, n)
            .map(|end| (end + 1 - n..=end).map(|i| line.at(i)).collect())
    })
}
