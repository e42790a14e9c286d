//! Depth-limited minimax search
//!
//! Plain minimax over every empty cell, no pruning and no move ordering
//! beyond row-major enumeration. Hypothetical moves are placed on the
//! caller's board through [`Board::trial`] and undone when the guard drops,
//! so the board is unchanged once the search returns.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Pos, Symbol};
//! use tictactoe::search::{FirstPicker, Searcher};
//!
//! let mut board = Board::classic();
//! board.place(Pos::new(0, 0), Symbol::O);
//! board.place(Pos::new(0, 1), Symbol::O);
//!
//! let mut searcher = Searcher::with_picker(FirstPicker);
//! let result = searcher.best_move(&mut board, Symbol::O, Symbol::X, 2);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Symbol};

use super::picker::{MovePicker, RandomPicker};

/// Score of a position won by the maximizing side.
///
/// A minimizing-side win scores the negation; everything else scores 0.
pub const WIN_SCORE: i32 = 10;

/// Sentinel below every reachable score
const NEG_INF: i32 = i32::MIN;

/// How decided positions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scoring {
    /// Every win scores `WIN_SCORE`, every loss `-WIN_SCORE`, however far
    /// away. A lost position makes all moves equal, so the first one in
    /// row-major order is played.
    #[default]
    Flat,
    /// Wins found with more depth left score higher and losses lower, so
    /// the search prefers quick wins and delays defeats.
    DepthAware,
}

impl Scoring {
    /// Adjust a decided evaluation found with `remaining` plies left
    #[inline]
    fn decided(self, score: i32, remaining: u32) -> i32 {
        match self {
            Scoring::Flat => score,
            Scoring::DepthAware => {
                let bonus = i32::try_from(remaining).unwrap_or(i32::MAX - WIN_SCORE);
                score + score.signum() * bonus
            }
        }
    }
}

/// Score the board from the maximizer's point of view.
#[inline]
pub fn evaluate(board: &Board, maximizer: Symbol, minimizer: Symbol) -> i32 {
    if board.has_won(maximizer) {
        WIN_SCORE
    } else if board.has_won(minimizer) {
        -WIN_SCORE
    } else {
        0
    }
}

/// Search result containing the chosen move and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax value of the chosen move
    pub score: i32,
    /// Positions evaluated, root excluded
    pub nodes: u64,
    /// Whether the move came from the fallback picker
    pub used_fallback: bool,
}

/// The two sides of one search
#[derive(Debug, Clone, Copy)]
struct Sides {
    maximizer: Symbol,
    minimizer: Symbol,
}

impl Sides {
    #[inline]
    fn to_move(self, maximizing: bool) -> Symbol {
        if maximizing {
            self.maximizer
        } else {
            self.minimizer
        }
    }
}

/// Minimax searcher.
///
/// Stateless between calls apart from the node counter and the fallback
/// picker.
#[derive(Debug, Clone)]
pub struct Searcher<P = RandomPicker> {
    picker: P,
    scoring: Scoring,
    nodes: u64,
}

impl Searcher<RandomPicker> {
    /// Searcher with a randomly seeded fallback
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::new())
    }
}

impl Default for Searcher<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MovePicker> Searcher<P> {
    pub fn with_picker(picker: P) -> Self {
        Self {
            picker,
            scoring: Scoring::Flat,
            nodes: 0,
        }
    }

    /// Use `scoring` for decided positions
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    #[inline]
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for `maximizer`.
    ///
    /// Each empty cell is tried in row-major order with `maximizer`'s symbol
    /// and scored by a minimax search of `depth - 1` further plies, opponent
    /// first. The first cell with the strictly highest score wins ties. A
    /// `depth` of 0 is searched as 1.
    ///
    /// Falls back to the picker only when no cell was scored, which means the
    /// board has no empty cell and the picker has nothing to choose from.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        maximizer: Symbol,
        minimizer: Symbol,
        depth: u32,
    ) -> SearchResult {
        self.nodes = 0;
        let sides = Sides {
            maximizer,
            minimizer,
        };
        let depth = depth.max(1);

        let mut best_score = NEG_INF;
        let mut best_move = None;

        for pos in board.empty_cells() {
            let Some(mut child) = board.trial(pos, maximizer) else {
                continue;
            };
            let score = self.minimax(&mut child, depth - 1, false, sides);
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        match best_move {
            Some(pos) => SearchResult {
                best_move: Some(pos),
                score: best_score,
                nodes: self.nodes,
                used_fallback: false,
            },
            None => {
                let fallback = self.picker.pick(&board.empty_cells());
                SearchResult {
                    best_move: fallback,
                    score: evaluate(board, maximizer, minimizer),
                    nodes: self.nodes,
                    used_fallback: fallback.is_some(),
                }
            }
        }
    }

    /// Value of `board` with `depth` plies left.
    ///
    /// A decided game, an exhausted depth or a full board ends the branch
    /// with its static evaluation. The first child initializes the running
    /// best; later children replace it only when strictly better.
    fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool, sides: Sides) -> i32 {
        self.nodes += 1;

        let score = evaluate(board, sides.maximizer, sides.minimizer);
        if score.abs() == WIN_SCORE {
            return self.scoring.decided(score, depth);
        }
        if depth == 0 {
            return score;
        }

        let moves = board.empty_cells();
        if moves.is_empty() {
            return score;
        }

        let symbol = sides.to_move(maximizing);
        let mut best: Option<i32> = None;

        for pos in moves {
            let Some(mut child) = board.trial(pos, symbol) else {
                continue;
            };
            let value = self.minimax(&mut child, depth - 1, !maximizing, sides);

            best = Some(match best {
                None => value,
                Some(current) if maximizing => current.max(value),
                Some(current) => current.min(value),
            });
        }

        best.unwrap_or(score)
    }
}

/// Best move for `maximizer` with a random fallback picker.
pub fn best_move(
    board: &mut Board,
    maximizer: Symbol,
    minimizer: Symbol,
    depth: u32,
) -> Option<Pos> {
    Searcher::new()
        .best_move(board, maximizer, minimizer, depth)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FirstPicker;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::classic();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    'X' => assert!(board.place(Pos::new(r, c), Symbol::X)),
                    'O' => assert!(board.place(Pos::new(r, c), Symbol::O)),
                    _ => {}
                }
            }
        }
        board
    }

    fn searcher() -> Searcher<FirstPicker> {
        Searcher::with_picker(FirstPicker)
    }

    /// Picker that records whether it was consulted
    #[derive(Default)]
    struct SpyPicker {
        calls: usize,
    }

    impl MovePicker for SpyPicker {
        fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
            self.calls += 1;
            candidates.last().copied()
        }
    }

    #[test]
    fn test_evaluate_scores() {
        let x_wins = board_from(&["XXX", "OO.", "..."]);
        assert_eq!(evaluate(&x_wins, Symbol::X, Symbol::O), WIN_SCORE);
        assert_eq!(evaluate(&x_wins, Symbol::O, Symbol::X), -WIN_SCORE);
        assert_eq!(evaluate(&Board::classic(), Symbol::X, Symbol::O), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = board_from(&["OO.", "XX.", "X.."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_immediate_win_at_depth_one() {
        let mut board = board_from(&["X.O", ".XO", "X.."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 1);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_blocks_corner_threat() {
        // X threatens (0,2); every other reply loses at once
        let mut board = board_from(&["XX.", ".O.", "..."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_depth_aware_blocks_diagonal_threat() {
        // X at (0,0) and (1,1), O at (0,1). Blocking at (2,2) still loses to
        // a fork, but it is the slowest loss.
        let mut board = board_from(&["XO.", ".X.", "..."]);
        let mut s = searcher().with_scoring(Scoring::DepthAware);
        let result = s.best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert!(result.score < 0);
    }

    #[test]
    fn test_flat_scoring_in_lost_position() {
        // Same position: with flat scores every move is a loss and the
        // first empty cell is played
        let mut board = board_from(&["XO.", ".X.", "..."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_depth_aware_prefers_faster_win() {
        // O wins now at (0,2) or later elsewhere; both are wins
        let mut board = board_from(&["OO.", "XX.", "X.."]);
        let mut s = searcher().with_scoring(Scoring::DepthAware);
        let result = s.best_move(&mut board, Symbol::O, Symbol::X, 5);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, WIN_SCORE + 4);
    }

    #[test]
    fn test_blocks_at_depth_two() {
        let mut board = board_from(&["XX.", "O..", "..."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 2);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut board = board_from(&["XX.", "OO.", "X.."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_row_major_tie_break() {
        // At depth 1 nothing wins or loses, every move scores 0
        let mut board = Board::classic();
        let result = searcher().best_move(&mut board, Symbol::X, Symbol::O, 1);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, 0);

        let mut board = board_from(&["XO.", "...", "..."]);
        let result = searcher().best_move(&mut board, Symbol::X, Symbol::O, 1);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_depth_zero_searches_one_ply() {
        let mut board = board_from(&["OO.", "XX.", "X.."]);
        let shallow = searcher().best_move(&mut board, Symbol::O, Symbol::X, 0);
        let one = searcher().best_move(&mut board, Symbol::O, Symbol::X, 1);
        assert_eq!(shallow, one);
        assert_eq!(shallow.best_move, Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = board_from(&["X..", ".O.", "..X"]);
        let before = board.clone();
        let empty_before = board.empty_cells();
        let _ = searcher().best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(board, before);
        assert_eq!(board.empty_cells(), empty_before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = board_from(&["XOX", "XOO", "OXX"]);
        let mut spy = Searcher::with_picker(SpyPicker::default());
        let result = spy.best_move(&mut board, Symbol::X, Symbol::O, 9);
        assert_eq!(result.best_move, None);
        assert!(!result.used_fallback);
        assert_eq!(spy.picker.calls, 1);
    }

    #[test]
    fn test_picker_unused_when_search_finds_move() {
        let mut board = board_from(&["XO.", ".X.", "..."]);
        let mut spy = Searcher::with_picker(SpyPicker::default());
        let result = spy.best_move(&mut board, Symbol::O, Symbol::X, 3);
        assert!(result.best_move.is_some());
        assert!(!result.used_fallback);
        assert_eq!(spy.picker.calls, 0);
    }

    #[test]
    fn test_node_count_exhaustive_single_gap() {
        // One empty cell: the root tries it once and the child is terminal
        let mut board = board_from(&["XOX", "XOO", "OX."]);
        let mut s = searcher();
        let result = s.best_move(&mut board, Symbol::O, Symbol::X, 9);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(s.nodes(), 1);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_depth_cutoff_conflates_with_draw() {
        // X threatens to win in two moves; a one-ply search cannot see it
        let mut board = board_from(&["X..", "...", "..."]);
        let result = searcher().best_move(&mut board, Symbol::O, Symbol::X, 1);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_larger_board_finds_win() {
        let mut board = Board::new(4, 4).unwrap();
        for c in 0..3 {
            board.place(Pos::new(1, c), Symbol::X);
        }
        board.place(Pos::new(0, 0), Symbol::O);
        board.place(Pos::new(3, 3), Symbol::O);
        let result = searcher().best_move(&mut board, Symbol::X, Symbol::O, 2);
        assert_eq!(result.best_move, Some(Pos::new(1, 3)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_free_function() {
        let mut board = board_from(&["OO.", "XX.", "X.."]);
        assert_eq!(
            best_move(&mut board, Symbol::O, Symbol::X, 3),
            Some(Pos::new(0, 2))
        );
    }
}
