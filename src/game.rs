//! One round of play: board, side to move and result
//!
//! Shared by the terminal and windowed front-ends. The round applies moves
//! for whichever side is to move and reports how the round stands; the
//! front-end decides who supplies each move.

use tracing::{debug, info};

use crate::board::{Board, Pos, Symbol};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::Outcome;
use crate::scores::Scoreboard;
use crate::search::MovePicker;

/// Who plays the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two humans share the input
    #[default]
    HumanVsHuman,
    /// The computer plays `ai`
    HumanVsAi { ai: Symbol },
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Move applied, the round goes on
    Continue,
    /// Move applied and completed a winning run
    Won(Symbol),
    /// Move applied and filled the board
    Draw,
    /// Move refused: occupied, off the board, or the round is over
    Rejected,
}

/// A single game from an empty board to a win or draw.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    mode: Mode,
    turn: Symbol,
    outcome: Outcome,
    history: Vec<(Pos, Symbol)>,
}

impl Round {
    /// X moves first on an empty copy of `board`'s shape
    pub fn new(mut board: Board, mode: Mode) -> Self {
        board.reset();
        info!(
            rows = board.rows(),
            cols = board.cols(),
            win_length = board.win_length(),
            ?mode,
            "round started"
        );
        Self {
            board,
            mode,
            turn: Symbol::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Symbol {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn history(&self) -> &[(Pos, Symbol)] {
        &self.history
    }

    /// Check if the computer is to move
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            Mode::HumanVsAi { ai } => !self.is_over() && self.turn == ai,
            Mode::HumanVsHuman => false,
        }
    }

    /// Cells of the winning run, if the round was won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.outcome
            .winner()
            .and_then(|symbol| self.board.find_winning_line(symbol))
    }

    /// Apply a move for the side to move.
    pub fn play(&mut self, pos: Pos) -> RoundStatus {
        if self.is_over() {
            debug!(%pos, "move after round end rejected");
            return RoundStatus::Rejected;
        }
        let symbol = self.turn;
        if !self.board.place(pos, symbol) {
            debug!(%pos, %symbol, "move rejected");
            return RoundStatus::Rejected;
        }
        self.history.push((pos, symbol));

        self.outcome = self.board.outcome();
        match self.outcome {
            Outcome::InProgress => {
                self.turn = symbol.opponent();
                RoundStatus::Continue
            }
            Outcome::Won(winner) => {
                info!(%winner, moves = self.history.len(), "round won");
                RoundStatus::Won(winner)
            }
            Outcome::Draw => {
                info!(moves = self.history.len(), "round drawn");
                RoundStatus::Draw
            }
        }
    }

    /// Ask `engine` for a move for the side to move and apply it.
    pub fn play_ai<P: MovePicker>(
        &mut self,
        engine: &mut AIEngine<P>,
    ) -> (MoveResult, RoundStatus) {
        let result = engine.get_move_with_stats(&mut self.board, self.turn);
        let status = match result.best_move {
            Some(pos) => self.play(pos),
            None => RoundStatus::Rejected,
        };
        (result, status)
    }

    /// Award points for a finished round; `names` are the X and O players
    pub fn settle(&self, scores: &mut Scoreboard, names: [&str; 2]) {
        let [x_name, o_name] = names;
        match self.outcome {
            Outcome::Won(Symbol::X) => scores.record_win(x_name),
            Outcome::Won(Symbol::O) => scores.record_win(o_name),
            Outcome::Draw => scores.record_draw(&names),
            Outcome::InProgress => {}
        }
    }

    /// Start over on the same board shape and mode
    pub fn restart(&mut self) {
        *self = Round::new(self.board.clone(), self.mode);
    }

    /// Switch mode and start over
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::ScoringRules;
    use crate::search::{FirstPicker, Scoring};

    fn classic_round(mode: Mode) -> Round {
        Round::new(Board::classic(), mode)
    }

    fn play_all(round: &mut Round, moves: &[(usize, usize)]) -> RoundStatus {
        let mut status = RoundStatus::Continue;
        for &(r, c) in moves {
            status = round.play(Pos::new(r, c));
        }
        status
    }

    #[test]
    fn test_turns_alternate() {
        let mut round = classic_round(Mode::HumanVsHuman);
        assert_eq!(round.turn(), Symbol::X);
        assert_eq!(round.play(Pos::new(0, 0)), RoundStatus::Continue);
        assert_eq!(round.turn(), Symbol::O);
        assert_eq!(round.board().get(Pos::new(0, 0)), Some(crate::board::Cell::Taken(Symbol::X)));
        assert_eq!(round.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut round = classic_round(Mode::HumanVsHuman);
        round.play(Pos::new(1, 1));
        assert_eq!(round.play(Pos::new(1, 1)), RoundStatus::Rejected);
        assert_eq!(round.play(Pos::new(3, 0)), RoundStatus::Rejected);
        assert_eq!(round.turn(), Symbol::O);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_win_ends_round() {
        let mut round = classic_round(Mode::HumanVsHuman);
        let status = play_all(&mut round, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(status, RoundStatus::Won(Symbol::X));
        assert!(round.is_over());
        assert_eq!(
            round.winning_line(),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(round.play(Pos::new(2, 2)), RoundStatus::Rejected);
    }

    #[test]
    fn test_draw() {
        let mut round = classic_round(Mode::HumanVsHuman);
        // X O X / X O O / O X X
        let status = play_all(
            &mut round,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(status, RoundStatus::Draw);
        assert_eq!(round.outcome(), Outcome::Draw);
        assert_eq!(round.winning_line(), None);
    }

    #[test]
    fn test_ai_turn() {
        let mut round = classic_round(Mode::HumanVsAi { ai: Symbol::O });
        assert!(!round.is_ai_turn());
        round.play(Pos::new(0, 0));
        assert!(round.is_ai_turn());

        let mut engine = AIEngine::with_picker(FirstPicker, 9, Scoring::Flat);
        let (result, status) = round.play_ai(&mut engine);
        assert_eq!(status, RoundStatus::Continue);
        assert_eq!(round.last_move(), result.best_move);
        assert_eq!(round.turn(), Symbol::X);
        assert!(!round.is_ai_turn());
    }

    #[test]
    fn test_ai_takes_win() {
        let mut round = classic_round(Mode::HumanVsAi { ai: Symbol::O });
        play_all(&mut round, &[(0, 0), (1, 0), (2, 2), (1, 1), (0, 2)]);
        let mut engine = AIEngine::with_picker(FirstPicker, 9, Scoring::Flat);
        let (result, status) = round.play_ai(&mut engine);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(status, RoundStatus::Won(Symbol::O));
    }

    #[test]
    fn test_settle_scores() {
        let mut scores = Scoreboard::new(ScoringRules::WINDOW, ["Player 1", "Player 2", "AI"]);

        let mut round = classic_round(Mode::HumanVsHuman);
        play_all(&mut round, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        round.settle(&mut scores, ["Player 1", "Player 2"]);
        assert_eq!(scores.points("Player 1"), 3);

        let mut round = classic_round(Mode::HumanVsAi { ai: Symbol::O });
        play_all(
            &mut round,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        round.settle(&mut scores, ["Player 1", "AI"]);
        assert_eq!(scores.points("Player 1"), 5);
        assert_eq!(scores.points("AI"), 2);
        assert_eq!(scores.points("Player 2"), 0);
    }

    #[test]
    fn test_unfinished_round_awards_nothing() {
        let mut scores = Scoreboard::new(ScoringRules::TERMINAL, ["Player", "AI"]);
        let mut round = classic_round(Mode::HumanVsHuman);
        round.play(Pos::new(0, 0));
        round.settle(&mut scores, ["Player", "AI"]);
        assert_eq!(scores.points("Player"), 0);
        assert_eq!(scores.points("AI"), 0);
    }

    #[test]
    fn test_mode_switch_resets() {
        let mut round = classic_round(Mode::HumanVsHuman);
        round.play(Pos::new(0, 0));
        round.set_mode(Mode::HumanVsAi { ai: Symbol::O });
        assert_eq!(round.mode(), Mode::HumanVsAi { ai: Symbol::O });
        assert_eq!(round.board().empty_count(), 9);
        assert_eq!(round.turn(), Symbol::X);
        assert!(round.history().is_empty());
    }
}
