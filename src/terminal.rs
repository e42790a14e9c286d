//! Text front-end: human X against the computer O
//!
//! Generic over the input and output streams so whole sessions can be
//! scripted in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Board, Cell, Pos, Symbol};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::{ConfigError, InputError};
use crate::game::{Mode, Round, RoundStatus};
use crate::scores::Scoreboard;
use crate::search::{MovePicker, RandomPicker};

const PLAYER: &str = "Player";
const AI: &str = "AI";

/// Parse a `row,col` move.
pub fn parse_move(line: &str) -> Result<Pos, InputError> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    let [row, col] = fields.as_slice() else {
        return Err(InputError::FieldCount(fields.len()));
    };
    Ok(Pos::new(coordinate(row)?, coordinate(col)?))
}

fn coordinate(field: &str) -> Result<usize, InputError> {
    let value: i64 = field
        .parse()
        .map_err(|_| InputError::NotANumber(field.to_owned()))?;
    usize::try_from(value).map_err(|_| InputError::OutOfRange(value))
}

/// Interactive session over a pair of streams
pub struct TerminalGame<R, W, P = RandomPicker> {
    input: R,
    output: W,
    board: Board,
    engine: AIEngine<P>,
    scores: Scoreboard,
}

impl<R: BufRead, W: Write> TerminalGame<R, W> {
    pub fn new(input: R, output: W, config: &GameConfig) -> Result<Self, ConfigError> {
        let engine = AIEngine::with_config(config.search_depth(), config.search);
        Self::with_engine(input, output, config, engine)
    }
}

impl<R: BufRead, W: Write, P: MovePicker> TerminalGame<R, W, P> {
    pub fn with_engine(
        input: R,
        output: W,
        config: &GameConfig,
        engine: AIEngine<P>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            input,
            output,
            board: config.build_board()?,
            engine,
            scores: Scoreboard::new(config.scoring, [PLAYER, AI]),
        })
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Play rounds until the player declines another or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let finished = self.play_round()?;
            if !finished {
                break;
            }
            writeln!(
                self.output,
                "\nScores => Player: {}, AI: {}",
                self.scores.points(PLAYER),
                self.scores.points(AI)
            )?;

            write!(self.output, "\nDo you want to play again? (yes/no): ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => continue,
                _ => break,
            }
        }

        writeln!(self.output, "Thanks for playing! Final scores:")?;
        writeln!(
            self.output,
            "Player: {} | AI: {}",
            self.scores.points(PLAYER),
            self.scores.points(AI)
        )?;
        Ok(())
    }

    /// One round; `false` when input ended before the round finished
    fn play_round(&mut self) -> io::Result<bool> {
        let mut round = Round::new(self.board.clone(), Mode::HumanVsAi { ai: Symbol::O });
        let board = round.board();
        writeln!(
            self.output,
            "Welcome to {}x{} Tic-Tac-Toe! Get {} in a row to win.",
            board.rows(),
            board.cols(),
            board.win_length()
        )?;
        writeln!(self.output, "You are X. The AI is O.\n")?;
        write!(self.output, "{}", round.board())?;

        loop {
            let status = if round.is_ai_turn() {
                let (result, status) = round.play_ai(&mut self.engine);
                if let Some(pos) = result.best_move {
                    writeln!(self.output, "AI chooses: {pos}")?;
                }
                status
            } else {
                let Some(pos) = self.read_move(round.board())? else {
                    return Ok(false);
                };
                round.play(pos)
            };
            write!(self.output, "{}", round.board())?;

            match status {
                RoundStatus::Continue => {}
                RoundStatus::Won(Symbol::X) => {
                    writeln!(self.output, "You win! Congrats!")?;
                    break;
                }
                RoundStatus::Won(Symbol::O) => {
                    writeln!(self.output, "AI wins! Better luck next time.")?;
                    break;
                }
                RoundStatus::Draw => {
                    writeln!(self.output, "Game over, it's a tie!")?;
                    break;
                }
                // Only reachable if the engine had no move on a live board
                RoundStatus::Rejected => return Ok(false),
            }
        }

        round.settle(&mut self.scores, [PLAYER, AI]);
        Ok(true)
    }

    /// Prompt until a playable cell is entered; `None` at end of input
    fn read_move(&mut self, board: &Board) -> io::Result<Option<Pos>> {
        loop {
            write!(self.output, "Enter your move as 'row,col': ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_move(&line) {
                Ok(pos) => match board.get(pos) {
                    Some(Cell::Empty) => return Ok(Some(pos)),
                    Some(Cell::Taken(_)) => {
                        writeln!(self.output, "That cell is already taken.")?;
                    }
                    None => {
                        writeln!(
                            self.output,
                            "That cell is out of bounds; rows go 0-{} and columns 0-{}.",
                            board.rows() - 1,
                            board.cols() - 1
                        )?;
                    }
                },
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "unparseable move");
                    writeln!(
                        self.output,
                        "Please enter row and column as two numbers, like: 1,2 ({e})"
                    )?;
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
