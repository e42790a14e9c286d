//! Game state management for the Tic-Tac-Toe window

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::ConfigError;
use crate::game::{Mode, Round, RoundStatus};
use crate::rules::Outcome;
use crate::scores::Scoreboard;
use crate::search::Scoring;
use crate::{Pos, Symbol};

pub const PLAYER_1: &str = "Player 1";
pub const PLAYER_2: &str = "Player 2";
pub const AI: &str = "AI";

/// Pause between the human move and the AI reply
pub const AI_DELAY: Duration = Duration::from_millis(500);

/// Side the computer plays in Human vs AI mode
const AI_SYMBOL: Symbol = Symbol::O;

/// AI computation state
pub enum AiState {
    Idle,
    /// Reply scheduled for `due`
    Waiting { due: Instant },
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub round: Round,
    pub scores: Scoreboard,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,

    // AI engine configuration
    ai_depth: u32,
    ai_scoring: Scoring,
    ai_delay: Duration,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            round: Round::new(config.build_board()?, Mode::HumanVsHuman),
            scores: Scoreboard::new(config.scoring, [PLAYER_1, PLAYER_2, AI]),
            ai_state: AiState::Idle,
            last_ai_result: None,
            message: None,
            ai_depth: config.search_depth(),
            ai_scoring: config.search,
            ai_delay: AI_DELAY,
        })
    }

    /// Override the pause before the AI replies
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn is_vs_ai(&self) -> bool {
        matches!(self.round.mode(), Mode::HumanVsAi { .. })
    }

    /// Names of the X and O players in the current mode
    pub fn names(&self) -> [&'static str; 2] {
        if self.is_vs_ai() {
            [PLAYER_1, AI]
        } else {
            [PLAYER_1, PLAYER_2]
        }
    }

    /// Check if AI is waiting or thinking
    pub fn is_ai_busy(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_over()
    }

    /// Switch between Human vs Human and Human vs AI and start a fresh board
    pub fn toggle_mode(&mut self) {
        let mode = if self.is_vs_ai() {
            Mode::HumanVsHuman
        } else {
            Mode::HumanVsAi { ai: AI_SYMBOL }
        };
        self.round.set_mode(mode);
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Clear the board, keeping mode and scores
    pub fn play_again(&mut self) {
        self.round.restart();
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Attempt a human move at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<RoundStatus, String> {
        if self.round.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_busy() || self.round.is_ai_turn() {
            return Err("AI is thinking".to_string());
        }

        let status = self.round.play(pos);
        if status == RoundStatus::Rejected {
            return Err("That cell is already taken".to_string());
        }
        self.after_move(status);
        Ok(status)
    }

    fn after_move(&mut self, status: RoundStatus) {
        self.message = None;
        match status {
            RoundStatus::Won(_) | RoundStatus::Draw => {
                let names = self.names();
                self.round.settle(&mut self.scores, names);
            }
            RoundStatus::Continue if self.round.is_ai_turn() => {
                self.ai_state = AiState::Waiting {
                    due: Instant::now() + self.ai_delay,
                };
            }
            RoundStatus::Continue | RoundStatus::Rejected => {}
        }
    }

    /// Advance the AI: start the search once the delay has passed, apply
    /// the reply once it arrives
    pub fn poll_ai(&mut self, now: Instant) {
        if matches!(self.ai_state, AiState::Waiting { due } if now >= due) {
            self.start_ai_thinking();
            return;
        }

        let reply = match &self.ai_state {
            AiState::Thinking { receiver, .. } => receiver.try_recv(),
            AiState::Waiting { .. } | AiState::Idle => return,
        };
        match reply {
            Ok(result) => self.apply_ai_result(result),
            Err(std::sync::mpsc::TryRecvError::Empty) => {}
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                warn!("AI worker exited without a move");
                self.ai_state = AiState::Idle;
                self.message = Some("AI error".to_string());
            }
        }
    }

    /// Time left before a scheduled AI move starts
    pub fn ai_wait_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Waiting { due } => Some(due.saturating_duration_since(now)),
            _ => None,
        }
    }

    fn start_ai_thinking(&mut self) {
        if !self.round.is_ai_turn() {
            self.ai_state = AiState::Idle;
            return;
        }

        let mut board = self.round.board().clone();
        let color = self.round.turn();
        let depth = self.ai_depth;
        let scoring = self.ai_scoring;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(depth, scoring);
            let result = engine.get_move_with_stats(&mut board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    fn apply_ai_result(&mut self, result: MoveResult) {
        if let AiState::Thinking { start_time, .. } = &self.ai_state {
            debug!(elapsed_ms = start_time.elapsed().as_millis() as u64, "AI reply received");
        }
        self.ai_state = AiState::Idle;
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                let status = self.round.play(pos);
                self.after_move(status);
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Status line text
    pub fn status_text(&self) -> String {
        let turn = self.round.turn();
        match self.round.outcome() {
            Outcome::Won(symbol) => format!("{} wins!", self.name_of(symbol)),
            Outcome::Draw => "It's a tie!".to_string(),
            Outcome::InProgress if self.round.is_ai_turn() => format!("AI's turn ({turn})"),
            Outcome::InProgress => format!("{}'s turn ({turn})", self.name_of(turn)),
        }
    }

    /// Score line text for the participants of the current mode
    pub fn score_text(&self) -> String {
        let [x_name, o_name] = self.names();
        format!(
            "{}: {}   {}: {}",
            x_name,
            self.scores.points(x_name),
            o_name,
            self.scores.points(o_name)
        )
    }

    fn name_of(&self, symbol: Symbol) -> &'static str {
        let [x_name, o_name] = self.names();
        match symbol {
            Symbol::X => x_name,
            Symbol::O => o_name,
        }
    }
}
