use std::path::Path;

use tracing::{info, warn};

use crate::board::{Board, Variant, CLASSIC_SIZE};
use crate::engine::{DEFAULT_DEPTH, LARGE_BOARD_DEPTH};
use crate::error::ConfigError;
use crate::scores::ScoringRules;
use crate::search::Scoring;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub variant: Variant,
    /// AI search depth in plies; derived from the board size when unset
    pub depth: Option<u32>,
    /// How the AI scores decided positions
    pub search: Scoring,
    /// Points awarded per round
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::terminal()
    }
}

impl GameConfig {
    /// Terminal game: 3x3 general rules, 3 points a win, 1 a draw
    pub fn terminal() -> Self {
        GameConfig {
            rows: CLASSIC_SIZE,
            cols: CLASSIC_SIZE,
            variant: Variant::General,
            depth: None,
            search: Scoring::Flat,
            scoring: ScoringRules::TERMINAL,
        }
    }

    /// Windowed game: 3x3 classic rules, 3 points a win, 2 a draw
    pub fn window() -> Self {
        GameConfig {
            variant: Variant::Classic,
            scoring: ScoringRules::WINDOW,
            ..Self::terminal()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), rows = config.rows, cols = config.cols, "config loaded");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to terminal
    /// defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("cols must be > 0".into()));
        }
        if self.depth == Some(0) {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        if self.scoring.win_points < self.scoring.draw_points {
            return Err(ConfigError::Validation(
                "scoring.win_points must be >= scoring.draw_points".into(),
            ));
        }
        Ok(())
    }

    /// Search depth for the AI.
    ///
    /// An explicit depth is used as given. Otherwise boards up to 3x3 are
    /// searched exhaustively and larger ones at [`LARGE_BOARD_DEPTH`].
    pub fn search_depth(&self) -> u32 {
        match self.depth {
            Some(depth) => depth,
            None if self.rows * self.cols <= CLASSIC_SIZE * CLASSIC_SIZE => DEFAULT_DEPTH,
            None => LARGE_BOARD_DEPTH,
        }
    }

    /// Empty board with the configured shape and variant.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        Ok(Board::for_variant(self.variant, self.rows, self.cols)?)
    }
}
