//! Error types for board construction, move input and configuration

use std::path::PathBuf;

/// Errors raised when a board cannot be built with the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("win length {win_length} does not fit a {rows}x{cols} board")]
    InvalidWinLength {
        rows: usize,
        cols: usize,
        win_length: usize,
    },
}

/// Errors raised while parsing a `row,col` move typed by a player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected two numbers separated by a comma, got {0} field(s)")]
    FieldCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("coordinate {0} is out of range")]
    OutOfRange(i64),
}

/// Errors raised while loading or validating a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}
