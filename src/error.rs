//! Error types for the board, configuration and game session.

use std::path::PathBuf;

/// Errors raised by [`Board`](crate::board::Board) lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside a {size}x{size} board")]
    OutOfRange { row: i32, column: i32, size: usize },
}

/// A direction name that is not one of up, down, left or right.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0}")]
pub struct ParseDirectionError(pub String);

/// A player name that is not one of red, blue, 1 or 2.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player: {0}")]
pub struct ParseSideError(pub String);

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Errors raised by [`GameSession`](crate::game::GameSession) moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is {expected}'s turn")]
    OutOfTurn { expected: &'static str },
}
