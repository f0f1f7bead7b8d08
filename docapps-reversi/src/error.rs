//! Error types for the Reversi model

use crate::types::{Disc, Position};
use docapps_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for Reversi operations
pub type Result<T> = std::result::Result<T, ReversiError>;

/// Errors that can occur while playing or loading a game
#[derive(Debug, Error)]
pub enum ReversiError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("square {0} is already occupied")]
    Occupied(Position),

    #[error("a disc at {0} would not flip anything")]
    NoFlips(Position),

    #[error("{0} has no legal move and must pass")]
    MustPass(Disc),

    #[error("{0} has a legal move and cannot pass")]
    CannotPass(Disc),

    #[error("the game is over")]
    GameOver,

    /// Notation that is not a square, e.g. `"z9"`
    #[error("invalid square notation: {0}")]
    InvalidNotation(String),

    /// Stored state that parsed as JSON but is not a game
    #[error("invalid game state: {0}")]
    InvalidState(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReversiError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl Severity for ReversiError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // A rejected click; the game is unchanged
            ReversiError::OutOfBounds { .. }
            | ReversiError::Occupied(_)
            | ReversiError::NoFlips(_)
            | ReversiError::MustPass(_)
            | ReversiError::CannotPass(_)
            | ReversiError::GameOver
            | ReversiError::InvalidNotation(_) => ErrorSeverity::Warning,

            ReversiError::InvalidState(_) => ErrorSeverity::Error,
            ReversiError::Json(_) => ErrorSeverity::Critical,
        }
    }
}
