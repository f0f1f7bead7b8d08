//! JSON form of a game, as stored in the host document

use crate::error::{Result, ReversiError};
use crate::game::Game;
use crate::types::{Disc, Grid};
use serde::{Deserialize, Serialize};

/// Serialized game: the side to move and eight row strings of `.`, `B`, `W`.
///
/// ```json
/// {
///   "turn": "black",
///   "board": ["........", "...", "...WB...", "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GameState {
    turn: Disc,
    board: Vec<String>,
}

impl Game {
    /// Pretty-printed JSON for the host to store
    pub fn to_json(&self) -> Result<String> {
        let state = GameState {
            turn: self.turn(),
            board: self.grid().rows(),
        };
        Ok(serde_json::to_string_pretty(&state)?)
    }

    /// Inverse of [`Game::to_json`].
    ///
    /// Fails with [`ReversiError::Json`] when `json` is not a game document,
    /// and with [`ReversiError::InvalidState`] when its board is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let state: GameState = serde_json::from_str(json)?;
        let grid = Grid::from_rows(&state.board)?;
        Ok(Game::from_parts(grid, state.turn))
    }
}

impl std::str::FromStr for Game {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}
