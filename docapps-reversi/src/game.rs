//! The Reversi turn state machine

use crate::error::{Result, ReversiError};
use crate::types::{Disc, Grid, Position, DIRECTIONS, SIZE};
use tracing::debug;

/// Disc counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { turn: Disc },
    /// Neither side can move. `winner` is `None` on a draw.
    Finished { winner: Option<Disc> },
}

/// A game: the grid plus the side to move.
///
/// The turn always changes hands after a move. A side left without a legal
/// move has to [`Game::pass`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    turn: Disc,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Disc::Black)
    }
}

impl Game {
    /// Standard opening with `first` to move
    pub fn new(first: Disc) -> Self {
        Self::from_parts(Grid::default(), first)
    }

    pub fn from_parts(grid: Grid, turn: Disc) -> Self {
        Self { grid, turn }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Disc {
        self.turn
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.grid.count(Disc::Black),
            white: self.grid.count(Disc::White),
        }
    }

    /// Every opposing disc that `disc` placed on `pos` would flip.
    ///
    /// Empty when the square is occupied, off the board, or brackets nothing.
    pub fn flips_for(&self, pos: Position, disc: Disc) -> Vec<Position> {
        if !pos.is_on_board() || self.grid.get(pos).is_some() {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for step in DIRECTIONS {
            let mut run = Vec::new();
            let mut cursor = pos.offset(step);
            while let Some(next) = cursor {
                match self.grid.get(next) {
                    Some(found) if found == disc.opponent() => run.push(next),
                    Some(_) => {
                        flips.append(&mut run);
                        break;
                    }
                    None => break,
                }
                cursor = next.offset(step);
            }
        }
        flips
    }

    /// All squares where `disc` may play, row by row
    pub fn legal_moves(&self, disc: Disc) -> Vec<Position> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| !self.flips_for(*pos, disc).is_empty())
            .collect()
    }

    pub fn has_legal_move(&self, disc: Disc) -> bool {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
            .any(|pos| !self.flips_for(pos, disc).is_empty())
    }

    /// Whether the side to move may play on `pos`
    pub fn is_legal(&self, pos: Position) -> bool {
        !self.flips_for(pos, self.turn).is_empty()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_legal_move(self.turn) || self.has_legal_move(self.turn.opponent()) {
            return GameStatus::InProgress { turn: self.turn };
        }

        let Score { black, white } = self.score();
        let winner = match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        };
        GameStatus::Finished { winner }
    }

    /// Place a disc for the side to move and flip what it brackets.
    ///
    /// Returns the number of flipped discs. The game is unchanged on error.
    pub fn play(&mut self, pos: Position) -> Result<usize> {
        if let GameStatus::Finished { .. } = self.status() {
            return Err(ReversiError::GameOver);
        }
        if !pos.is_on_board() {
            return Err(ReversiError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.grid.get(pos).is_some() {
            return Err(ReversiError::Occupied(pos));
        }
        if !self.has_legal_move(self.turn) {
            return Err(ReversiError::MustPass(self.turn));
        }

        let flips = self.flips_for(pos, self.turn);
        if flips.is_empty() {
            return Err(ReversiError::NoFlips(pos));
        }

        self.grid.set(pos, Some(self.turn));
        for flipped in &flips {
            self.grid.set(*flipped, Some(self.turn));
        }
        debug!(disc = %self.turn, at = %pos, flipped = flips.len(), "disc placed");

        self.turn = self.turn.opponent();
        Ok(flips.len())
    }

    /// Hand the turn over when the side to move has no legal move.
    pub fn pass(&mut self) -> Result<()> {
        if let GameStatus::Finished { .. } = self.status() {
            return Err(ReversiError::GameOver);
        }
        if self.has_legal_move(self.turn) {
            return Err(ReversiError::CannotPass(self.turn));
        }

        debug!(disc = %self.turn, "turn passed");
        self.turn = self.turn.opponent();
        Ok(())
    }
}
