//! Board-level types: Disc, Position, Grid

use crate::error::ReversiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board
pub const SIZE: usize = 8;

/// The eight compass directions as (row, col) steps
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A player's colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    #[default]
    Black,
    White,
}

impl Disc {
    pub fn opponent(self) -> Self {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            Disc::Black => 'B',
            Disc::White => 'W',
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Option<Self>> {
        match symbol {
            'B' => Some(Some(Disc::Black)),
            'W' => Some(Some(Disc::White)),
            '.' => Some(None),
            _ => None,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Black => write!(f, "black"),
            Disc::White => write!(f, "white"),
        }
    }
}

impl From<docapps_config::FirstPlayer> for Disc {
    fn from(first: docapps_config::FirstPlayer) -> Self {
        match first {
            docapps_config::FirstPlayer::Black => Disc::Black,
            docapps_config::FirstPlayer::White => Disc::White,
        }
    }
}

/// A square, zero-based from the top-left corner.
///
/// Displays in algebraic notation: column letter `a`-`h`, row number `1`-`8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// The neighbouring square one `step` away, if it is on the board
    pub(crate) fn offset(self, (dr, dc): (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self::new(row, col);
        next.is_on_board().then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(col) if self.is_on_board() => write!(f, "{}{}", char::from(b'a' + col), self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Position {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReversiError::InvalidNotation(s.to_string());
        let mut chars = s.trim().chars();
        let col = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;

        if !('a'..='h').contains(&col) || !(1..=SIZE).contains(&row) {
            return Err(invalid());
        }
        Ok(Self::new(row - 1, col as usize - 'a' as usize))
    }
}

/// The 8x8 grid of squares
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<Disc>; SIZE]; SIZE],
}

impl Default for Grid {
    /// The standard opening: white on d4/e5, black on e4/d5
    fn default() -> Self {
        let mut grid = Self::empty();
        grid.set(Position::new(3, 3), Some(Disc::White));
        grid.set(Position::new(3, 4), Some(Disc::Black));
        grid.set(Position::new(4, 3), Some(Disc::Black));
        grid.set(Position::new(4, 4), Some(Disc::White));
        grid
    }
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// The disc on `pos`; `None` for an empty or off-board square
    pub fn get(&self, pos: Position) -> Option<Disc> {
        if pos.is_on_board() {
            self.cells[pos.row][pos.col]
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// If `pos` is off the board.
    pub(crate) fn set(&mut self, pos: Position, disc: Option<Disc>) {
        self.cells[pos.row][pos.col] = disc;
    }

    pub fn count(&self, disc: Disc) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(disc))
            .count()
    }

    /// One string per row, top to bottom, using `.`, `B` and `W`
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Disc::symbol))
                    .collect()
            })
            .collect()
    }

    /// Inverse of [`Grid::rows`]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> crate::Result<Self> {
        if rows.len() != SIZE {
            return Err(ReversiError::invalid_state(format!(
                "expected {SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut grid = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != SIZE {
                return Err(ReversiError::invalid_state(format!(
                    "row {} has {} squares",
                    row + 1,
                    line.chars().count()
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                let disc = Disc::from_symbol(symbol).ok_or_else(|| {
                    ReversiError::invalid_state(format!("unknown square symbol '{symbol}'"))
                })?;
                grid.set(Position::new(row, col), disc);
            }
        }
        Ok(grid)
    }
}
